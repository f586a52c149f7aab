// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Block labels.

use silt_ir::BlockId;

/// The label for a basic block. A pure function of the block's identity, so
/// forward branches can name their target before it is lowered.
pub fn block_label(id: BlockId) -> String {
    format!("BLOCK #{}", id.0)
}
