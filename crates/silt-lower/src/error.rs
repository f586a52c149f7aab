// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Fatal lowering errors.

use silt_ir::{BlockId, ValueId};

/// Conditions that abort the pass. Anything survivable is reported as a
/// diagnostic instead.
#[derive(Debug, thiserror::Error)]
pub enum LoweringError {
    /// A value was used before any instruction defined it. The input is
    /// malformed; continuing would attach dataflow to the wrong names.
    #[error("value {value} used before definition in `{function}`")]
    UndefinedValue { value: ValueId, function: String },

    /// A terminator names a destination block the function does not contain.
    #[error("branch to unknown block {block} in `{function}`")]
    UnknownBlock { block: BlockId, function: String },

    /// Only raised when [`crate::LowerConfig::fail_on_unhandled`] is set.
    #[error("unhandled instruction `{name}` in `{function}`")]
    UnhandledInstruction { name: String, function: String },
}
