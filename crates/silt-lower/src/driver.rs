// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Module and function drivers.

use crate::{builtins, rules, FunctionEntity, LowerConfig, LowerCtx, LoweringError};
use silt_diagnostics::Diagnostic;
use silt_ir::{Function, Module};
use tracing::{debug, info, warn};

/// Receives one entity per lowered function.
pub trait EntitySink {
    fn entity(&mut self, entity: FunctionEntity);
}

impl EntitySink for Vec<FunctionEntity> {
    fn entity(&mut self, entity: FunctionEntity) {
        self.push(entity);
    }
}

/// Everything one module run produced.
pub struct LowerOutput {
    pub entities: Vec<FunctionEntity>,
    pub diagnostics: Vec<Diagnostic>,
}

/// The lowering pass.
pub struct Lowering {
    config: LowerConfig,
}

impl Lowering {
    pub fn new(config: LowerConfig) -> Self {
        Self { config }
    }

    pub fn lower_module(&self, module: &Module) -> Result<LowerOutput, LoweringError> {
        info!(module = %module.name, functions = module.functions.len(), "lowering module");
        let mut entities = Vec::new();
        let mut diagnostics = Vec::new();
        for function in &module.functions {
            self.lower_function(function, &mut entities, &mut diagnostics)?;
        }
        Ok(LowerOutput {
            entities,
            diagnostics,
        })
    }

    /// Lower one function. Bodiless and summarized functions produce no
    /// entity; a malformed function aborts the run.
    pub fn lower_function<S: EntitySink>(
        &self,
        function: &Function,
        sink: &mut S,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<(), LoweringError> {
        if function.blocks.is_empty() {
            debug!(function = %function.name, "skipping function without a body");
            diagnostics.push(
                Diagnostic::note("skipped function without a body").in_function(&function.name),
            );
            return Ok(());
        }
        if builtins::is_built_in(&function.name) {
            debug!(function = %function.name, "skipping summarized function");
            return Ok(());
        }
        if function.pos.is_none() {
            warn!(function = %function.name, "no source information");
        }

        let return_type = match function.result_types.as_slice() {
            [] => "void".to_string(),
            [single] => single.clone(),
            _ => "MultiResultType".to_string(),
        };
        let mut entity = FunctionEntity::new(&function.name, return_type);
        entity.pos = function.pos.clone();

        let mut ctx = LowerCtx::new(&self.config, &function.name, entity, diagnostics);
        // The entry block's parameters are the function's arguments.
        if let Some(entry) = function.entry() {
            for param in &entry.params {
                ctx.declare_argument(param);
            }
        }

        for block in &function.blocks {
            for inst in &block.instructions {
                rules::lower(&mut ctx, inst)?;
            }
            ctx.pos = block.terminator_pos.clone();
            rules::terminators::lower(&mut ctx, function, &block.terminator)?;
            ctx.finish_block(block.id);
        }

        let entity = ctx.finish();
        debug!(
            function = %entity.name,
            blocks = entity.blocks.len(),
            call_sites = entity.call_sites.len(),
            "lowered function"
        );
        sink.entity(entity);
        Ok(())
    }
}

impl Default for Lowering {
    fn default() -> Self {
        Self::new(LowerConfig::default())
    }
}
