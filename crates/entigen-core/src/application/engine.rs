//! Generation engine - main application orchestrator.
//!
//! One invocation runs: look up templates → bind → render → plan → commit.
//! Every validation-stage failure (lookup, bind, render) aborts before a
//! single file is written, so partial output can only come from a true I/O
//! failure during commit — and that failure reports exactly which paths
//! were already written.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        planner::{OutputPlan, OutputPlanner, OverwritePolicy, RenderedOutput, WriteMode},
        ports::{Filesystem, TemplateStore},
    },
    domain::{Binder, ModelDescriptor, Renderer},
    error::EngineResult,
};

/// Outcome of one engine invocation. Immutable; returned to the caller.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationResult {
    pub written: BTreeSet<PathBuf>,
    pub skipped: BTreeSet<PathBuf>,
    pub warnings: Vec<String>,
    pub success: bool,
}

/// Main generation orchestrator.
///
/// Holds its ports by `Box<dyn …>`; the caller wires production or test
/// adapters at construction (explicit dependency injection, no global
/// registration).
pub struct GenerationEngine {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
    output_root: PathBuf,
}

impl GenerationEngine {
    pub fn new(
        store: Box<dyn TemplateStore>,
        filesystem: Box<dyn Filesystem>,
        output_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            filesystem,
            output_root: output_root.into(),
        }
    }

    /// Generate files for `model` from the named templates.
    ///
    /// An empty `template_names` selects every template in the store.
    ///
    /// # Errors
    ///
    /// - `TemplateNotFound`, `UnboundVariable`, `UnknownPlaceholder`:
    ///   validation stage, nothing written.
    /// - `CommitFailure`: write phase, carries the partial write set.
    #[instrument(skip_all, fields(entity = %model.entity_name(), templates = template_names.len()))]
    pub fn generate(
        &self,
        model: &ModelDescriptor,
        template_names: &[String],
        policy: OverwritePolicy,
    ) -> EngineResult<GenerationResult> {
        let plan = self.plan(model, template_names, policy)?;
        let mut result = GenerationResult {
            warnings: plan.warnings.clone(),
            ..Default::default()
        };

        // Commit phase. Best-effort: a failure here reports every path
        // already written so the caller can retry or roll back manually.
        for file in plan.pending_writes() {
            self.write_one(file.path.as_path(), &file.content, &result)?;
            result.written.insert(file.path.clone());
        }

        for file in &plan.files {
            if file.mode == WriteMode::Skip {
                result.skipped.insert(file.path.clone());
            }
        }

        result.success = true;
        info!(
            written = result.written.len(),
            skipped = result.skipped.len(),
            warnings = result.warnings.len(),
            "generation completed"
        );
        Ok(result)
    }

    /// Validation stages plus planning, with no filesystem mutation.
    ///
    /// Exposed separately so callers can implement dry runs.
    #[instrument(skip_all)]
    pub fn plan(
        &self,
        model: &ModelDescriptor,
        template_names: &[String],
        policy: OverwritePolicy,
    ) -> EngineResult<OutputPlan> {
        let names = self.resolve_names(template_names)?;
        let mut outputs = Vec::with_capacity(names.len());

        for name in &names {
            let template = self.store.get(name)?;
            let context = Binder::bind(&template, model)?;
            let content = Renderer::render(&template, &context)?;
            outputs.push(RenderedOutput {
                template: template.name().to_string(),
                path_pattern: template.path_pattern().to_string(),
                content,
            });
        }

        let entity_ctx = Binder::entity_context(model);
        OutputPlanner::new(self.filesystem.as_ref(), &self.output_root).plan(
            &outputs,
            &entity_ctx,
            policy,
        )
    }

    /// Requested names verbatim, or every store template when none given.
    fn resolve_names(&self, requested: &[String]) -> EngineResult<Vec<String>> {
        if requested.is_empty() {
            Ok(self
                .store
                .list()?
                .into_iter()
                .map(|t| t.name().to_string())
                .collect())
        } else {
            Ok(requested.to_vec())
        }
    }

    fn write_one(
        &self,
        path: &Path,
        content: &str,
        progress: &GenerationResult,
    ) -> EngineResult<()> {
        let attempt = || -> EngineResult<()> {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    self.filesystem.create_dir_all(parent)?;
                }
            }
            self.filesystem.write_file(path, content)
        };

        attempt().map_err(|e| {
            ApplicationError::CommitFailure {
                path: path.to_path_buf(),
                reason: e.to_string(),
                written: progress.written.iter().cloned().collect(),
            }
            .into()
        })
    }
}
