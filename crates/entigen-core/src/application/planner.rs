//! Output planning: where rendered content lands, and what happens when a
//! destination already exists.
//!
//! The planner makes the overwrite policy explicit and testable instead of
//! an unconditional copy:
//!
//! - absent on disk → `Create`
//! - present, identical content → `Skip` (steady-state no-op)
//! - present, differing, policy `Force` → `Overwrite`
//! - present, differing, policy `Preserve` (default) → `Skip` + warning
//!
//! Re-running generation on an unchanged model is therefore a true no-op,
//! and a hand-edited file is never destroyed unless the caller forces it.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::application::ports::Filesystem;
use crate::domain::{Renderer, SubstitutionContext};
use crate::error::EngineResult;

/// Caller-selected rule for existing files with differing content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Keep existing files, emit a warning. The default.
    #[default]
    Preserve,
    /// Replace existing files.
    Force,
}

/// Decision for one planned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    Create,
    Overwrite,
    Skip,
}

/// One rendered output with its resolved destination.
#[derive(Debug, Clone)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub content: String,
    pub mode: WriteMode,
}

/// Ordered plan for one engine invocation. Consumed by the commit step.
#[derive(Debug, Clone, Default)]
pub struct OutputPlan {
    pub files: Vec<PlannedFile>,
    pub warnings: Vec<String>,
}

impl OutputPlan {
    /// Paths that the commit step will actually write.
    pub fn pending_writes(&self) -> impl Iterator<Item = &PlannedFile> {
        self.files
            .iter()
            .filter(|f| matches!(f.mode, WriteMode::Create | WriteMode::Overwrite))
    }
}

/// A rendered template body plus the pattern locating its destination.
#[derive(Debug, Clone)]
pub struct RenderedOutput {
    pub template: String,
    pub path_pattern: String,
    pub content: String,
}

/// Maps rendered outputs to destination paths under an output root.
pub struct OutputPlanner<'a> {
    filesystem: &'a dyn Filesystem,
    output_root: &'a Path,
}

impl<'a> OutputPlanner<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, output_root: &'a Path) -> Self {
        Self {
            filesystem,
            output_root,
        }
    }

    /// Build the plan for a set of rendered outputs.
    ///
    /// Destination paths come from rendering each template's target-path
    /// pattern against the entity-name context. Reading existing files is
    /// the only filesystem access; nothing is written here.
    pub fn plan(
        &self,
        outputs: &[RenderedOutput],
        entity_ctx: &SubstitutionContext,
        policy: OverwritePolicy,
    ) -> EngineResult<OutputPlan> {
        let mut plan = OutputPlan::default();

        for output in outputs {
            let relative = Renderer::render_text(&output.template, &output.path_pattern, entity_ctx)?;
            let path = self.output_root.join(&relative);

            let mode = match self.filesystem.read_file(&path)? {
                None => WriteMode::Create,
                Some(existing) if existing == output.content => WriteMode::Skip,
                Some(_) => match policy {
                    OverwritePolicy::Force => WriteMode::Overwrite,
                    OverwritePolicy::Preserve => {
                        plan.warnings
                            .push(format!("would overwrite, preserved: {}", path.display()));
                        WriteMode::Skip
                    }
                },
            };

            debug!(template = %output.template, path = %path.display(), ?mode, "planned output");
            plan.files.push(PlannedFile {
                path,
                content: output.content.clone(),
                mode,
            });
        }

        Ok(plan)
    }
}
