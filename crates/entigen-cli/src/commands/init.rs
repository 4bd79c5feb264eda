//! `entigen init` — publish a starter configuration and template set.
//!
//! Writes `entigen.toml` and a templates directory with one example
//! template into the current project. Publishing goes through the same
//! output planner as generation, so an existing identical file is a silent
//! no-op and a hand-edited one is preserved unless `--force` is given.

use std::path::{Path, PathBuf};

use entigen_adapters::LocalFilesystem;
use entigen_core::application::{OutputPlanner, OverwritePolicy, RenderedOutput, WriteMode};
use entigen_core::prelude::{Filesystem, SubstitutionContext};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Example template published on init.
const STARTER_MODEL_TEMPLATE: &str = "\
@path {{entityName}}.model
entity {{entityName}} ({{fieldCount}} fields)

{{fieldDeclarations}}
";

pub fn execute(
    args: InitArgs,
    _global: GlobalArgs,
    _config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    output.info("Initialising entigen...")?;

    let templates_dir = args
        .templates_dir
        .unwrap_or_else(|| PathBuf::from("templates"));

    let mut config = AppConfig::default();
    config.templates.dir = templates_dir.clone();

    let config_toml = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    let assets = [
        RenderedOutput {
            template: "init".into(),
            path_pattern: LOCAL_CONFIG_FILE.into(),
            content: config_toml,
        },
        RenderedOutput {
            template: "init".into(),
            path_pattern: format!("{}/model.tpl", templates_dir.display()),
            content: STARTER_MODEL_TEMPLATE.into(),
        },
    ];

    let policy = if args.force {
        OverwritePolicy::Force
    } else {
        OverwritePolicy::Preserve
    };

    // Same plan/commit path as generation: Create for absent files, silent
    // Skip for identical ones, preserve-with-warning for edited ones.
    let fs = LocalFilesystem::new();
    let planner = OutputPlanner::new(&fs, Path::new("."));
    let plan = planner.plan(&assets, &SubstitutionContext::default(), policy)?;

    for file in plan.pending_writes() {
        if let Some(parent) = file.path.parent() {
            fs.create_dir_all(parent)?;
        }
        fs.write_file(&file.path, &file.content)?;
        let verb = match file.mode {
            WriteMode::Overwrite => "overwrote",
            _ => "created",
        };
        output.success(&format!("{verb} {}", file.path.display()))?;
    }
    for warning in &plan.warnings {
        output.warning(warning)?;
    }

    output.success("Entigen initialised")?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  edit {}/model.tpl", templates_dir.display()))?;
    output.print("  entigen generate Widget --field title:string")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use entigen_core::domain::Template;

    #[test]
    fn starter_template_parses() {
        let t = Template::parse("model", STARTER_MODEL_TEMPLATE).unwrap();
        assert_eq!(t.path_pattern(), "{{entityName}}.model");
        assert!(t.variables().contains("fieldDeclarations"));
        assert!(t.variables().contains("fieldCount"));
    }
}
