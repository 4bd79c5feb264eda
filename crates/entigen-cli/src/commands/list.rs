//! Implementation of the `entigen list` command.

use entigen_adapters::DirectoryTemplateStore;
use entigen_core::application::ports::TemplateStore;

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let templates_dir = args
        .templates_dir
        .unwrap_or_else(|| config.templates.dir.clone());
    let store = DirectoryTemplateStore::load(&templates_dir)?;
    let templates = store.list()?;

    match args.format {
        ListFormat::Table => {
            output.header(&format!(
                "Templates in {} ({}):",
                templates_dir.display(),
                templates.len()
            ))?;
            for template in &templates {
                output.print(&format!(
                    "  {:<20} -> {}",
                    template.name(),
                    template.path_pattern()
                ))?;
            }
        }

        ListFormat::List => {
            for template in &templates {
                println!("{}", template.name());
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let entries: Vec<_> = templates
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "name": t.name(),
                        "path": t.path_pattern(),
                        "variables": t.variables(),
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".into())
            );
        }

        ListFormat::Csv => {
            println!("name,path,variables");
            for t in &templates {
                let variables: Vec<&str> = t.variables().iter().map(String::as_str).collect();
                println!("{},{},{}", t.name(), t.path_pattern(), variables.join(";"));
            }
        }
    }

    Ok(())
}
