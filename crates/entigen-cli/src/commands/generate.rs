//! Implementation of the `entigen generate` command.
//!
//! Responsibility: translate CLI arguments into a raw model, wire the
//! production adapters into the engine, and display results.  No business
//! logic lives here — validation, binding, rendering, and planning all
//! happen in `entigen-core`.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use entigen_adapters::{DirectoryTemplateStore, LocalFilesystem};
use entigen_core::{
    domain::{ModelDescriptor, RawField, RawModel},
    prelude::{GenerationEngine, GenerationResult, OutputPlan, OverwritePolicy, WriteMode},
};

use crate::{
    cli::{GenerateArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `entigen generate` command.
///
/// Dispatch sequence:
/// 1. Parse `--field` specs into a raw model
/// 2. Validate the model via the core
/// 3. Wire the engine (directory store + local filesystem)
/// 4. `--dry-run`: print the plan and stop
/// 5. Generate and report written/skipped/warnings
#[instrument(skip_all, fields(entity = %args.entity))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Assemble the raw model from CLI flags.
    let mut raw = RawModel::new(&args.entity);
    for spec in &args.fields {
        raw.fields.push(parse_field_spec(spec)?);
    }

    // 2. Model validation is total: every violation surfaces in one pass.
    let model = ModelDescriptor::validate(raw).map_err(entigen_core::error::EngineError::from)?;

    let templates_dir = args
        .templates_dir
        .clone()
        .unwrap_or_else(|| config.templates.dir.clone());
    let out_root = args.out.clone().unwrap_or_else(|| config.output.root.clone());
    let policy = if args.force {
        OverwritePolicy::Force
    } else {
        OverwritePolicy::Preserve
    };

    debug!(
        templates_dir = %templates_dir.display(),
        out_root = %out_root.display(),
        force = args.force,
        dry_run = args.dry_run,
        "generation configured"
    );

    // 3. Production wiring: explicit constructor injection, no globals.
    // Loading validates every template up front; a malformed file fails
    // here, before anything is planned or written.
    let store = DirectoryTemplateStore::load(&templates_dir)?;
    let engine = GenerationEngine::new(
        Box::new(store),
        Box::new(LocalFilesystem::new()),
        &out_root,
    );

    // 4. Dry run: plan only, nothing written.
    if args.dry_run {
        let plan = engine.plan(&model, &args.templates, policy)?;
        return show_plan(&plan, &output, global.output_format);
    }

    // 5. Generate.
    info!(entity = %model.entity_name(), "generation started");
    let result = engine.generate(&model, &args.templates, policy)?;

    show_result(&model, &result, &output, global.output_format)?;
    Ok(())
}

// ── Field spec parsing ────────────────────────────────────────────────────────

/// Parse one `--field` value: `name:type` or `name:type:mod1,mod2`.
///
/// Type tags are not checked here; the core reports unknown tags together
/// with every other model violation.
pub fn parse_field_spec(spec: &str) -> CliResult<RawField> {
    let mut parts = spec.splitn(3, ':');

    let name = parts.next().unwrap_or_default().trim();
    if name.is_empty() {
        return Err(CliError::InvalidFieldSpec {
            spec: spec.into(),
            reason: "field name is empty".into(),
        });
    }

    let type_tag = match parts.next().map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => {
            return Err(CliError::InvalidFieldSpec {
                spec: spec.into(),
                reason: "missing ':type' part".into(),
            });
        }
    };

    let modifiers = parts
        .next()
        .map(|m| {
            m.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    Ok(RawField {
        name: name.to_string(),
        type_tag: type_tag.to_string(),
        modifiers,
    })
}

// ── Display ───────────────────────────────────────────────────────────────────

fn show_plan(plan: &OutputPlan, out: &OutputManager, format: OutputFormat) -> CliResult<()> {
    if format == OutputFormat::Json {
        let files: Vec<_> = plan
            .files
            .iter()
            .map(|f| {
                serde_json::json!({
                    "path": f.path,
                    "mode": f.mode,
                })
            })
            .collect();
        let doc = serde_json::json!({ "files": files, "warnings": plan.warnings });
        // JSON goes straight to stdout so it stays parseable in pipes.
        println!("{}", serde_json::to_string_pretty(&doc).unwrap_or_default());
        return Ok(());
    }

    out.header("Plan (dry run, nothing written)")?;
    for file in &plan.files {
        let verb = match file.mode {
            WriteMode::Create => "create   ",
            WriteMode::Overwrite => "overwrite",
            WriteMode::Skip => "skip     ",
        };
        out.print(&format!("  {verb} {}", file.path.display()))?;
    }
    for warning in &plan.warnings {
        out.warning(warning)?;
    }
    Ok(())
}

fn show_result(
    model: &ModelDescriptor,
    result: &GenerationResult,
    out: &OutputManager,
    format: OutputFormat,
) -> CliResult<()> {
    if format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(result).unwrap_or_default()
        );
        return Ok(());
    }

    for path in &result.written {
        out.print(&format!("  wrote {}", path.display()))?;
    }
    for path in &result.skipped {
        out.print(&format!("  up-to-date {}", path.display()))?;
    }
    for warning in &result.warnings {
        out.warning(warning)?;
    }

    out.success(&format!(
        "{}: {} written, {} skipped",
        model.entity_name(),
        result.written.len(),
        result.skipped.len(),
    ))?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
