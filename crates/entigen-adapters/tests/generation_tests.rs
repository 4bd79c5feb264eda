//! Full-stack generation tests: directory template store plus the local
//! filesystem adapter, driven through the engine exactly as the CLI wires it.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use entigen_adapters::{DirectoryTemplateStore, LocalFilesystem};
use entigen_core::prelude::*;

fn write_template(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(format!("{name}.tpl")), content).unwrap();
}

fn order_item() -> ModelDescriptor {
    ModelDescriptor::validate(
        RawModel::new("OrderItem")
            .field("quantity", "integer")
            .field("unitPrice", "float"),
    )
    .unwrap()
}

fn engine_for(templates: &Path, out: &Path) -> GenerationEngine {
    GenerationEngine::new(
        Box::new(DirectoryTemplateStore::load(templates).unwrap()),
        Box::new(LocalFilesystem::new()),
        out,
    )
}

#[test]
fn generates_file_at_default_destination() {
    let templates = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_template(
        templates.path(),
        "model",
        "entity {{entityName}} ({{fieldCount}} fields)\n{{fieldDeclarations}}\n",
    );

    let engine = engine_for(templates.path(), out.path());
    let result = engine
        .generate(&order_item(), &[], OverwritePolicy::Preserve)
        .unwrap();

    assert_eq!(result.written.len(), 1);
    let content = fs::read_to_string(out.path().join("OrderItem.model")).unwrap();
    assert!(content.contains("entity OrderItem (2 fields)"));
    assert!(content.contains("quantity: integer"));
    assert!(content.contains("unitPrice: float"));
}

#[test]
fn path_directive_places_file_in_nested_directory() {
    let templates = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_template(
        templates.path(),
        "migration",
        "@path migrations/create_{{tableName}}.sql\nCREATE TABLE {{tableName}};\n",
    );

    let engine = engine_for(templates.path(), out.path());
    engine
        .generate(&order_item(), &[], OverwritePolicy::Preserve)
        .unwrap();

    let content =
        fs::read_to_string(out.path().join("migrations/create_order_items.sql")).unwrap();
    assert_eq!(content, "CREATE TABLE order_items;\n");
}

#[test]
fn rerun_on_unchanged_model_is_a_no_op() {
    let templates = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_template(templates.path(), "model", "entity {{entityName}}\n");

    let engine = engine_for(templates.path(), out.path());
    engine
        .generate(&order_item(), &[], OverwritePolicy::Preserve)
        .unwrap();

    let path = out.path().join("OrderItem.model");
    let before = fs::metadata(&path).unwrap().modified().unwrap();

    let second = engine
        .generate(&order_item(), &[], OverwritePolicy::Preserve)
        .unwrap();
    assert!(second.written.is_empty());
    assert!(second.warnings.is_empty());
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), before);
}

#[test]
fn hand_edited_file_survives_preserve_and_yields_to_force() {
    let templates = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_template(templates.path(), "model", "entity {{entityName}}\n");

    let engine = engine_for(templates.path(), out.path());
    engine
        .generate(&order_item(), &[], OverwritePolicy::Preserve)
        .unwrap();

    let path = out.path().join("OrderItem.model");
    fs::write(&path, "hand edited\n").unwrap();

    let preserved = engine
        .generate(&order_item(), &[], OverwritePolicy::Preserve)
        .unwrap();
    assert_eq!(preserved.warnings.len(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), "hand edited\n");

    engine
        .generate(&order_item(), &[], OverwritePolicy::Force)
        .unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "entity OrderItem\n");
}

#[test]
fn unbound_variable_leaves_output_directory_untouched() {
    let templates = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_template(templates.path(), "ok", "fine {{entityName}}\n");
    write_template(templates.path(), "broken", "needs {{primaryKeyType}}\n");

    let engine = engine_for(templates.path(), out.path());
    let err = engine
        .generate(&order_item(), &[], OverwritePolicy::Preserve)
        .unwrap_err();

    assert!(err.to_string().contains("primaryKeyType"));
    assert_eq!(
        fs::read_dir(out.path()).unwrap().count(),
        0,
        "validation failure must not write anything"
    );
}

#[test]
fn malformed_template_blocks_generation_of_valid_siblings() {
    let templates = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_template(templates.path(), "good", "g {{entityName}}\n");
    write_template(templates.path(), "bad", "unterminated {{marker\n");

    // Even an explicit selection of the valid template must fail: the
    // malformed file is rejected when the store loads, not at lookup time.
    let err = DirectoryTemplateStore::load(templates.path()).unwrap_err();
    assert!(err.to_string().contains("unterminated"));
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn selecting_a_subset_only_renders_those_templates() {
    let templates = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_template(templates.path(), "model", "m {{entityName}}\n");
    write_template(templates.path(), "controller", "c {{entityName}}\n");

    let engine = engine_for(templates.path(), out.path());
    let result = engine
        .generate(&order_item(), &["model".into()], OverwritePolicy::Preserve)
        .unwrap();

    assert_eq!(result.written.len(), 1);
    assert!(out.path().join("OrderItem.model").exists());
    assert!(!out.path().join("OrderItem.controller").exists());
}

#[test]
fn dry_run_plan_reports_paths_without_writing() {
    let templates = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_template(templates.path(), "model", "m {{entityName}}\n");

    let engine = engine_for(templates.path(), out.path());
    let plan = engine
        .plan(&order_item(), &[], OverwritePolicy::Preserve)
        .unwrap();

    assert_eq!(plan.files.len(), 1);
    assert_eq!(plan.files[0].mode, WriteMode::Create);
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}
