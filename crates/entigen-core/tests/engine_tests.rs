//! End-to-end engine tests over in-memory ports.
//!
//! The production adapters live in entigen-adapters; these doubles are
//! deliberately tiny so the tests pin engine behavior, not adapter behavior.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use entigen_core::application::ApplicationError;
use entigen_core::domain::DomainError;
use entigen_core::error::{EngineError, EngineResult};
use entigen_core::prelude::*;

#[derive(Default)]
struct MapStore {
    templates: BTreeMap<String, Template>,
}

impl MapStore {
    fn with(entries: &[(&str, &str)]) -> Self {
        let mut templates = BTreeMap::new();
        for (name, raw) in entries {
            templates.insert(name.to_string(), Template::parse(*name, raw).unwrap());
        }
        Self { templates }
    }
}

impl TemplateStore for MapStore {
    fn get(&self, name: &str) -> EngineResult<Template> {
        self.templates.get(name).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    fn list(&self) -> EngineResult<Vec<Template>> {
        Ok(self.templates.values().cloned().collect())
    }
}

#[derive(Default)]
struct MapFs {
    files: RwLock<HashMap<PathBuf, String>>,
    fail_on: Option<PathBuf>,
}

impl MapFs {
    fn file_count(&self) -> usize {
        self.files.read().unwrap().len()
    }
}

impl Filesystem for MapFs {
    fn read_file(&self, path: &Path) -> EngineResult<Option<String>> {
        Ok(self.files.read().unwrap().get(path).cloned())
    }

    fn write_file(&self, path: &Path, content: &str) -> EngineResult<()> {
        if self.fail_on.as_deref() == Some(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into());
        }
        self.files
            .write()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create_dir_all(&self, _path: &Path) -> EngineResult<()> {
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.read().unwrap().contains_key(path)
    }
}

// Lets a test keep a handle to the filesystem after the engine takes
// ownership of its boxed clone.
struct SharedFs(Arc<MapFs>);

impl Filesystem for SharedFs {
    fn read_file(&self, path: &Path) -> EngineResult<Option<String>> {
        self.0.read_file(path)
    }
    fn write_file(&self, path: &Path, content: &str) -> EngineResult<()> {
        self.0.write_file(path, content)
    }
    fn create_dir_all(&self, path: &Path) -> EngineResult<()> {
        self.0.create_dir_all(path)
    }
    fn exists(&self, path: &Path) -> bool {
        self.0.exists(path)
    }
}

fn widget() -> ModelDescriptor {
    ModelDescriptor::validate(
        RawModel::new("Widget")
            .field("title", "string")
            .field("price", "float"),
    )
    .unwrap()
}

const MODEL_TPL: &str = "entity {{entityName}}\n{{fieldDeclarations}}\n";

fn engine(store: MapStore, fs: MapFs) -> GenerationEngine {
    GenerationEngine::new(Box::new(store), Box::new(fs), "out")
}

#[test]
fn generates_model_file_with_field_declarations() {
    let store = MapStore::with(&[("model", MODEL_TPL)]);
    let engine = engine(store, MapFs::default());

    let result = engine
        .generate(&widget(), &["model".into()], OverwritePolicy::Preserve)
        .unwrap();

    assert!(result.success);
    assert_eq!(result.written.len(), 1);
    assert!(result.written.contains(Path::new("out/Widget.model")));
}

#[test]
fn rendered_output_contains_entity_and_fields() {
    let store = MapStore::with(&[("model", MODEL_TPL)]);
    let engine = engine(store, MapFs::default());

    let plan = engine
        .plan(&widget(), &["model".into()], OverwritePolicy::Preserve)
        .unwrap();

    assert_eq!(plan.files.len(), 1);
    let content = &plan.files[0].content;
    assert!(content.contains("Widget"));
    assert!(content.contains("title: string"));
    assert!(content.contains("price: float"));
}

#[test]
fn second_run_is_a_no_op_under_preserve() {
    let store = MapStore::with(&[("model", MODEL_TPL)]);
    let fs = MapFs::default();
    let engine = GenerationEngine::new(Box::new(store), Box::new(fs), "out");

    let first = engine
        .generate(&widget(), &["model".into()], OverwritePolicy::Preserve)
        .unwrap();
    let second = engine
        .generate(&widget(), &["model".into()], OverwritePolicy::Preserve)
        .unwrap();

    assert!(second.written.is_empty());
    assert_eq!(second.skipped, first.written, "skip set covers first run");
    assert!(second.warnings.is_empty(), "identical content must not warn");
}

#[test]
fn empty_selection_uses_every_template() {
    let store = MapStore::with(&[("model", MODEL_TPL), ("controller", "ctl {{entityName}}\n")]);
    let engine = engine(store, MapFs::default());

    let result = engine
        .generate(&widget(), &[], OverwritePolicy::Preserve)
        .unwrap();
    assert_eq!(result.written.len(), 2);
}

#[test]
fn unknown_template_writes_nothing() {
    let store = MapStore::with(&[("model", MODEL_TPL)]);
    let fs = Arc::new(MapFs::default());
    let engine = GenerationEngine::new(Box::new(store), Box::new(SharedFs(Arc::clone(&fs))), "out");

    let err = engine
        .generate(
            &widget(),
            &["model".into(), "nonexistent".into()],
            OverwritePolicy::Preserve,
        )
        .unwrap_err();

    assert!(matches!(
        err,
        EngineError::Application(ApplicationError::TemplateNotFound { ref name }) if name == "nonexistent"
    ));
    assert_eq!(fs.file_count(), 0, "failed lookup must not write");
}

#[test]
fn unbound_variable_writes_nothing_and_names_it() {
    let store = MapStore::with(&[("model", "needs {{primaryKeyType}}\n")]);
    let engine = engine(store, MapFs::default());

    let err = engine
        .generate(&widget(), &["model".into()], OverwritePolicy::Preserve)
        .unwrap_err();

    match err {
        EngineError::Domain(DomainError::UnboundVariable { variables, .. }) => {
            assert_eq!(variables, vec!["primaryKeyType"]);
        }
        other => panic!("expected UnboundVariable, got {other:?}"),
    }
}

#[test]
fn commit_failure_reports_partial_write_set() {
    let store = MapStore::with(&[
        ("a_first", "a {{entityName}}\n"),
        ("b_second", "b {{entityName}}\n"),
    ]);
    let fs = MapFs {
        fail_on: Some(PathBuf::from("out/Widget.b_second")),
        ..Default::default()
    };
    let engine = GenerationEngine::new(Box::new(store), Box::new(fs), "out");

    let err = engine
        .generate(&widget(), &[], OverwritePolicy::Preserve)
        .unwrap_err();

    match err {
        EngineError::Application(ApplicationError::CommitFailure { written, path, .. }) => {
            assert_eq!(path, PathBuf::from("out/Widget.b_second"));
            assert_eq!(written, vec![PathBuf::from("out/Widget.a_first")]);
        }
        other => panic!("expected CommitFailure, got {other:?}"),
    }
}

#[test]
fn hand_edit_preserved_then_overwritten_with_force() {
    let store = MapStore::with(&[("model", MODEL_TPL)]);
    let fs = MapFs::default();
    fs.files
        .write()
        .unwrap()
        .insert(PathBuf::from("out/Widget.model"), "hand edited".into());
    let engine = GenerationEngine::new(Box::new(store), Box::new(fs), "out");

    let preserved = engine
        .generate(&widget(), &["model".into()], OverwritePolicy::Preserve)
        .unwrap();
    assert!(preserved.written.is_empty());
    assert_eq!(preserved.warnings.len(), 1);

    let forced = engine
        .generate(&widget(), &["model".into()], OverwritePolicy::Force)
        .unwrap();
    assert_eq!(forced.written.len(), 1);
    assert!(forced.warnings.is_empty());
}
