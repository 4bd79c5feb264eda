//! Directory-backed template store.
//!
//! Each `<name>.tpl` file under the templates directory is one template; the
//! template name is the file's relative path with the `.tpl` extension
//! stripped, so `templates/api/handler.tpl` is addressed as `api/handler`.
//!
//! The whole directory is read and parsed up front by [`DirectoryTemplateStore::load`];
//! a single malformed file fails the load, and the store is read-only from
//! then on. Files with other extensions are ignored.
//!
//! # Template file format
//!
//! ```text
//! @path src/{{entityNameSnake}}.rs      ← optional first-line directive
//! pub struct {{entityName}} {
//!     {{fieldDeclarations}}
//! }
//! ```
//!
//! Without an `@path` directive the destination defaults to
//! `{{entityName}}.<name>` relative to the output root.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};
use walkdir::WalkDir;

use entigen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::Template,
    error::EngineResult,
};

const TEMPLATE_EXTENSION: &str = "tpl";

/// Immutable set of [`Template`] objects loaded from a directory of `.tpl`
/// files.
#[derive(Debug)]
pub struct DirectoryTemplateStore {
    templates_dir: PathBuf,
    templates: BTreeMap<String, Template>,
}

impl DirectoryTemplateStore {
    /// Walk `templates_dir` and parse every `.tpl` file.
    ///
    /// # Errors
    ///
    /// Fails with a template-load error when the directory is missing, a
    /// file cannot be read, or any template is malformed. A broken template
    /// must surface here, before generation, not only when it happens to be
    /// selected.
    pub fn load(templates_dir: impl Into<PathBuf>) -> EngineResult<Self> {
        let templates_dir = templates_dir.into();
        if !templates_dir.is_dir() {
            return Err(ApplicationError::TemplateLoad {
                path: templates_dir,
                reason: "templates directory not found".into(),
            }
            .into());
        }

        let mut templates = BTreeMap::new();
        for entry in WalkDir::new(&templates_dir).min_depth(1) {
            let entry = entry.map_err(|e| ApplicationError::TemplateLoad {
                path: templates_dir.clone(),
                reason: format!("directory walk error: {e}"),
            })?;

            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXTENSION)
            {
                continue;
            }

            let Some(name) = template_name(&templates_dir, path) else {
                continue;
            };

            let raw = fs::read_to_string(path).map_err(|e| ApplicationError::TemplateLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
            let template = Template::parse(name.clone(), &raw)
                .inspect_err(|e| warn!(path = %path.display(), error = %e, "malformed template"))?;
            templates.insert(name, template);
        }

        debug!(
            dir = %templates_dir.display(),
            count = templates.len(),
            "templates loaded"
        );
        Ok(Self {
            templates_dir,
            templates,
        })
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }
}

impl TemplateStore for DirectoryTemplateStore {
    fn get(&self, name: &str) -> EngineResult<Template> {
        self.templates.get(name).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    /// Every loaded template, sorted by name.
    fn list(&self) -> EngineResult<Vec<Template>> {
        Ok(self.templates.values().cloned().collect())
    }
}

/// Relative path minus extension, with forward slashes on every platform.
fn template_name(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?.with_extension("");
    let name = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    (!name.is_empty()).then_some(name)
}
