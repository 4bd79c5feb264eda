//! In-memory template store for testing and programmatic use.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use entigen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::Template,
    error::EngineResult,
};

/// Thread-safe in-memory template store.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<BTreeMap<String, Template>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a template, replacing any existing one with the same name.
    pub fn insert(&self, template: Template) -> EngineResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(template.name().to_string(), template);
        Ok(())
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all templates.
    pub fn clear(&self) -> EngineResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.clear();
        Ok(())
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, name: &str) -> EngineResult<Template> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(name).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    fn list(&self) -> EngineResult<Vec<Template>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        // BTreeMap iteration keeps the listing sorted by name.
        Ok(inner.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(name: &str) -> Template {
        Template::parse(name, "body {{entityName}}\n").unwrap()
    }

    #[test]
    fn insert_then_get_round_trips() {
        let store = InMemoryStore::new();
        store.insert(template("model")).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("model").unwrap().name(), "model");
    }

    #[test]
    fn get_missing_is_not_found() {
        let store = InMemoryStore::new();
        assert!(matches!(
            store.get("absent").unwrap_err(),
            entigen_core::error::EngineError::Application(ApplicationError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn insert_replaces_same_name() {
        let store = InMemoryStore::new();
        store.insert(template("model")).unwrap();
        store
            .insert(Template::parse("model", "replacement\n").unwrap())
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("model").unwrap().body(), "replacement\n");
    }

    #[test]
    fn list_is_sorted_by_name() {
        let store = InMemoryStore::new();
        store.insert(template("zeta")).unwrap();
        store.insert(template("alpha")).unwrap();

        let names: Vec<_> = store
            .list()
            .unwrap()
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
