//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the engine needs from external systems. The
//! `entigen-adapters` crate provides implementations. Binding and rendering
//! are pure and live in the domain layer; only I/O-bearing concerns sit
//! behind a port.

use std::path::Path;

use crate::domain::Template;
use crate::error::EngineResult;

/// Port for template storage and retrieval.
///
/// Implemented by:
/// - `entigen_adapters::template_store::DirectoryTemplateStore` (production)
/// - `entigen_adapters::template_store::InMemoryStore` (testing)
///
/// A store is read-only after construction and may be shared across
/// concurrent engine invocations.
pub trait TemplateStore: Send + Sync {
    /// Get a template by exact name. No fuzzy matching.
    fn get(&self, name: &str) -> EngineResult<Template>;

    /// All templates, in name order.
    fn list(&self) -> EngineResult<Vec<Template>>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `entigen_adapters::filesystem::LocalFilesystem` (production)
/// - `entigen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Read a file's content; `Ok(None)` if the path does not exist.
    fn read_file(&self, path: &Path) -> EngineResult<Option<String>>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> EngineResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> EngineResult<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}
