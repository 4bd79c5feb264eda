//! Entigen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Entigen
//! source scaffolding engine, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          entigen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          GenerationEngine               │
//! │   (bind → render → plan → commit)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: TemplateStore, Fs)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    entigen-adapters (Infrastructure)    │
//! │  (DirectoryTemplateStore, LocalFs, …)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ModelDescriptor, Template, Binder,    │
//! │   Renderer — no external dependencies)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use entigen_core::prelude::*;
//!
//! // 1. Describe what to generate
//! let raw = RawModel::new("Widget")
//!     .field("title", "string")
//!     .field("price", "float");
//! let model = ModelDescriptor::validate(raw).unwrap();
//!
//! // 2. Run the engine (with injected adapters)
//! # let (store, filesystem): (Box<dyn TemplateStore>, Box<dyn Filesystem>) = todo!();
//! let engine = GenerationEngine::new(store, filesystem, "./out");
//! let result = engine.generate(&model, &[], OverwritePolicy::Preserve).unwrap();
//! println!("wrote {} file(s)", result.written.len());
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationEngine, GenerationResult, OutputPlan, OutputPlanner, OverwritePolicy,
        PlannedFile, WriteMode,
        ports::{Filesystem, TemplateStore},
    };
    pub use crate::domain::{
        Binder, Field, FieldType, ModelDescriptor, RawField, RawModel, Renderer,
        SubstitutionContext, Template,
    };
    pub use crate::error::{EngineError, EngineResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
