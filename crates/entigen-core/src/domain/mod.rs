//! Domain layer: pure generation logic with no I/O.
//!
//! Everything here is deterministic. The same model and template always
//! produce the same substitution context and the same rendered bytes.

pub mod binder;
pub mod error;
pub mod model;
pub mod renderer;
pub mod template;

pub use binder::{Binder, SubstitutionContext};
pub use error::{DomainError, ModelViolation};
pub use model::{Field, FieldType, ModelDescriptor, RawField, RawModel};
pub use renderer::Renderer;
pub use template::Template;
