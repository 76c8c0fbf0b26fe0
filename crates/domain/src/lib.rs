//! Domain layer for the mail triage service
//!
//! Contains the request-scoped entities, value objects, and domain errors
//! used to classify inbound email. This layer has no I/O and defines the
//! ubiquitous language shared by every other crate.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
