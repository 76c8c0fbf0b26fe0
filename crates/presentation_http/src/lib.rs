//! Mail triage HTTP presentation layer
//!
//! Routes, handlers and middleware for the classification API, including the
//! legacy `/api` surface.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiError, set_expose_internal_errors};
pub use middleware::{RequestIdLayer, ValidatedJson, ValidationError};
pub use routes::{cors_layer, create_router};
pub use state::AppState;
