//! Custom extractors for Axum handlers.
//!
//! The validating extractors run `validator` rules after deserializing. All
//! of them report failures through [`AppError`](crate::errors::AppError), so every rejection
//! carries the standard JSON error body.

pub mod id_path;
pub mod validated_json;
pub mod validated_query;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
