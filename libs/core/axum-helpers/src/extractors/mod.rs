//! Custom extractors for Axum handlers.
//!
//! Both extractors reject with an [`AppError`](crate::errors::AppError) so that
//! malformed requests get the same JSON error body as domain failures.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
