//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from the HTTP layer.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod movie_service;
