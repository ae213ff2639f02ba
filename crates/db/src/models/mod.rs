//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row and, where the API creates rows, a create DTO assembled by the
//! handler layer from multipart form fields.

pub mod admin;
pub mod masterpiece;
pub mod package;
