//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept the [`Database`](crate::Database) handle as the first
//! argument. Queries are written with `?` placeholders; the handle
//! translates them for the active engine.

pub mod admin_repo;
pub mod masterpiece_repo;
pub mod package_repo;

pub use admin_repo::AdminRepo;
pub use masterpiece_repo::MasterpieceRepo;
pub use package_repo::PackageRepo;
