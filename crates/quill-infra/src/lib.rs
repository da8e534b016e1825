//! # Quill Infrastructure
//!
//! Concrete implementations of the repository ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//! - `minimal` - No external dependencies, in-memory only

pub mod database;

pub use database::{DatabaseConfig, InMemoryAuthorRepository, InMemoryPostRepository};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresAuthorRepository, PostgresPostRepository};
