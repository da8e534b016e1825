//! # Quill Core
//!
//! The domain layer of Quill: author and post records whose fields are
//! validated every time they are assigned.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;
pub mod validation;

pub use error::{DomainError, RepoError, ValidationError};
