//! # Blog Core
//!
//! The domain layer of the blog API: authors, blog posts, the repository and
//! token ports, and field validation.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

pub use error::RepoError;
pub use validation::{FieldErrors, Validate};
