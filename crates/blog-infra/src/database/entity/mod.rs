//! SeaORM entities.

pub mod author;
pub mod blog_post;
