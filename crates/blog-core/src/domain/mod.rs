//! Domain entities - the core business objects.

mod author;
mod blog_post;

pub use author::{Author, NewAuthor};
pub use blog_post::{BlogPost, NewBlogPost, PostContent};

/// A persisted record addressed by a server-assigned numeric identifier.
///
/// `Draft` is the same record before the store has given it an id.
pub trait Record: Clone + Send + Sync + 'static {
    type Draft: Send + 'static;

    fn id(&self) -> i64;

    /// Attach a freshly assigned id to a draft.
    fn from_draft(id: i64, draft: Self::Draft) -> Self;
}
