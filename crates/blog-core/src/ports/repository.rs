use async_trait::async_trait;

use crate::domain::{Author, BlogPost, Record};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T: Record>: Send + Sync {
    /// Every stored entity, in storage order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its numeric ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<T>, RepoError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepoError>;

    /// Store a new entity; the repository assigns its ID.
    async fn insert(&self, draft: T::Draft) -> Result<T, RepoError>;

    /// Replace an existing entity in full.
    ///
    /// Returns `RepoError::NotFound` when no entity has `entity.id()`.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: i64) -> Result<(), RepoError>;
}

/// Author repository.
pub trait AuthorRepository: BaseRepository<Author> {}

/// Blog post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<BlogPost> {
    /// Posts in `category`, most recently posted first.
    async fn find_by_category(&self, category: &str) -> Result<Vec<BlogPost>, RepoError>;
}
