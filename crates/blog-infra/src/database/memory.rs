//! In-memory repositories - used when no database is configured.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{Author, BlogPost, Record};
use blog_core::error::RepoError;
use blog_core::ports::{AuthorRepository, BaseRepository, PostRepository};

/// Records kept in a `BTreeMap` behind an async `RwLock`.
///
/// Ids are assigned from 1 upwards and never reused.
/// Note: Data is lost on process restart.
pub struct InMemoryRepository<T> {
    store: RwLock<BTreeMap<i64, T>>,
    next_id: AtomicI64,
}

pub type InMemoryAuthorRepository = InMemoryRepository<Author>;
pub type InMemoryPostRepository = InMemoryRepository<BlogPost>;

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> BaseRepository<T> for InMemoryRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepoError> {
        let store = self.store.read().await;
        Ok(store.contains_key(&id))
    }

    async fn insert(&self, draft: T::Draft) -> Result<T, RepoError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let entity = T::from_draft(id, draft);

        let mut store = self.store.write().await;
        store.insert(id, entity.clone());
        Ok(entity)
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let mut store = self.store.write().await;
        match store.get_mut(&entity.id()) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

impl AuthorRepository for InMemoryAuthorRepository {}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_category(&self, category: &str) -> Result<Vec<BlogPost>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<BlogPost> = store
            .values()
            .filter(|post| post.category == category)
            .cloned()
            .collect();

        posts.sort_by(|a, b| {
            b.date_posted
                .cmp(&a.date_posted)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(posts)
    }
}
