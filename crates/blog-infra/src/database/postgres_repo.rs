//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use blog_core::domain::BlogPost;
use blog_core::error::RepoError;
use blog_core::ports::{AuthorRepository, PostRepository};

use super::entity::author::Entity as AuthorEntity;
use super::entity::blog_post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, query_error};

/// PostgreSQL author repository.
pub type PostgresAuthorRepository = PostgresBaseRepository<AuthorEntity>;

/// PostgreSQL blog post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

impl AuthorRepository for PostgresAuthorRepository {}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_category(&self, category: &str) -> Result<Vec<BlogPost>, RepoError> {
        tracing::debug!(category, "Finding posts by category");

        let result = PostEntity::find()
            .filter(blog_post::Column::Category.eq(category))
            .order_by_desc(blog_post::Column::DatePosted)
            .order_by_desc(blog_post::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
