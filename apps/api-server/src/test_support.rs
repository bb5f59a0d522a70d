//! Shared fixtures for handler tests.

use std::sync::{Arc, Mutex};

use actix_web::http::header::{self, HeaderName};
use async_trait::async_trait;

use blog_core::domain::{Author, BlogPost, Record};
use blog_core::error::RepoError;
use blog_core::ports::{AuthorRepository, BaseRepository, PostRepository, TokenService};
use blog_infra::{InMemoryAuthorRepository, InMemoryPostRepository, JwtConfig, JwtTokenService};

use crate::state::AppState;

/// Wraps a repository and records the name of every operation called on it.
pub struct Recording<R> {
    inner: R,
    calls: Mutex<Vec<&'static str>>,
}

impl<R> Recording<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// The wrapped repository, for seeding without recording.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, op: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == op).count()
    }

    fn record(&self, op: &'static str) {
        self.calls.lock().unwrap().push(op);
    }
}

#[async_trait]
impl<T, R> BaseRepository<T> for Recording<R>
where
    T: Record,
    R: BaseRepository<T>,
{
    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        self.record("find_all");
        BaseRepository::<T>::find_all(&self.inner).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, RepoError> {
        self.record("find_by_id");
        BaseRepository::<T>::find_by_id(&self.inner, id).await
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepoError> {
        self.record("exists_by_id");
        BaseRepository::<T>::exists_by_id(&self.inner, id).await
    }

    async fn insert(&self, draft: T::Draft) -> Result<T, RepoError> {
        self.record("insert");
        BaseRepository::<T>::insert(&self.inner, draft).await
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        self.record("save");
        BaseRepository::<T>::save(&self.inner, entity).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        self.record("delete");
        BaseRepository::<T>::delete(&self.inner, id).await
    }
}

impl AuthorRepository for Recording<InMemoryAuthorRepository> {}

#[async_trait]
impl PostRepository for Recording<InMemoryPostRepository> {
    async fn find_by_category(&self, category: &str) -> Result<Vec<BlogPost>, RepoError> {
        self.record("find_by_category");
        self.inner.find_by_category(category).await
    }
}

/// Application state over recording in-memory repositories.
pub struct TestContext {
    pub state: AppState,
    pub authors: Arc<Recording<InMemoryAuthorRepository>>,
    pub posts: Arc<Recording<InMemoryPostRepository>>,
    tokens: Arc<JwtTokenService>,
}

impl TestContext {
    pub fn new() -> Self {
        let authors = Arc::new(Recording::new(InMemoryAuthorRepository::new()));
        let posts = Arc::new(Recording::new(InMemoryPostRepository::new()));
        let tokens = Arc::new(JwtTokenService::new(test_jwt_config()));

        let state = AppState {
            authors: authors.clone(),
            posts: posts.clone(),
            tokens: tokens.clone(),
        };

        Self {
            state,
            authors,
            posts,
            tokens,
        }
    }

    /// `Authorization` header carrying a valid token.
    pub fn bearer(&self) -> (HeaderName, String) {
        let token = self
            .tokens
            .generate_token("editor@example.com", vec!["editor".to_string()])
            .unwrap();
        (header::AUTHORIZATION, format!("Bearer {token}"))
    }

    /// `Authorization` header carrying a token signed with another secret.
    pub fn forged_bearer(&self) -> (HeaderName, String) {
        let forger = JwtTokenService::new(JwtConfig {
            secret: "not-the-server-secret".to_string(),
            ..test_jwt_config()
        });
        let token = forger.generate_token("intruder", vec![]).unwrap();
        (header::AUTHORIZATION, format!("Bearer {token}"))
    }

    pub async fn seed_author(&self, first_name: &str) -> Author {
        self.authors
            .inner()
            .insert(blog_core::domain::NewAuthor {
                first_name: first_name.to_string(),
                last_name: "last".to_string(),
                email: format!("{first_name}@mail.com"),
            })
            .await
            .unwrap()
    }

    pub async fn seed_post(&self, post: blog_core::domain::NewBlogPost) -> BlogPost {
        self.posts.inner().insert(post).await.unwrap()
    }
}

fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "handler-test-secret".to_string(),
        expiration_hours: 1,
        issuer: "blog-api-tests".to_string(),
    }
}

/// Build the full application around a [`TestContext`], auth gate included.
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap($crate::middleware::auth::BearerAuth::new(
                    $ctx.state.tokens.clone(),
                ))
                .app_data(actix_web::web::Data::new($ctx.state.clone()))
                .configure($crate::handlers::configure_routes),
        )
        .await
    };
}

pub(crate) use init_app;
