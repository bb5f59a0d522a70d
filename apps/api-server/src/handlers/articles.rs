//! Blog post handlers - `/api/articles`.

use actix_web::{HttpRequest, HttpResponse, http::header, web};
use chrono::Utc;

use blog_core::Validate;
use blog_shared::dto::{BlogPostRequest, CategoryQuery};

use super::location;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult, parse_id};
use crate::state::AppState;

/// POST /api/articles
///
/// `datePosted` is always the server's clock at creation.
pub async fn create(
    req: HttpRequest,
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<BlogPostRequest>,
) -> AppResult<HttpResponse> {
    let post = body.validate()?.posted_at(Utc::now());

    let saved = state.posts.insert(post).await?;
    tracing::info!(post_id = saved.id, category = %saved.category, by = %identity.subject, "Post created");

    let url = location(&req, &format!("/api/articles/{}", saved.id));
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, url))
        .json(saved))
}

/// GET /api/articles
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/articles/category?categoryName=...
pub async fn by_category(
    state: web::Data<AppState>,
    query: web::Query<CategoryQuery>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.find_by_category(&query.category_name).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/articles/{id}
///
/// Answers with a one-element array rather than the bare record.
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    match state.posts.find_by_id(id).await? {
        Some(post) => Ok(HttpResponse::Ok().json([post])),
        None => Err(AppError::NotFound),
    }
}

/// PUT /api/articles/{id}
///
/// Replaces category, title and content; the stored `datePosted` is kept.
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<BlogPostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let content = body.validate()?;

    if body.id != Some(id) {
        tracing::debug!(path_id = id, body_id = ?body.id, "Post id mismatch");
        return Err(AppError::Conflict);
    }
    let Some(existing) = state.posts.find_by_id(id).await? else {
        return Err(AppError::NotFound);
    };

    state.posts.save(content.replacing(&existing)).await?;
    tracing::info!(post_id = id, by = %identity.subject, "Post replaced");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/articles/{id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    if !state.posts.exists_by_id(id).await? {
        return Err(AppError::NotFound);
    }

    state.posts.delete(id).await?;
    tracing::info!(post_id = id, by = %identity.subject, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
