//! Author handlers - `/api/authors`.

use actix_web::{HttpRequest, HttpResponse, http::header, web};

use blog_core::Validate;
use blog_shared::dto::AuthorRequest;

use super::location;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult, parse_id};
use crate::state::AppState;

/// POST /api/authors
pub async fn create(
    req: HttpRequest,
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<AuthorRequest>,
) -> AppResult<HttpResponse> {
    let author = body.validate()?;

    let saved = state.authors.insert(author).await?;
    tracing::info!(author_id = saved.id, by = %identity.subject, "Author created");

    let url = location(&req, &format!("/api/authors/{}", saved.id));
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, url))
        .json(saved))
}

/// GET /api/authors
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let authors = state.authors.find_all().await?;
    Ok(HttpResponse::Ok().json(authors))
}

/// GET /api/authors/{id}
///
/// Answers with a one-element array rather than the bare record.
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    match state.authors.find_by_id(id).await? {
        Some(author) => Ok(HttpResponse::Ok().json([author])),
        None => Err(AppError::NotFound),
    }
}

/// PUT /api/authors/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<AuthorRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let author = body.validate()?;

    if body.id != Some(id) {
        tracing::debug!(path_id = id, body_id = ?body.id, "Author id mismatch");
        return Err(AppError::Conflict);
    }
    if !state.authors.exists_by_id(id).await? {
        return Err(AppError::NotFound);
    }

    state.authors.save(author.with_id(id)).await?;
    tracing::info!(author_id = id, by = %identity.subject, "Author replaced");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/authors/{id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    if !state.authors.exists_by_id(id).await? {
        return Err(AppError::NotFound);
    }

    state.authors.delete(id).await?;
    tracing::info!(author_id = id, by = %identity.subject, "Author deleted");

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::http::{StatusCode, header};
    use actix_web::test;
    use serde_json::{Value, json};

    use crate::test_support::{TestContext, init_app};

    const URI: &str = "/api/authors";

    fn author_body(id: i64) -> Value {
        json!({"id": id, "firstName": "first", "lastName": "last", "email": "foobar@mail.com"})
    }

    #[actix_web::test]
    async fn test_post_creates_author_with_location() {
        let ctx = TestContext::new();
        let app = init_app!(ctx);

        let req = test::TestRequest::post()
            .uri(URI)
            .insert_header(ctx.bearer())
            .set_json(author_body(0))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::CREATED);
        let location = res
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let body: Value = test::read_body_json(res).await;

        let id = body["id"].as_i64().unwrap();
        assert!(location.starts_with("http://"));
        assert!(location.ends_with(&format!("/api/authors/{id}")));
        assert_eq!(body["firstName"], "first");
        assert_eq!(body["email"], "foobar@mail.com");
        assert_eq!(ctx.authors.count("insert"), 1);
    }

    #[actix_web::test]
    async fn test_post_with_missing_fields_is_bad_request() {
        let ctx = TestContext::new();
        let app = init_app!(ctx);

        let req = test::TestRequest::post()
            .uri(URI)
            .insert_header(ctx.bearer())
            .set_json(json!({}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["fieldErrors"]["firstName"], "must not be null");
        assert_eq!(body["fieldErrors"]["lastName"], "must not be null");
        assert_eq!(body["fieldErrors"]["email"], "must not be null");
        assert_eq!(ctx.authors.count("insert"), 0);
    }

    #[actix_web::test]
    async fn test_post_accepts_long_names() {
        let ctx = TestContext::new();
        let app = init_app!(ctx);
        let long = "x".repeat(201);

        let req = test::TestRequest::post()
            .uri(URI)
            .insert_header(ctx.bearer())
            .set_json(json!({"firstName": long, "lastName": long, "email": "foobar@mail.com"}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["firstName"].as_str().unwrap().chars().count(), 201);
    }

    #[actix_web::test]
    async fn test_post_without_token_is_forbidden() {
        let ctx = TestContext::new();
        let app = init_app!(ctx);

        let req = test::TestRequest::post()
            .uri(URI)
            .set_json(author_body(0))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        assert!(ctx.authors.calls().is_empty());
    }

    #[actix_web::test]
    async fn test_mutations_with_forged_token_are_forbidden() {
        let ctx = TestContext::new();
        let author = ctx.seed_author("ada").await;
        let app = init_app!(ctx);

        let requests = [
            test::TestRequest::post().uri(URI).set_json(author_body(0)),
            test::TestRequest::put()
                .uri(&format!("{URI}/{}", author.id))
                .set_json(author_body(author.id)),
            test::TestRequest::delete().uri(&format!("{URI}/{}", author.id)),
        ];
        for req in requests {
            let res = test::call_service(&app, req.insert_header(ctx.forged_bearer()).to_request()).await;
            assert_eq!(res.status(), StatusCode::FORBIDDEN);
        }

        assert!(ctx.authors.calls().is_empty());
    }

    #[actix_web::test]
    async fn test_get_all_on_empty_repository() {
        let ctx = TestContext::new();
        let app = init_app!(ctx);

        let req = test::TestRequest::get().uri(URI).to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!([]));
        assert_eq!(ctx.authors.count("find_all"), 1);
    }

    #[actix_web::test]
    async fn test_get_by_id_returns_single_element_array() {
        let ctx = TestContext::new();
        let author = ctx.seed_author("ada").await;
        let app = init_app!(ctx);

        let req = test::TestRequest::get()
            .uri(&format!("{URI}/{}", author.id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["id"], author.id);
        assert_eq!(body[0]["firstName"], "ada");
    }

    #[actix_web::test]
    async fn test_get_missing_id_is_not_found() {
        let ctx = TestContext::new();
        let app = init_app!(ctx);

        let req = test::TestRequest::get().uri(&format!("{URI}/1")).to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(test::read_body(res).await.is_empty());
    }

    #[actix_web::test]
    async fn test_non_numeric_id_is_bad_request_before_repository() {
        let ctx = TestContext::new();
        let app = init_app!(ctx);

        let requests = [
            test::TestRequest::get().uri(&format!("{URI}/ABC")),
            test::TestRequest::put()
                .uri(&format!("{URI}/ABC"))
                .insert_header(ctx.bearer())
                .set_json(author_body(100)),
            test::TestRequest::delete()
                .uri(&format!("{URI}/ABC"))
                .insert_header(ctx.bearer()),
        ];
        for req in requests {
            let res = test::call_service(&app, req.to_request()).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        }

        assert!(ctx.authors.calls().is_empty());
    }

    #[actix_web::test]
    async fn test_put_replaces_existing_author() {
        let ctx = TestContext::new();
        let author = ctx.seed_author("ada").await;
        let app = init_app!(ctx);

        let req = test::TestRequest::put()
            .uri(&format!("{URI}/{}", author.id))
            .insert_header(ctx.bearer())
            .set_json(json!({
                "id": author.id,
                "firstName": "ufirst",
                "lastName": "ulast",
                "email": "ufoobar@mail.com"
            }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert_eq!(ctx.authors.count("save"), 1);

        let req = test::TestRequest::get()
            .uri(&format!("{URI}/{}", author.id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body[0]["firstName"], "ufirst");
        assert_eq!(body[0]["email"], "ufoobar@mail.com");
    }

    #[actix_web::test]
    async fn test_put_with_mismatched_id_is_conflict() {
        let ctx = TestContext::new();
        ctx.seed_author("ada").await;
        let app = init_app!(ctx);

        let req = test::TestRequest::put()
            .uri(&format!("{URI}/100"))
            .insert_header(ctx.bearer())
            .set_json(author_body(1))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::CONFLICT);
        assert_eq!(ctx.authors.count("save"), 0);
    }

    #[actix_web::test]
    async fn test_put_unknown_author_is_not_found() {
        let ctx = TestContext::new();
        let app = init_app!(ctx);

        let req = test::TestRequest::put()
            .uri(&format!("{URI}/100"))
            .insert_header(ctx.bearer())
            .set_json(author_body(100))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(ctx.authors.count("save"), 0);
    }

    #[actix_web::test]
    async fn test_put_with_invalid_body_is_bad_request() {
        let ctx = TestContext::new();
        let app = init_app!(ctx);

        let req = test::TestRequest::put()
            .uri(&format!("{URI}/100"))
            .insert_header(ctx.bearer())
            .set_json(json!({"id": 100, "firstName": "first", "lastName": "last", "email": "nope"}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(
            body["fieldErrors"]["email"],
            "must be a well-formed email address"
        );
        assert_eq!(ctx.authors.count("save"), 0);
    }

    #[actix_web::test]
    async fn test_delete_lifecycle() {
        let ctx = TestContext::new();
        let author = ctx.seed_author("ada").await;
        let app = init_app!(ctx);
        let uri = format!("{URI}/{}", author.id);

        let req = test::TestRequest::delete()
            .uri(&uri)
            .insert_header(ctx.bearer())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);
        assert_eq!(ctx.authors.count("delete"), 1);

        // Deleted is terminal: every further access is 404.
        let req = test::TestRequest::get().uri(&uri).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete()
            .uri(&uri)
            .insert_header(ctx.bearer())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::put()
            .uri(&uri)
            .insert_header(ctx.bearer())
            .set_json(author_body(author.id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        assert_eq!(ctx.authors.count("delete"), 1);
        assert_eq!(ctx.authors.count("save"), 0);
    }

    #[actix_web::test]
    async fn test_delete_missing_author_is_not_found() {
        let ctx = TestContext::new();
        let app = init_app!(ctx);

        let req = test::TestRequest::delete()
            .uri(&format!("{URI}/5"))
            .insert_header(ctx.bearer())
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(ctx.authors.count("delete"), 0);
    }
}
