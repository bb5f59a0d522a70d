//! Data Transfer Objects - request types for the API.
//!
//! Every field is optional on the wire so that a missing or `null` field can
//! be reported by validation instead of failing deserialization.

use serde::{Deserialize, Serialize};

use blog_core::domain::{NewAuthor, PostContent};
use blog_core::validation::{FieldErrors, Rule, Validate, WELL_FORMED_EMAIL};

pub const CATEGORY_MESSAGE: &str = "Please enter a category name of up to 200 characters";
pub const TITLE_MESSAGE: &str = "Please enter a title up to 200 characters in length";
pub const CONTENT_MESSAGE: &str = "Content is required";

const MAX_HEADING_CHARS: usize = 200;

/// Body of `POST /api/authors` and `PUT /api/authors/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl Validate for AuthorRequest {
    type Output = NewAuthor;

    fn validate(&self) -> Result<NewAuthor, FieldErrors> {
        let mut errors = FieldErrors::new();
        let first_name = errors.check("firstName", self.first_name.as_deref(), &[]);
        let last_name = errors.check("lastName", self.last_name.as_deref(), &[]);
        let email = errors.check(
            "email",
            self.email.as_deref(),
            &[Rule::Email(WELL_FORMED_EMAIL)],
        );

        match (first_name, last_name, email) {
            (Some(first_name), Some(last_name), Some(email)) if errors.is_empty() => {
                Ok(NewAuthor {
                    first_name,
                    last_name,
                    email,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Body of `POST /api/articles` and `PUT /api/articles/{id}`.
///
/// There is no `datePosted` field: a client may echo a fetched post back in
/// any date format and the key is skipped, since the server owns the
/// publication time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostRequest {
    pub id: Option<i64>,
    pub category: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Validate for BlogPostRequest {
    type Output = PostContent;

    fn validate(&self) -> Result<PostContent, FieldErrors> {
        let mut errors = FieldErrors::new();
        let category = errors.check(
            "category",
            self.category.as_deref(),
            &[
                Rule::NotBlank(CATEGORY_MESSAGE),
                Rule::MaxChars(MAX_HEADING_CHARS, CATEGORY_MESSAGE),
            ],
        );
        let title = errors.check(
            "title",
            self.title.as_deref(),
            &[
                Rule::NotBlank(TITLE_MESSAGE),
                Rule::MaxChars(MAX_HEADING_CHARS, TITLE_MESSAGE),
            ],
        );
        let content = errors.check(
            "content",
            self.content.as_deref(),
            &[Rule::NotBlank(CONTENT_MESSAGE)],
        );

        match (category, title, content) {
            (Some(category), Some(title), Some(content)) if errors.is_empty() => Ok(PostContent {
                category,
                title,
                content,
            }),
            _ => Err(errors),
        }
    }
}

/// Query string of `GET /api/articles/category`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuery {
    pub category_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::validation::NOT_NULL;

    fn post(category: &str, title: &str, content: &str) -> BlogPostRequest {
        BlogPostRequest {
            category: Some(category.to_string()),
            title: Some(title.to_string()),
            content: Some(content.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_post_reports_not_null_for_every_field() {
        let errors = BlogPostRequest::default().validate().unwrap_err();

        let fields: Vec<_> = errors.iter().collect();
        assert_eq!(
            fields,
            vec![
                ("category", NOT_NULL),
                ("title", NOT_NULL),
                ("content", NOT_NULL)
            ]
        );
    }

    #[test]
    fn test_blank_post_fields_report_custom_messages() {
        let errors = post("", "", "").validate().unwrap_err();

        assert_eq!(errors.get("category"), Some(CATEGORY_MESSAGE));
        assert_eq!(errors.get("title"), Some(TITLE_MESSAGE));
        assert_eq!(errors.get("content"), Some(CONTENT_MESSAGE));
    }

    #[test]
    fn test_headings_are_limited_to_200_chars() {
        let at_limit = "x".repeat(200);
        assert!(post(&at_limit, &at_limit, "body").validate().is_ok());

        let over = "x".repeat(201);
        let errors = post(&over, "t", "body").validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("category"), Some(CATEGORY_MESSAGE));
    }

    #[test]
    fn test_valid_post_ignores_client_date() {
        for date in [r#""2024-01-01T00:00:00Z""#, "1700000000000", r#""2024-01-01""#, r#""yesterday""#] {
            let request: BlogPostRequest = serde_json::from_str(&format!(
                r#"{{"category":"c","title":"t","content":"body","datePosted":{date}}}"#
            ))
            .unwrap();

            let content = request.validate().unwrap();
            assert_eq!(content.category, "c");
            assert_eq!(content.title, "t");
            assert_eq!(content.content, "body");
        }
    }

    #[test]
    fn test_author_requires_every_field() {
        let errors = AuthorRequest::default().validate().unwrap_err();

        assert_eq!(errors.get("firstName"), Some(NOT_NULL));
        assert_eq!(errors.get("lastName"), Some(NOT_NULL));
        assert_eq!(errors.get("email"), Some(NOT_NULL));
    }

    #[test]
    fn test_author_email_must_be_well_formed() {
        let request: AuthorRequest = serde_json::from_str(
            r#"{"id":0,"firstName":"first","lastName":"last","email":"not-an-address"}"#,
        )
        .unwrap();

        let errors = request.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some(WELL_FORMED_EMAIL));
    }

    #[test]
    fn test_valid_author() {
        let request: AuthorRequest = serde_json::from_str(
            r#"{"id":0,"firstName":"first","lastName":"last","email":"foobar@mail.com"}"#,
        )
        .unwrap();

        let author = request.validate().unwrap();
        assert_eq!(author.first_name, "first");
        assert_eq!(author.email, "foobar@mail.com");
    }
}
