use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// BlogPost entity - an article published under a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i64,
    pub category: String,
    pub title: String,
    pub content: String,
    pub date_posted: DateTime<Utc>,
}

/// The client-editable part of a post, after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent {
    pub category: String,
    pub title: String,
    pub content: String,
}

/// A post ready to be stored for the first time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub category: String,
    pub title: String,
    pub content: String,
    pub date_posted: DateTime<Utc>,
}

impl PostContent {
    /// Stamp the content with its publication time.
    pub fn posted_at(self, date_posted: DateTime<Utc>) -> NewBlogPost {
        NewBlogPost {
            category: self.category,
            title: self.title,
            content: self.content,
            date_posted,
        }
    }

    /// Replace the stored post `id`, keeping its original publication time.
    pub fn replacing(self, existing: &BlogPost) -> BlogPost {
        BlogPost::from_draft(existing.id, self.posted_at(existing.date_posted))
    }
}

impl Record for BlogPost {
    type Draft = NewBlogPost;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, draft: NewBlogPost) -> Self {
        Self {
            id,
            category: draft.category,
            title: draft.title,
            content: draft.content,
            date_posted: draft.date_posted,
        }
    }
}
