use serde::{Deserialize, Serialize};

use super::Record;

/// Author entity - a person who writes for the blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// A validated author that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl NewAuthor {
    /// Full replacement of the author stored under `id`.
    pub fn with_id(self, id: i64) -> Author {
        Author::from_draft(id, self)
    }
}

impl Record for Author {
    type Draft = NewAuthor;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, draft: NewAuthor) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
        }
    }
}
