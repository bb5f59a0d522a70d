//! Blog post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use blog_core::domain::{BlogPost, NewBlogPost};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub category: String,
    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub date_posted: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain BlogPost.
impl From<Model> for BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            category: model.category,
            title: model.title,
            content: model.content,
            date_posted: model.date_posted.into(),
        }
    }
}

/// Full-row replacement of an existing post.
impl From<BlogPost> for ActiveModel {
    fn from(post: BlogPost) -> Self {
        Self {
            id: Set(post.id),
            category: Set(post.category),
            title: Set(post.title),
            content: Set(post.content),
            date_posted: Set(post.date_posted.into()),
        }
    }
}

/// A new post; the database assigns the id.
impl From<NewBlogPost> for ActiveModel {
    fn from(post: NewBlogPost) -> Self {
        Self {
            id: NotSet,
            category: Set(post.category),
            title: Set(post.title),
            content: Set(post.content),
            date_posted: Set(post.date_posted.into()),
        }
    }
}
