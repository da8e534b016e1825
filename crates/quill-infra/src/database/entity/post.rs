//! Post entity for SeaORM.

use sea_orm::ActiveValue::NotSet;
use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::domain::{Category, NewPost, Post};

/// Category column, stored as its display name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum CategoryColumn {
    #[sea_orm(string_value = "Fiction")]
    Fiction,
    #[sea_orm(string_value = "Non-Fiction")]
    NonFiction,
}

impl From<Category> for CategoryColumn {
    fn from(category: Category) -> Self {
        match category {
            Category::Fiction => Self::Fiction,
            Category::NonFiction => Self::NonFiction,
        }
    }
}

impl From<CategoryColumn> for Category {
    fn from(column: CategoryColumn) -> Self {
        match column {
            CategoryColumn::Fiction => Self::Fiction,
            CategoryColumn::NonFiction => Self::NonFiction,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub category: CategoryColumn,
    pub summary: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Post::hydrate(
            model.id,
            model.title,
            model.content,
            model.category.into(),
            model.summary,
            model.created_at.into(),
            model.updated_at.map(Into::into),
        )
    }
}

/// Insert form: the id is left to the database.
impl From<NewPost> for ActiveModel {
    fn from(post: NewPost) -> Self {
        Self {
            id: NotSet,
            title: Set(post.title().to_string()),
            content: Set(post.content().map(str::to_string)),
            category: Set(post.category().into()),
            summary: Set(post.summary().map(str::to_string)),
            created_at: Set(chrono::Utc::now().into()),
            updated_at: Set(None),
        }
    }
}

/// Update form: every column is written back, with a fresh update time.
impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        Self {
            id: Set(post.id()),
            title: Set(post.title().to_string()),
            content: Set(post.content().map(str::to_string)),
            category: Set(post.category().into()),
            summary: Set(post.summary().map(str::to_string)),
            created_at: Set(post.created_at().into()),
            updated_at: Set(Some(chrono::Utc::now().into())),
        }
    }
}
