//! Author entity for SeaORM.

use sea_orm::ActiveValue::NotSet;
use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::domain::{Author, NewAuthor};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub phone_number: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Author.
impl From<Model> for Author {
    fn from(model: Model) -> Self {
        Author::hydrate(
            model.id,
            model.name,
            model.phone_number,
            model.created_at.into(),
            model.updated_at.map(Into::into),
        )
    }
}

/// Insert form: the id is left to the database.
impl From<NewAuthor> for ActiveModel {
    fn from(author: NewAuthor) -> Self {
        Self {
            id: NotSet,
            name: Set(author.name().to_string()),
            phone_number: Set(author.phone_number().map(str::to_string)),
            created_at: Set(chrono::Utc::now().into()),
            updated_at: Set(None),
        }
    }
}

/// Update form: every column is written back, with a fresh update time.
impl From<Author> for ActiveModel {
    fn from(author: Author) -> Self {
        Self {
            id: Set(author.id()),
            name: Set(author.name().to_string()),
            phone_number: Set(author.phone_number().map(str::to_string)),
            created_at: Set(author.created_at().into()),
            updated_at: Set(Some(chrono::Utc::now().into())),
        }
    }
}
