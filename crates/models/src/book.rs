use sea_orm::{entity::prelude::*, ActiveValue, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "book")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub isbn: Option<String>,
    pub publisher: Option<String>,
    pub publication_year: Option<i32>,
    pub pages: Option<i32>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub price: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation { fn def(&self) -> RelationDef { panic!("no relations") } }

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_title(title: &str) -> Result<(), errors::ModelError> {
    if title.trim().is_empty() { return Err(errors::ModelError::Validation("book title must not be empty".into())); }
    Ok(())
}

/// Insert a new book. `title` must be set and non-blank; `id` is assigned by the database.
pub async fn create(db: &DatabaseConnection, mut am: ActiveModel) -> Result<Model, errors::ModelError> {
    match &am.title {
        ActiveValue::Set(t) | ActiveValue::Unchanged(t) => validate_title(t)?,
        ActiveValue::NotSet => return Err(errors::ModelError::Validation("book title is required".into())),
    }
    am.id = ActiveValue::NotSet;
    Ok(am.insert(db).await?)
}

/// Write the set columns of `am` to the row with `id`; returns rows affected.
pub async fn update_by_id(db: &DatabaseConnection, id: i32, mut am: ActiveModel) -> Result<u64, errors::ModelError> {
    if let ActiveValue::Set(t) = &am.title { validate_title(t)?; }
    am.id = ActiveValue::NotSet;
    if !am.is_changed() { return Ok(0); }
    let res = Entity::update_many().set(am).filter(Column::Id.eq(id)).exec(db).await?;
    Ok(res.rows_affected)
}
