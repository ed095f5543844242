use sea_orm::{entity::prelude::*, ActiveValue, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "author")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub nationality: Option<String>,
    pub birth_date: Option<Date>,
    pub active: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation { fn def(&self) -> RelationDef { panic!("no relations") } }

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("author name must not be empty".into())); }
    Ok(())
}

/// Insert a new author. `name` must be set and non-blank; `id` is assigned by the database.
pub async fn create(db: &DatabaseConnection, mut am: ActiveModel) -> Result<Model, errors::ModelError> {
    match &am.name {
        ActiveValue::Set(n) | ActiveValue::Unchanged(n) => validate_name(n)?,
        ActiveValue::NotSet => return Err(errors::ModelError::Validation("author name is required".into())),
    }
    am.id = ActiveValue::NotSet;
    Ok(am.insert(db).await?)
}

/// Write the set columns of `am` to the row with `id`; returns rows affected.
/// An active model with nothing set performs no write and reports 0.
pub async fn update_by_id(db: &DatabaseConnection, id: i32, mut am: ActiveModel) -> Result<u64, errors::ModelError> {
    if let ActiveValue::Set(n) = &am.name { validate_name(n)?; }
    am.id = ActiveValue::NotSet;
    if !am.is_changed() { return Ok(0); }
    let res = Entity::update_many().set(am).filter(Column::Id.eq(id)).exec(db).await?;
    Ok(res.rows_affected)
}
