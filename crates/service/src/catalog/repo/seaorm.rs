use async_trait::async_trait;
use chrono::NaiveDate;
use models::{author, book};
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::catalog::domain::{AuthorPayload, BookPayload};
use crate::catalog::resource::{Authors, Books};
use crate::catalog::store::RecordStore;
use crate::errors::ServiceError;

/// SeaORM-backed author store.
pub struct SeaOrmAuthorStore {
    pub db: DatabaseConnection,
}

/// SeaORM-backed book store.
pub struct SeaOrmBookStore {
    pub db: DatabaseConnection,
}

/// Absent keys stay `NotSet`; an explicit null writes NULL.
fn patch<V>(v: Option<Option<V>>) -> ActiveValue<Option<V>>
where
    Option<V>: Into<sea_orm::Value>,
{
    match v {
        Some(v) => ActiveValue::Set(v),
        None => ActiveValue::NotSet,
    }
}

/// Like [`patch`] for NOT NULL columns: an explicit null is rejected.
fn patch_required<V>(v: Option<Option<V>>, what: &str) -> Result<ActiveValue<V>, ServiceError>
where
    V: Into<sea_orm::Value>,
{
    match v {
        Some(Some(v)) => Ok(ActiveValue::Set(v)),
        Some(None) => Err(ServiceError::Validation(format!("{what} cannot be null"))),
        None => Ok(ActiveValue::NotSet),
    }
}

fn author_active_model(p: AuthorPayload) -> Result<author::ActiveModel, ServiceError> {
    Ok(author::ActiveModel {
        id: ActiveValue::NotSet,
        name: patch_required(p.name, "author name")?,
        nationality: patch(p.nationality),
        birth_date: patch(p.birth_date),
        active: patch(p.active),
    })
}

fn book_active_model(p: BookPayload) -> Result<book::ActiveModel, ServiceError> {
    Ok(book::ActiveModel {
        id: ActiveValue::NotSet,
        title: patch_required(p.title, "book title")?,
        isbn: patch(p.isbn),
        publisher: patch(p.publisher),
        publication_year: patch(p.publication_year),
        pages: patch(p.pages),
        price: patch(p.price),
    })
}

#[async_trait]
impl RecordStore<Authors> for SeaOrmAuthorStore {
    async fn find_all(&self) -> Result<Vec<author::Model>, ServiceError> {
        Ok(author::Entity::find().order_by_asc(author::Column::Id).all(&self.db).await?)
    }

    async fn find_by_key(&self, id: i32) -> Result<Option<author::Model>, ServiceError> {
        Ok(author::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create(&self, payload: AuthorPayload) -> Result<author::Model, ServiceError> {
        Ok(author::create(&self.db, author_active_model(payload)?).await?)
    }

    async fn destroy(&self, id: i32) -> Result<u64, ServiceError> {
        let res = author::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected)
    }

    async fn update(&self, id: i32, payload: AuthorPayload) -> Result<u64, ServiceError> {
        Ok(author::update_by_id(&self.db, id, author_active_model(payload)?).await?)
    }

    async fn find_in_range(&self, bound: NaiveDate) -> Result<Vec<author::Model>, ServiceError> {
        Ok(author::Entity::find()
            .filter(author::Column::BirthDate.gte(bound))
            .order_by_asc(author::Column::BirthDate)
            .order_by_asc(author::Column::Id)
            .all(&self.db)
            .await?)
    }
}

#[async_trait]
impl RecordStore<Books> for SeaOrmBookStore {
    async fn find_all(&self) -> Result<Vec<book::Model>, ServiceError> {
        Ok(book::Entity::find().order_by_asc(book::Column::Id).all(&self.db).await?)
    }

    async fn find_by_key(&self, id: i32) -> Result<Option<book::Model>, ServiceError> {
        Ok(book::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create(&self, payload: BookPayload) -> Result<book::Model, ServiceError> {
        Ok(book::create(&self.db, book_active_model(payload)?).await?)
    }

    async fn destroy(&self, id: i32) -> Result<u64, ServiceError> {
        let res = book::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected)
    }

    async fn update(&self, id: i32, payload: BookPayload) -> Result<u64, ServiceError> {
        Ok(book::update_by_id(&self.db, id, book_active_model(payload)?).await?)
    }

    async fn find_in_range(&self, bound: i32) -> Result<Vec<book::Model>, ServiceError> {
        Ok(book::Entity::find()
            .filter(book::Column::Pages.gte(bound))
            .order_by_asc(book::Column::Pages)
            .order_by_asc(book::Column::Id)
            .all(&self.db)
            .await?)
    }
}
