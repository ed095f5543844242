use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use models::errors::ModelError;
use models::{author, book};
use tokio::sync::RwLock;

use crate::catalog::domain::{AuthorPayload, BookPayload};
use crate::catalog::resource::{Authors, Books, CatalogResource};
use crate::catalog::store::RecordStore;
use crate::errors::ServiceError;

/// How a resource kind is built, patched and range-keyed when held in memory.
pub trait MemoryRecord: CatalogResource {
    /// Build a fresh record, enforcing required attributes and column defaults.
    fn build(id: i32, payload: Self::Payload) -> Result<Self::Record, ServiceError>;

    /// Merge the supplied attributes into `record`.
    fn apply(record: &mut Self::Record, payload: Self::Payload) -> Result<(), ServiceError>;

    fn range_key(record: &Self::Record) -> Option<Self::Bound>;
}

struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

/// In-process record store keyed by auto-incremented ids.
///
/// `update` reports 0 rows when the merged record equals the stored one, the way
/// change-counting database engines do.
pub struct MemoryStore<R: CatalogResource> {
    table: RwLock<Table<R::Record>>,
}

impl<R: CatalogResource> MemoryStore<R> {
    pub fn new() -> Self {
        Self { table: RwLock::new(Table { rows: BTreeMap::new(), next_id: 1 }) }
    }

    pub async fn len(&self) -> usize { self.table.read().await.rows.len() }

    pub async fn is_empty(&self) -> bool { self.len().await == 0 }
}

impl<R: CatalogResource> Default for MemoryStore<R> {
    fn default() -> Self { Self::new() }
}

#[async_trait]
impl<R> RecordStore<R> for MemoryStore<R>
where
    R: MemoryRecord,
    R::Record: PartialEq,
    R::Bound: Ord,
{
    async fn find_all(&self) -> Result<Vec<R::Record>, ServiceError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_key(&self, id: i32) -> Result<Option<R::Record>, ServiceError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, payload: R::Payload) -> Result<R::Record, ServiceError> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        let record = R::build(id, payload)?;
        table.next_id = id
            .checked_add(1)
            .ok_or_else(|| ServiceError::Store(format!("{} id space exhausted", R::KIND)))?;
        table.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn destroy(&self, id: i32) -> Result<u64, ServiceError> {
        let mut table = self.table.write().await;
        Ok(u64::from(table.rows.remove(&id).is_some()))
    }

    async fn update(&self, id: i32, payload: R::Payload) -> Result<u64, ServiceError> {
        let mut table = self.table.write().await;
        let Some(current) = table.rows.get_mut(&id) else { return Ok(0) };
        let mut merged = current.clone();
        R::apply(&mut merged, payload)?;
        if merged == *current {
            return Ok(0);
        }
        *current = merged;
        Ok(1)
    }

    async fn find_in_range(&self, bound: R::Bound) -> Result<Vec<R::Record>, ServiceError> {
        let table = self.table.read().await;
        let mut rows: Vec<R::Record> = table
            .rows
            .values()
            .filter(|r| R::range_key(r).is_some_and(|k| k >= bound))
            .cloned()
            .collect();
        // stable sort keeps id order among equal keys
        rows.sort_by_key(|r| R::range_key(r));
        Ok(rows)
    }
}

/// Resolve a NOT NULL attribute on create: absent or null is rejected.
fn required(v: Option<Option<String>>, what: &str) -> Result<String, ServiceError> {
    v.flatten().ok_or_else(|| ServiceError::Validation(format!("{what} is required")))
}

/// Merge a nullable attribute: absent keeps, null clears.
fn merge<T>(slot: &mut Option<T>, v: Option<Option<T>>) {
    if let Some(v) = v { *slot = v; }
}

fn merge_required(
    slot: &mut String,
    v: Option<Option<String>>,
    what: &str,
    validate: fn(&str) -> Result<(), ModelError>,
) -> Result<(), ServiceError> {
    match v {
        Some(Some(v)) => {
            validate(&v)?;
            *slot = v;
        }
        Some(None) => return Err(ServiceError::Validation(format!("{what} cannot be null"))),
        None => {}
    }
    Ok(())
}

impl MemoryRecord for Authors {
    fn build(id: i32, p: AuthorPayload) -> Result<author::Model, ServiceError> {
        let name = required(p.name, "author name")?;
        author::validate_name(&name)?;
        Ok(author::Model {
            id,
            name,
            nationality: p.nationality.flatten(),
            birth_date: p.birth_date.flatten(),
            // column default applies only when the key is absent
            active: p.active.unwrap_or(Some(true)),
        })
    }

    fn apply(record: &mut author::Model, p: AuthorPayload) -> Result<(), ServiceError> {
        merge_required(&mut record.name, p.name, "author name", author::validate_name)?;
        merge(&mut record.nationality, p.nationality);
        merge(&mut record.birth_date, p.birth_date);
        merge(&mut record.active, p.active);
        Ok(())
    }

    fn range_key(record: &author::Model) -> Option<NaiveDate> { record.birth_date }
}

impl MemoryRecord for Books {
    fn build(id: i32, p: BookPayload) -> Result<book::Model, ServiceError> {
        let title = required(p.title, "book title")?;
        book::validate_title(&title)?;
        Ok(book::Model {
            id,
            title,
            isbn: p.isbn.flatten(),
            publisher: p.publisher.flatten(),
            publication_year: p.publication_year.flatten(),
            pages: p.pages.flatten(),
            price: p.price.flatten(),
        })
    }

    fn apply(record: &mut book::Model, p: BookPayload) -> Result<(), ServiceError> {
        merge_required(&mut record.title, p.title, "book title", book::validate_title)?;
        merge(&mut record.isbn, p.isbn);
        merge(&mut record.publisher, p.publisher);
        merge(&mut record.publication_year, p.publication_year);
        merge(&mut record.pages, p.pages);
        merge(&mut record.price, p.price);
        Ok(())
    }

    fn range_key(record: &book::Model) -> Option<i32> { record.pages }
}
