use std::{marker::PhantomData, sync::Arc};

use tracing::{debug, info, instrument};

use super::resource::{Authors, Books, CatalogResource};
use super::store::RecordStore;
use crate::errors::ServiceError;

/// Application service exposing CRUD and range filtering for one resource kind.
///
/// Stateless: every call goes straight to the injected store, so one instance can be
/// shared across tasks behind an `Arc`.
pub struct CatalogService<R: CatalogResource, S: RecordStore<R> + ?Sized> {
    store: Arc<S>,
    _kind: PhantomData<fn() -> R>,
}

/// Author service over any record store.
pub type AuthorService = CatalogService<Authors, dyn RecordStore<Authors>>;
/// Book service over any record store.
pub type BookService = CatalogService<Books, dyn RecordStore<Books>>;

impl<R, S> CatalogService<R, S>
where
    R: CatalogResource,
    S: RecordStore<R> + ?Sized,
{
    pub fn new(store: Arc<S>) -> Self { Self { store, _kind: PhantomData } }

    #[instrument(skip(self), fields(kind = R::KIND))]
    pub async fn list_all(&self) -> Result<Vec<R::Record>, ServiceError> {
        let rows = self.store.find_all().await?;
        debug!(count = rows.len(), "listed records");
        Ok(rows)
    }

    /// `Ok(None)` when no record has `id`.
    #[instrument(skip(self), fields(kind = R::KIND))]
    pub async fn get_by_id(&self, id: i32) -> Result<Option<R::Record>, ServiceError> {
        self.store.find_by_key(id).await
    }

    /// Required attributes are checked by the store, not here.
    #[instrument(skip(self, payload), fields(kind = R::KIND))]
    pub async fn create(&self, payload: R::Payload) -> Result<R::Record, ServiceError> {
        let record = self.store.create(payload).await?;
        info!(id = R::record_id(&record), "record_created");
        Ok(record)
    }

    /// Returns records removed: 0 when `id` does not exist.
    #[instrument(skip(self), fields(kind = R::KIND))]
    pub async fn delete_by_id(&self, id: i32) -> Result<u64, ServiceError> {
        let removed = self.store.destroy(id).await?;
        if removed > 0 { info!(removed, "record_deleted"); }
        Ok(removed)
    }

    /// Merge `payload` into the record with `id`.
    ///
    /// Returns >= 1 when the record exists, whether or not the store had to write anything,
    /// and 0 when it does not exist.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::catalog::{Authors, CatalogService, domain::AuthorPayload};
    /// use service::storage::memory::MemoryStore;
    ///
    /// let svc = CatalogService::<Authors, _>::new(Arc::new(MemoryStore::<Authors>::new()));
    /// let ada = AuthorPayload { name: Some(Some("Ada".into())), nationality: Some(Some("UK".into())), ..Default::default() };
    /// let created = tokio_test::block_on(svc.create(ada)).unwrap();
    ///
    /// let same = AuthorPayload { nationality: Some(Some("UK".into())), ..Default::default() };
    /// assert_eq!(tokio_test::block_on(svc.update(created.id, same.clone())).unwrap(), 1);
    /// assert_eq!(tokio_test::block_on(svc.update(created.id + 1, same)).unwrap(), 0);
    /// ```
    #[instrument(skip(self, payload), fields(kind = R::KIND))]
    pub async fn update(&self, id: i32, payload: R::Payload) -> Result<u64, ServiceError> {
        let affected = self.store.update(id, payload).await?;
        if affected > 0 {
            return Ok(affected);
        }
        // zero rows: either nothing to change or nothing to change it on
        match self.store.find_by_key(id).await? {
            Some(_) => {
                debug!("update left record unchanged");
                Ok(1)
            }
            None => Ok(0),
        }
    }

    /// Records whose range field is at least `min`, ascending by that field.
    #[instrument(skip(self), fields(kind = R::KIND))]
    pub async fn filter_by_range(&self, min: R::MinValue) -> Result<Vec<R::Record>, ServiceError> {
        let bound = R::range_bound(min)?;
        let rows = self.store.find_in_range(bound).await?;
        debug!(?bound, count = rows.len(), "filtered records");
        Ok(rows)
    }
}
