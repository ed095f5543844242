use async_trait::async_trait;

use super::resource::CatalogResource;
use crate::errors::ServiceError;

/// Persistence contract a catalog service is built on.
///
/// Absence is reported through `Option` and zero counts; `Err` means the store itself failed.
#[async_trait]
pub trait RecordStore<R: CatalogResource>: Send + Sync {
    /// All records in ascending id order.
    async fn find_all(&self) -> Result<Vec<R::Record>, ServiceError>;

    async fn find_by_key(&self, id: i32) -> Result<Option<R::Record>, ServiceError>;

    /// Insert a record, assigning its id. Fails with `Validation` when a required attribute is missing.
    async fn create(&self, payload: R::Payload) -> Result<R::Record, ServiceError>;

    /// Remove the record with `id`; returns rows removed.
    async fn destroy(&self, id: i32) -> Result<u64, ServiceError>;

    /// Write the supplied attributes to the record with `id`; returns rows the store changed.
    /// Stores may report 0 both for a missing record and for a write that changed nothing.
    async fn update(&self, id: i32, payload: R::Payload) -> Result<u64, ServiceError>;

    /// Records whose range field is `>= bound`, ascending by that field then id.
    async fn find_in_range(&self, bound: R::Bound) -> Result<Vec<R::Record>, ServiceError>;
}
