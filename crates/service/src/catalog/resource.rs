use std::fmt::Debug;

use chrono::NaiveDate;
use models::{author, book};

use super::domain::{AuthorPayload, BookPayload};
use crate::errors::ServiceError;

/// A kind of catalog record with its payload and range-filter types.
pub trait CatalogResource: Send + Sync + 'static {
    /// Name used in logs and spans.
    const KIND: &'static str;

    type Record: Clone + Debug + Send + Sync + 'static;
    type Payload: Clone + Debug + Send + Sync + 'static;
    /// Lower bound as callers supply it.
    type MinValue: Copy + Debug + Send + Sync + 'static;
    /// Lower bound as the store compares it against the range field.
    type Bound: Copy + Debug + Send + Sync + 'static;

    fn record_id(record: &Self::Record) -> i32;

    fn range_bound(min: Self::MinValue) -> Result<Self::Bound, ServiceError>;
}

/// Authors, range-filtered by birth date from a minimum year.
pub enum Authors {}

/// Books, range-filtered by page count.
pub enum Books {}

impl CatalogResource for Authors {
    const KIND: &'static str = "author";

    type Record = author::Model;
    type Payload = AuthorPayload;
    type MinValue = i32;
    type Bound = NaiveDate;

    fn record_id(record: &author::Model) -> i32 { record.id }

    /// January 1 of `min`.
    fn range_bound(min: i32) -> Result<NaiveDate, ServiceError> {
        NaiveDate::from_ymd_opt(min, 1, 1)
            .ok_or_else(|| ServiceError::Validation(format!("year {min} is out of range")))
    }
}

impl CatalogResource for Books {
    const KIND: &'static str = "book";

    type Record = book::Model;
    type Payload = BookPayload;
    type MinValue = i32;
    type Bound = i32;

    fn record_id(record: &book::Model) -> i32 { record.id }

    fn range_bound(min: i32) -> Result<i32, ServiceError> { Ok(min) }
}
