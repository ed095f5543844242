//! Service layer providing CRUD and range-filter operations over catalog resources.
//! - Separates resource semantics (not-found, idempotent update) from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Record stores are injected; see [`catalog::store::RecordStore`].

pub mod errors;
pub mod catalog;
pub mod storage;
#[cfg(test)]
pub mod test_support;
