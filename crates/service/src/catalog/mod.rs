//! Catalog module: resource kinds, store contract, generic service.
//!
//! One [`service::CatalogService`] is built per resource kind over an injected store.

pub mod domain;
pub mod resource;
pub mod store;
pub mod service;
pub mod repo;

pub use resource::{Authors, Books, CatalogResource};
pub use service::{AuthorService, BookService, CatalogService};
pub use store::RecordStore;
