use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::catalog::repo::{SeaOrmAuthorStore, SeaOrmBookStore};
use service::catalog::{AuthorService, Authors, BookService, Books, CatalogService, RecordStore};
use service::storage::memory::MemoryStore;

/// Shared handler state: one service per resource kind.
#[derive(Clone)]
pub struct AppState {
    pub authors: Arc<AuthorService>,
    pub books: Arc<BookService>,
}

impl AppState {
    pub fn new(authors: Arc<dyn RecordStore<Authors>>, books: Arc<dyn RecordStore<Books>>) -> Self {
        Self {
            authors: Arc::new(CatalogService::new(authors)),
            books: Arc::new(CatalogService::new(books)),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::<Authors>::new()), Arc::new(MemoryStore::<Books>::new()))
    }

    pub fn with_database(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmAuthorStore { db: db.clone() }),
            Arc::new(SeaOrmBookStore { db }),
        )
    }
}
