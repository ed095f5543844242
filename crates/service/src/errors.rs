use models::errors::ModelError;
use thiserror::Error;

/// Failures a catalog operation can propagate.
///
/// A missing record is never an error; services report it as `None` or a zero count.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required attribute was absent or blank, as reported by the record store.
    #[error("validation error: {0}")]
    Validation(String),
    /// Any other persistence failure: connectivity, constraint violation, timeout.
    #[error("store error: {0}")]
    Store(String),
}

impl ServiceError {
    pub fn is_validation(&self) -> bool { matches!(self, Self::Validation(_)) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::Validation(msg),
            ModelError::Db(msg) => Self::Store(msg),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Store(e.to_string()) }
}
