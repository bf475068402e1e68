//! Products service errors.

use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product code already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error("missing required fields: {}", .0.join(", "))]
    MissingRequiredData(Vec<&'static str>),

    #[error("invalid value for {0}")]
    InvalidData(&'static str),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
