//! Carts service errors.

use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart not found")]
    NotFound,

    #[error("product not found in cart")]
    ItemNotFound,

    #[error("invalid quantity")]
    InvalidQuantity,

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
