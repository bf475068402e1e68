//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart not found"),
        CartsServiceError::ItemNotFound => {
            StatusError::not_found().brief("Product not found in cart")
        }
        CartsServiceError::InvalidQuantity => StatusError::bad_request()
            .brief("Invalid quantity")
            .detail("quantity must be a positive integer"),
        CartsServiceError::Storage(source) => {
            error!("cart storage failure: {source}");

            StatusError::internal_server_error().brief("Internal server error")
        }
    }
}
