//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => StatusError::bad_request()
            .brief("Product code already exists")
            .detail(error.to_string()),
        ProductsServiceError::MissingRequiredData(_) | ProductsServiceError::InvalidData(_) => {
            StatusError::bad_request()
                .brief("Invalid product payload")
                .detail(error.to_string())
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::Storage(source) => {
            error!("product storage failure: {source}");

            StatusError::internal_server_error().brief("Internal server error")
        }
    }
}
