//! Get Product Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::products::models::ProductId;

use crate::{
    envelope::Envelope,
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
};

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
pub(crate) async fn handler(
    product: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<Envelope<ProductResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let product = state
        .products
        .get_product(ProductId::new(product.into_inner()))
        .await
        .map_err(into_status_error)?
        .ok_or_else(|| StatusError::not_found().brief("Product not found"))?;

    Ok(Json(Envelope::success(product.into())))
}
