//! Update Cart Product Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use storefront_app::domain::{carts::models::CartId, products::models::ProductId};

use crate::{
    carts::{
        errors::into_status_error,
        items::quantity::{QuantityRequest, required_quantity},
        models::CartResponse,
    },
    envelope::Envelope,
    extensions::*,
};

/// Update Cart Product Handler
///
/// Sets the quantity of a line item. Zero or less removes it.
#[endpoint(
    tags("carts"),
    summary = "Update Cart Product Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Quantity updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or line item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid quantity"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
pub(crate) async fn handler(
    cart: PathParam<u64>,
    product: PathParam<u64>,
    json: JsonBody<QuantityRequest>,
    depot: &mut Depot,
) -> Result<Json<Envelope<CartResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let quantity = required_quantity(json.into_inner())?;

    let cart = state
        .carts
        .update_quantity(
            CartId::new(cart.into_inner()),
            ProductId::new(product.into_inner()),
            quantity,
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(
        Envelope::success(cart.into()).with_message("Cart quantity updated"),
    ))
}
