//! Delete Cart Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::carts::models::CartId;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    envelope::Envelope,
    extensions::*,
};

/// Delete Cart Handler
///
/// Removes the cart entirely and returns it.
#[endpoint(
    tags("carts"),
    summary = "Delete Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
pub(crate) async fn handler(
    cart: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<Envelope<CartResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let removed = state
        .carts
        .delete_cart(CartId::new(cart.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(
        Envelope::success(removed.into()).with_message("Cart deleted"),
    ))
}
