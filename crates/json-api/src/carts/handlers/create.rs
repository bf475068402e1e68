//! Create Cart Handler

use salvo::{http::header::LOCATION, prelude::*};

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    envelope::Envelope,
    extensions::*,
};

/// Create Cart Handler
///
/// Creates an empty cart.
#[endpoint(
    tags("carts"),
    summary = "Create Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart created"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<Envelope<CartResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let cart = state
        .carts
        .create_cart()
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/carts/{}", cart.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(
        Envelope::success(cart.into()).with_message("Cart created"),
    ))
}
