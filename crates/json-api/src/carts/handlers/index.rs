//! Cart Index Handler

use salvo::prelude::*;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    envelope::Envelope,
    extensions::*,
};

/// Cart Index Handler
///
/// Returns every cart in stored order.
#[endpoint(
    tags("carts"),
    summary = "List Carts",
    responses(
        (status_code = StatusCode::OK, description = "Carts listed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Envelope<Vec<CartResponse>>>, StatusError> {
    let state = depot.state_or_500()?;

    let carts = state
        .carts
        .list_carts()
        .await
        .map_err(into_status_error)?;

    Ok(Json(
        Envelope::success(carts.into_iter().map(Into::into).collect())
            .with_message("Carts retrieved"),
    ))
}
