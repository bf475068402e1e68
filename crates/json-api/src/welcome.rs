//! Welcome Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;

/// Resource entry points
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EndpointsResponse {
    /// Products collection path
    pub products: String,

    /// Carts collection path
    pub carts: String,
}

/// Welcome Handler
///
/// Points clients at the resource collections.
#[endpoint(tags("welcome"), summary = "Welcome")]
pub(crate) async fn handler() -> Json<Envelope<EndpointsResponse>> {
    Json(
        Envelope::success(EndpointsResponse {
            products: "/api/products".to_owned(),
            carts: "/api/carts".to_owned(),
        })
        .with_message("Welcome to the products and carts API"),
    )
}
