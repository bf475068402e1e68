//! Healthcheck Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::extensions::*;

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `ok`, or `unavailable` when a collection file cannot be read
    pub status: String,
}

/// Healthcheck handler
///
/// Reports whether both collection files can be loaded.
#[endpoint(
    tags("health"),
    summary = "Health check endpoint",
    responses(
        (status_code = StatusCode::OK, description = "Collections readable"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "A collection cannot be read"),
    )
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<HealthResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let mut healthy = true;

    if let Err(error) = state.products.list_products().await {
        warn!("products collection unavailable: {error}");
        healthy = false;
    }

    if let Err(error) = state.carts.list_carts().await {
        warn!("carts collection unavailable: {error}");
        healthy = false;
    }

    if !healthy {
        res.status_code(StatusCode::SERVICE_UNAVAILABLE);
    }

    Ok(Json(HealthResponse {
        status: if healthy { "ok" } else { "unavailable" }.to_owned(),
    }))
}
