//! Product Index Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use storefront_app::domain::products::data::parse_limit;

use crate::{
    envelope::Envelope, extensions::*, products::errors::into_status_error,
    products::models::ProductResponse,
};

/// Product Index Handler
///
/// Returns the products in stored order. A positive `limit` keeps only the
/// first `limit` products; any other value is ignored.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Products listed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
pub(crate) async fn handler(
    limit: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Envelope<Vec<ProductResponse>>>, StatusError> {
    let state = depot.state_or_500()?;
    let limit = limit.into_inner().as_deref().and_then(parse_limit);

    let products = state
        .products
        .list_products_limited(limit)
        .await
        .map_err(into_status_error)?;

    let message = match limit {
        Some(limit) => format!("Showing the first {limit} products"),
        None => "All products".to_owned(),
    };

    Ok(Json(
        Envelope::success(products.into_iter().map(Into::into).collect()).with_message(message),
    ))
}
