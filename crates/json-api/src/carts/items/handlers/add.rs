//! Add Cart Product Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::{carts::models::CartId, products::models::ProductId};

use crate::{
    carts::{errors::into_status_error, items::quantity::optional_quantity, models::CartResponse},
    envelope::Envelope,
    extensions::*,
    products,
};

/// Add Cart Product Handler
///
/// Adds a product to a cart, merging with an existing line item. The body
/// `{"quantity": n}` is optional and defaults to one unit.
#[endpoint(
    tags("carts"),
    summary = "Add Product To Cart",
    responses(
        (status_code = StatusCode::OK, description = "Product added"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid quantity"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
pub(crate) async fn handler(
    cart: PathParam<u64>,
    product: PathParam<u64>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Envelope<CartResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let quantity = optional_quantity(req.payload().await.or_400("Invalid request body")?)?;
    let product = ProductId::new(product.into_inner());

    state
        .products
        .get_product(product)
        .await
        .map_err(products::errors::into_status_error)?
        .ok_or_else(|| StatusError::not_found().brief("Product not found"))?;

    let cart = state
        .carts
        .add_product(CartId::new(cart.into_inner()), product, quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(
        Envelope::success(cart.into()).with_message("Product added to cart"),
    ))
}
