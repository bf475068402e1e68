//! Remove Cart Product Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::{carts::models::CartId, products::models::ProductId};

use crate::{
    carts::{errors::into_status_error, models::RemovedLineItemResponse},
    envelope::Envelope,
    extensions::*,
};

/// Remove Cart Product Handler
///
/// Removes a line item and returns the updated cart with the removed item.
#[endpoint(
    tags("carts"),
    summary = "Remove Product From Cart",
    responses(
        (status_code = StatusCode::OK, description = "Line item removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or line item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
pub(crate) async fn handler(
    cart: PathParam<u64>,
    product: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<Envelope<RemovedLineItemResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let removed = state
        .carts
        .remove_product(
            CartId::new(cart.into_inner()),
            ProductId::new(product.into_inner()),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(
        Envelope::success(removed.into()).with_message("Product removed from cart"),
    ))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::carts::{
        CartsServiceError, MockCartsService,
        models::{LineItem, RemovedLineItem},
    };

    use crate::{
        carts::models::LineItemResponse,
        test_helpers::{carts_service, make_cart},
    };

    use super::*;

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(
            repo,
            Router::with_path("carts/{cart}/product/{product}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_remove_product_returns_cart_and_item() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_remove_product()
            .once()
            .withf(|cart, product| *cart == CartId::new(1) && *product == ProductId::new(7))
            .return_once(|_, _| {
                Ok(RemovedLineItem {
                    cart: make_cart(1, Vec::new()),
                    removed: LineItem {
                        product: ProductId::new(7),
                        quantity: 2,
                    },
                })
            });

        let mut res = TestClient::delete("http://example.com/carts/1/product/7")
            .send(&make_service(repo))
            .await;

        let body: Envelope<RemovedLineItemResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.data.cart.products.is_empty());
        assert_eq!(
            body.data.removed,
            LineItemResponse {
                product: 7,
                quantity: 2
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_missing_item_returns_404() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_remove_product()
            .once()
            .return_once(|_, _| Err(CartsServiceError::ItemNotFound));

        let res = TestClient::delete("http://example.com/carts/1/product/7")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
