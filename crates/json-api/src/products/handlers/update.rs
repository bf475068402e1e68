//! Update Product Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::{
    domain::products::{data::ProductUpdate, models::ProductId},
    numeric::NumericInput,
};

use crate::{
    envelope::Envelope,
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
};

/// Update Product Request
///
/// Only the fields present are changed. An `id` in the body is ignored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateProductRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[salvo(schema(value_type = Option<f64>))]
    pub price: Option<NumericInput>,
    pub code: Option<String>,
    #[salvo(schema(value_type = Option<u64>))]
    pub stock: Option<NumericInput>,
    pub status: Option<bool>,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub category_name: Option<String>,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            title: request.title,
            description: request.description,
            price: request.price,
            code: request.code,
            stock: request.stock,
            status: request.status,
            thumbnail: request.thumbnail,
            category: request.category,
            category_name: request.category_name,
        }
    }
}

/// Update Product Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid payload or duplicate code"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<u64>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<Envelope<ProductResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let product = state
        .products
        .update_product(
            ProductId::new(product.into_inner()),
            json.into_inner().into(),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(
        Envelope::success(product.into()).with_message("Product updated"),
    ))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::{
        envelope::ErrorEnvelope,
        test_helpers::{make_product, products_service},
    };

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products/{product}").put(handler))
    }

    #[tokio::test]
    async fn test_update_product_ignores_body_id() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .withf(|id, update| {
                *id == ProductId::new(2)
                    && *update
                        == ProductUpdate {
                            stock: Some(NumericInput::Integer(0)),
                            ..ProductUpdate::default()
                        }
            })
            .return_once(|_, _| {
                let mut product = make_product(2);
                product.stock = 0;
                Ok(product)
            });

        let mut res = TestClient::put("http://example.com/products/2")
            .json(&json!({ "id": 99, "stock": 0 }))
            .send(&make_service(repo))
            .await;

        let body: Envelope<ProductResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.data.id, 2);
        assert_eq!(body.data.stock, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_not_found_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let mut res = TestClient::put("http://example.com/products/5")
            .json(&json!({ "title": "New" }))
            .send(&make_service(repo))
            .await;

        let body: ErrorEnvelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "Product not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_taken_code_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::AlreadyExists));

        let res = TestClient::put("http://example.com/products/5")
            .json(&json!({ "code": "TAKEN" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
