//! Create Product Handler

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::{domain::products::data::NewProduct, numeric::NumericInput};

use crate::{
    envelope::Envelope,
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
};

/// Create Product Request
///
/// Required fields are checked by the store so that every missing field is
/// reported at once. `price` and `stock` also accept numeric strings.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateProductRequest {
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

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
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

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid payload or duplicate code"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<Envelope<ProductResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let product = state
        .products
        .create_product(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/products/{}", product.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(
        Envelope::success(product.into()).with_message("Product created"),
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
        products_service(repo, Router::with_path("products").post(handler))
    }

    fn expected_new_product() -> NewProduct {
        NewProduct {
            title: Some("T".to_owned()),
            description: Some("D".to_owned()),
            price: Some(NumericInput::Text("10.5".to_owned())),
            code: Some("C1".to_owned()),
            stock: Some(NumericInput::Integer(5)),
            ..NewProduct::default()
        }
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|new| *new == expected_new_product())
            .return_once(|_| Ok(make_product(1)));

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({
                "title": "T",
                "description": "D",
                "price": "10.5",
                "code": "C1",
                "stock": 5
            }))
            .send(&make_service(repo))
            .await;

        let body: Envelope<ProductResponse> = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/api/products/1"));
        assert_eq!(body.data.id, 1);
        assert_eq!(body.message.as_deref(), Some("Product created"));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_duplicate_code_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::AlreadyExists));

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({
                "title": "T",
                "description": "D",
                "price": "10.5",
                "code": "C1",
                "stock": 5
            }))
            .send(&make_service(repo))
            .await;

        let body: ErrorEnvelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "Product code already exists");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_missing_fields_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|new| new.title.is_none())
            .return_once(|_| {
                Err(ProductsServiceError::MissingRequiredData(vec![
                    "title",
                    "description",
                    "price",
                    "code",
                    "stock",
                ]))
            });

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({}))
            .send(&make_service(repo))
            .await;

        let body: ErrorEnvelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body.error.as_deref(),
            Some("missing required fields: title, description, price, code, stock")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_malformed_body_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();

        let res = TestClient::post("http://example.com/products")
            .raw_json("{ not json")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
