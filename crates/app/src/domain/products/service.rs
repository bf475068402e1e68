//! Products service.

use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    domain::products::{
        data::{NewProduct, ProductUpdate},
        errors::ProductsServiceError,
        models::{Product, ProductId},
    },
    numeric::NumericInput,
    storage::JsonCollection,
};

#[derive(Debug, Clone)]
pub struct JsonProductsService {
    collection: Arc<JsonCollection<Product>>,
}

impl JsonProductsService {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: Arc::new(JsonCollection::new(path)),
        }
    }
}

#[async_trait]
impl ProductsService for JsonProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        Ok(self.collection.read().await?)
    }

    async fn list_products_limited(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        let mut products = self.collection.read().await?;

        if let Some(limit) = limit {
            products.truncate(limit);
        }

        Ok(products)
    }

    async fn get_product(
        &self,
        product: ProductId,
    ) -> Result<Option<Product>, ProductsServiceError> {
        let products = self.collection.read().await?;

        Ok(products.into_iter().find(|existing| existing.id == product))
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        let created = self
            .collection
            .update::<_, ProductsServiceError, _>(move |products| {
                let id = ProductId::next_after(products.iter().map(|existing| existing.id));
                let product = build_product(id, product)?;

                if products.iter().any(|existing| existing.code == product.code) {
                    return Err(ProductsServiceError::AlreadyExists);
                }

                products.push(product.clone());

                Ok(product)
            })
            .await?;

        info!(product_id = %created.id, code = %created.code, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        let updated = self
            .collection
            .update::<_, ProductsServiceError, _>(move |products| {
                let position = products
                    .iter()
                    .position(|existing| existing.id == product)
                    .ok_or(ProductsServiceError::NotFound)?;

                if let Some(code) = update.code.as_deref()
                    && products
                        .iter()
                        .any(|existing| existing.code == code && existing.id != product)
                {
                    return Err(ProductsServiceError::AlreadyExists);
                }

                let existing = products
                    .get_mut(position)
                    .ok_or(ProductsServiceError::NotFound)?;

                apply_update(existing, update)?;

                Ok(existing.clone())
            })
            .await?;

        info!(product_id = %updated.id, "updated product");

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductId) -> Result<Product, ProductsServiceError> {
        let deleted = self
            .collection
            .update::<_, ProductsServiceError, _>(move |products| {
                let position = products
                    .iter()
                    .position(|existing| existing.id == product)
                    .ok_or(ProductsServiceError::NotFound)?;

                Ok(products.remove(position))
            })
            .await?;

        info!(product_id = %deleted.id, "deleted product");

        Ok(deleted)
    }
}

fn build_product(id: ProductId, product: NewProduct) -> Result<Product, ProductsServiceError> {
    let NewProduct {
        title,
        description,
        price,
        code,
        stock,
        status,
        thumbnail,
        category,
        category_name,
    } = product;

    let title = title.filter(|title| !title.is_empty());
    let description = description.filter(|description| !description.is_empty());
    let code = code.filter(|code| !code.is_empty());

    let missing: Vec<&'static str> = [
        ("title", title.is_none()),
        ("description", description.is_none()),
        ("price", price.is_none()),
        ("code", code.is_none()),
        ("stock", stock.is_none()),
    ]
    .into_iter()
    .filter_map(|(field, absent)| absent.then_some(field))
    .collect();

    let (Some(title), Some(description), Some(price), Some(code), Some(stock)) =
        (title, description, price, code, stock)
    else {
        return Err(ProductsServiceError::MissingRequiredData(missing));
    };

    Ok(Product {
        id,
        title,
        description,
        price: coerce_price(&price)?,
        code,
        stock: coerce_stock(&stock)?,
        status: status.unwrap_or(true),
        thumbnail: thumbnail.unwrap_or_default(),
        category,
        category_name,
    })
}

fn apply_update(product: &mut Product, update: ProductUpdate) -> Result<(), ProductsServiceError> {
    let price = update.price.as_ref().map(coerce_price).transpose()?;
    let stock = update.stock.as_ref().map(coerce_stock).transpose()?;

    for (field, value) in [
        ("title", &update.title),
        ("description", &update.description),
        ("code", &update.code),
    ] {
        if value.as_deref().is_some_and(str::is_empty) {
            return Err(ProductsServiceError::InvalidData(field));
        }
    }

    if let Some(title) = update.title {
        product.title = title;
    }

    if let Some(description) = update.description {
        product.description = description;
    }

    if let Some(price) = price {
        product.price = price;
    }

    if let Some(code) = update.code {
        product.code = code;
    }

    if let Some(stock) = stock {
        product.stock = stock;
    }

    if let Some(status) = update.status {
        product.status = status;
    }

    if let Some(thumbnail) = update.thumbnail {
        product.thumbnail = thumbnail;
    }

    if let Some(category) = update.category {
        product.category = Some(category);
    }

    if let Some(category_name) = update.category_name {
        product.category_name = Some(category_name);
    }

    Ok(())
}

fn coerce_price(price: &NumericInput) -> Result<f64, ProductsServiceError> {
    price
        .to_f64()
        .filter(|price| *price >= 0.0)
        .ok_or(ProductsServiceError::InvalidData("price"))
}

fn coerce_stock(stock: &NumericInput) -> Result<u64, ProductsServiceError> {
    stock
        .to_i64()
        .and_then(|stock| u64::try_from(stock).ok())
        .ok_or(ProductsServiceError::InvalidData("stock"))
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, in stored order.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieves the first `limit` products, or all of them when `limit` is `None`.
    async fn list_products_limited(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product. `None` when no product has the id.
    async fn get_product(
        &self,
        product: ProductId,
    ) -> Result<Option<Product>, ProductsServiceError>;

    /// Validates and stores a new product under the next free id.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Replaces the fields present in `update`.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Deletes a product, returning the removed record.
    async fn delete_product(&self, product: ProductId) -> Result<Product, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{storage::StorageError, test::TestContext};

    use super::*;

    fn new_product(code: &str) -> NewProduct {
        NewProduct {
            title: Some("T".to_string()),
            description: Some("D".to_string()),
            price: Some(NumericInput::Integer(10)),
            code: Some(code.to_string()),
            stock: Some(NumericInput::Integer(5)),
            ..NewProduct::default()
        }
    }

    #[tokio::test]
    async fn create_product_into_empty_store_gets_id_one() -> TestResult {
        let ctx = TestContext::new()?;

        let product = ctx.products.create_product(new_product("C1")).await?;

        assert_eq!(product.id, ProductId::new(1));
        assert!(product.status);
        assert_eq!(product.thumbnail, "");
        assert_eq!(product.stock, 5);
        assert!((product.price - 10.0).abs() < f64::EPSILON);

        Ok(())
    }

    #[tokio::test]
    async fn create_product_duplicate_code_returns_already_exists() -> TestResult {
        let ctx = TestContext::new()?;

        ctx.products.create_product(new_product("C1")).await?;

        let result = ctx.products.create_product(new_product("C1")).await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );
        assert_eq!(ctx.products.list_products().await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn create_product_missing_fields_are_reported() -> TestResult {
        let ctx = TestContext::new()?;

        let result = ctx
            .products
            .create_product(NewProduct {
                title: Some(String::new()),
                description: Some("D".to_string()),
                price: Some(NumericInput::Integer(0)),
                ..NewProduct::default()
            })
            .await;

        match result {
            Err(ProductsServiceError::MissingRequiredData(fields)) => {
                assert_eq!(fields, vec!["title", "code", "stock"]);
            }
            other => return Err(format!("expected MissingRequiredData, got {other:?}").into()),
        }

        assert!(ctx.products.list_products().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn create_product_coerces_numeric_strings() -> TestResult {
        let ctx = TestContext::new()?;

        let product = ctx
            .products
            .create_product(NewProduct {
                price: Some("12.5".into()),
                stock: Some("7.9".into()),
                status: Some(false),
                thumbnail: Some("img/c1.png".to_string()),
                category: Some("baby".to_string()),
                ..new_product("C1")
            })
            .await?;

        assert!((product.price - 12.5).abs() < f64::EPSILON);
        assert_eq!(product.stock, 7);
        assert!(!product.status);
        assert_eq!(product.thumbnail, "img/c1.png");
        assert_eq!(product.category.as_deref(), Some("baby"));

        Ok(())
    }

    #[tokio::test]
    async fn create_product_rejects_negative_stock() -> TestResult {
        let ctx = TestContext::new()?;

        let result = ctx
            .products
            .create_product(NewProduct {
                stock: Some(NumericInput::Integer(-1)),
                ..new_product("C1")
            })
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidData("stock"))),
            "expected InvalidData(stock), got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn ids_follow_the_highest_existing_id() -> TestResult {
        let ctx = TestContext::new()?;

        let first = ctx.products.create_product(new_product("A")).await?;
        let second = ctx.products.create_product(new_product("B")).await?;

        ctx.products.delete_product(first.id).await?;

        let third = ctx.products.create_product(new_product("C")).await?;

        assert_eq!(second.id, ProductId::new(2));
        assert_eq!(third.id, ProductId::new(3));

        Ok(())
    }

    #[tokio::test]
    async fn deleting_the_highest_id_frees_it_for_the_next_product() -> TestResult {
        let ctx = TestContext::new()?;

        ctx.products.create_product(new_product("A")).await?;
        let second = ctx.products.create_product(new_product("B")).await?;

        ctx.products.delete_product(second.id).await?;

        let third = ctx.products.create_product(new_product("C")).await?;

        assert_eq!(third.id, second.id);
        assert_eq!(ctx.products.list_products().await?.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_id_returns_none() -> TestResult {
        let ctx = TestContext::new()?;

        ctx.products.create_product(new_product("C1")).await?;

        assert!(ctx.products.get_product(ProductId::new(42)).await?.is_none());
        assert!(ctx.products.get_product(ProductId::new(1)).await?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn list_products_limited_truncates() -> TestResult {
        let ctx = TestContext::new()?;

        for code in ["A", "B", "C"] {
            ctx.products.create_product(new_product(code)).await?;
        }

        let limited = ctx.products.list_products_limited(Some(2)).await?;
        let unlimited = ctx.products.list_products_limited(None).await?;
        let oversized = ctx.products.list_products_limited(Some(10)).await?;

        assert_eq!(
            limited.iter().map(|p| p.code.as_str()).collect::<Vec<_>>(),
            vec!["A", "B"]
        );
        assert_eq!(unlimited.len(), 3);
        assert_eq!(oversized.len(), 3);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_merges_fields() -> TestResult {
        let ctx = TestContext::new()?;

        let created = ctx.products.create_product(new_product("C1")).await?;

        let updated = ctx
            .products
            .update_product(
                created.id,
                ProductUpdate {
                    title: Some("New title".to_string()),
                    stock: Some("3".into()),
                    ..ProductUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "New title");
        assert_eq!(updated.description, "D");
        assert_eq!(updated.stock, 3);
        assert_eq!(ctx.products.get_product(created.id).await?, Some(updated));

        Ok(())
    }

    #[tokio::test]
    async fn update_product_to_taken_code_returns_already_exists() -> TestResult {
        let ctx = TestContext::new()?;

        ctx.products.create_product(new_product("A")).await?;
        let second = ctx.products.create_product(new_product("B")).await?;

        let result = ctx
            .products
            .update_product(
                second.id,
                ProductUpdate {
                    code: Some("A".to_string()),
                    ..ProductUpdate::default()
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        let own_code = ctx
            .products
            .update_product(
                second.id,
                ProductUpdate {
                    code: Some("B".to_string()),
                    ..ProductUpdate::default()
                },
            )
            .await?;

        assert_eq!(own_code.code, "B");

        Ok(())
    }

    #[tokio::test]
    async fn update_product_rejects_empty_text_fields() -> TestResult {
        let ctx = TestContext::new()?;

        let created = ctx.products.create_product(new_product("C1")).await?;

        let title = ctx
            .products
            .update_product(
                created.id,
                ProductUpdate {
                    title: Some(String::new()),
                    ..ProductUpdate::default()
                },
            )
            .await;

        assert!(
            matches!(title, Err(ProductsServiceError::InvalidData("title"))),
            "expected InvalidData(title), got {title:?}"
        );

        let description = ctx
            .products
            .update_product(
                created.id,
                ProductUpdate {
                    description: Some(String::new()),
                    stock: Some(NumericInput::Integer(1)),
                    ..ProductUpdate::default()
                },
            )
            .await;

        assert!(
            matches!(
                description,
                Err(ProductsServiceError::InvalidData("description"))
            ),
            "expected InvalidData(description), got {description:?}"
        );

        assert_eq!(ctx.products.get_product(created.id).await?, Some(created));

        Ok(())
    }

    #[tokio::test]
    async fn update_product_unknown_id_returns_not_found() -> TestResult {
        let ctx = TestContext::new()?;

        let result = ctx
            .products
            .update_product(ProductId::new(9), ProductUpdate::default())
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_returns_removed_record() -> TestResult {
        let ctx = TestContext::new()?;

        let created = ctx.products.create_product(new_product("C1")).await?;
        let deleted = ctx.products.delete_product(created.id).await?;

        assert_eq!(deleted, created);
        assert!(ctx.products.list_products().await?.is_empty());

        let again = ctx.products.delete_product(created.id).await;

        assert!(
            matches!(again, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {again:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn products_round_trip_through_the_file() -> TestResult {
        let ctx = TestContext::new()?;

        let created = ctx
            .products
            .create_product(NewProduct {
                category_name: Some("Baby Clothes".to_string()),
                ..new_product("C1")
            })
            .await?;

        let reopened = JsonProductsService::new(ctx.products_path());

        assert_eq!(reopened.list_products().await?, vec![created]);

        let raw = std::fs::read_to_string(ctx.products_path())?;

        assert!(raw.contains("\"categoryName\": \"Baby Clothes\""));

        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_surfaces_storage_error() -> TestResult {
        let ctx = TestContext::new()?;

        std::fs::write(ctx.products_path(), "not json")?;

        let result = ctx.products.list_products().await;

        assert!(
            matches!(
                result,
                Err(ProductsServiceError::Storage(StorageError::Corrupt { .. }))
            ),
            "expected a corrupt storage error, got {result:?}"
        );

        Ok(())
    }
}
