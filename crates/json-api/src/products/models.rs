//! Product response models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::domain::products::models::Product;

/// Product Response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// Product id
    pub id: u64,

    /// Title
    pub title: String,

    /// Description
    pub description: String,

    /// Unit price
    pub price: f64,

    /// Unique product code
    pub code: String,

    /// Units in stock
    pub stock: u64,

    /// Whether the product is active
    pub status: bool,

    /// Thumbnail path or URL
    pub thumbnail: String,

    /// Category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Category display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.into_inner(),
            title: product.title,
            description: product.description,
            price: product.price,
            code: product.code,
            stock: product.stock,
            status: product.status,
            thumbnail: product.thumbnail,
            category: product.category,
            category_name: product.category_name,
        }
    }
}
