//! Cart response models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::domain::carts::models::{Cart, LineItem, RemovedLineItem};

/// Cart Response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Cart id
    pub id: u64,

    /// Line items in insertion order
    pub products: Vec<LineItemResponse>,

    /// Last modification time (RFC 3339)
    pub timestamp: String,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id.into_inner(),
            products: cart.products.into_iter().map(Into::into).collect(),
            timestamp: cart.timestamp.to_string(),
        }
    }
}

/// Line Item Response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct LineItemResponse {
    /// Product id
    pub product: u64,

    /// Units of the product in the cart
    pub quantity: u64,
}

impl From<LineItem> for LineItemResponse {
    fn from(item: LineItem) -> Self {
        Self {
            product: item.product.into_inner(),
            quantity: item.quantity,
        }
    }
}

/// Removed Line Item Response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct RemovedLineItemResponse {
    /// The cart after removal
    pub cart: CartResponse,

    /// The line item that was removed
    pub removed: LineItemResponse,
}

impl From<RemovedLineItem> for RemovedLineItemResponse {
    fn from(removed: RemovedLineItem) -> Self {
        Self {
            cart: removed.cart.into(),
            removed: removed.removed.into(),
        }
    }
}
