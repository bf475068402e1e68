//! Cart Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{domain::products::models::ProductId, ids::TypedId};

/// Cart Id
pub type CartId = TypedId<Cart>;

/// Cart Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: CartId,
    pub products: Vec<LineItem>,
    /// Last modification time.
    pub timestamp: Timestamp,
}

impl Cart {
    pub(crate) fn line_item_position(&self, product: ProductId) -> Option<usize> {
        self.products
            .iter()
            .position(|item| item.product == product)
    }

    pub(crate) fn touch(&mut self) {
        self.timestamp = Timestamp::now();
    }
}

/// Line Item Model
///
/// A cart holds at most one line item per product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: ProductId,
    pub quantity: u64,
}

/// A cart after one of its line items was removed, together with that item.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedLineItem {
    pub cart: Cart,
    pub removed: LineItem,
}
