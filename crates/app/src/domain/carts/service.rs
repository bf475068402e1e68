//! Carts service.

use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::info;

use crate::{
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{Cart, CartId, LineItem, RemovedLineItem},
        },
        products::models::ProductId,
    },
    storage::JsonCollection,
};

#[derive(Debug, Clone)]
pub struct JsonCartsService {
    collection: Arc<JsonCollection<Cart>>,
}

impl JsonCartsService {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: Arc::new(JsonCollection::new(path)),
        }
    }
}

#[async_trait]
impl CartsService for JsonCartsService {
    async fn list_carts(&self) -> Result<Vec<Cart>, CartsServiceError> {
        Ok(self.collection.read().await?)
    }

    async fn get_cart(&self, cart: CartId) -> Result<Option<Cart>, CartsServiceError> {
        let carts = self.collection.read().await?;

        Ok(carts.into_iter().find(|existing| existing.id == cart))
    }

    async fn create_cart(&self) -> Result<Cart, CartsServiceError> {
        let created = self
            .collection
            .update::<_, CartsServiceError, _>(|carts| {
                let cart = Cart {
                    id: CartId::next_after(carts.iter().map(|existing| existing.id)),
                    products: Vec::new(),
                    timestamp: Timestamp::now(),
                };

                carts.push(cart.clone());

                Ok(cart)
            })
            .await?;

        info!(cart_id = %created.id, "created cart");

        Ok(created)
    }

    async fn add_product(
        &self,
        cart: CartId,
        product: ProductId,
        quantity: i64,
    ) -> Result<Cart, CartsServiceError> {
        let updated = self
            .collection
            .update::<_, CartsServiceError, _>(move |carts| {
                let cart = find_cart(carts, cart)?;

                let quantity = u64::try_from(quantity)
                    .ok()
                    .filter(|quantity| *quantity > 0)
                    .ok_or(CartsServiceError::InvalidQuantity)?;

                match cart
                    .products
                    .iter_mut()
                    .find(|item| item.product == product)
                {
                    Some(item) => {
                        item.quantity = item
                            .quantity
                            .checked_add(quantity)
                            .ok_or(CartsServiceError::InvalidQuantity)?;
                    }
                    None => cart.products.push(LineItem { product, quantity }),
                }

                cart.touch();

                Ok(cart.clone())
            })
            .await?;

        info!(cart_id = %cart, product_id = %product, quantity, "added product to cart");

        Ok(updated)
    }

    async fn update_quantity(
        &self,
        cart: CartId,
        product: ProductId,
        quantity: i64,
    ) -> Result<Cart, CartsServiceError> {
        let updated = self
            .collection
            .update::<_, CartsServiceError, _>(move |carts| {
                let cart = find_cart(carts, cart)?;

                let position = cart
                    .line_item_position(product)
                    .ok_or(CartsServiceError::ItemNotFound)?;

                match u64::try_from(quantity).ok().filter(|quantity| *quantity > 0) {
                    Some(quantity) => {
                        let item = cart
                            .products
                            .get_mut(position)
                            .ok_or(CartsServiceError::ItemNotFound)?;

                        item.quantity = quantity;
                    }
                    None => {
                        cart.products.remove(position);
                    }
                }

                cart.touch();

                Ok(cart.clone())
            })
            .await?;

        info!(cart_id = %cart, product_id = %product, quantity, "updated cart quantity");

        Ok(updated)
    }

    async fn remove_product(
        &self,
        cart: CartId,
        product: ProductId,
    ) -> Result<RemovedLineItem, CartsServiceError> {
        let removed = self
            .collection
            .update::<_, CartsServiceError, _>(move |carts| {
                let cart = find_cart(carts, cart)?;

                let position = cart
                    .line_item_position(product)
                    .ok_or(CartsServiceError::ItemNotFound)?;

                let removed = cart.products.remove(position);

                cart.touch();

                Ok(RemovedLineItem {
                    cart: cart.clone(),
                    removed,
                })
            })
            .await?;

        info!(cart_id = %cart, product_id = %product, "removed product from cart");

        Ok(removed)
    }

    async fn clear_cart(&self, cart: CartId) -> Result<Cart, CartsServiceError> {
        let cleared = self
            .collection
            .update::<_, CartsServiceError, _>(move |carts| {
                let cart = find_cart(carts, cart)?;

                cart.products.clear();
                cart.touch();

                Ok(cart.clone())
            })
            .await?;

        info!(cart_id = %cart, "cleared cart");

        Ok(cleared)
    }

    async fn delete_cart(&self, cart: CartId) -> Result<Cart, CartsServiceError> {
        let deleted = self
            .collection
            .update::<_, CartsServiceError, _>(move |carts| {
                let position = carts
                    .iter()
                    .position(|existing| existing.id == cart)
                    .ok_or(CartsServiceError::NotFound)?;

                Ok(carts.remove(position))
            })
            .await?;

        info!(cart_id = %cart, "deleted cart");

        Ok(deleted)
    }
}

fn find_cart(carts: &mut [Cart], cart: CartId) -> Result<&mut Cart, CartsServiceError> {
    carts
        .iter_mut()
        .find(|existing| existing.id == cart)
        .ok_or(CartsServiceError::NotFound)
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieves all carts, in stored order.
    async fn list_carts(&self) -> Result<Vec<Cart>, CartsServiceError>;

    /// Retrieve a single cart. `None` when no cart has the id.
    async fn get_cart(&self, cart: CartId) -> Result<Option<Cart>, CartsServiceError>;

    /// Creates an empty cart under the next free id.
    async fn create_cart(&self) -> Result<Cart, CartsServiceError>;

    /// Adds `quantity` of a product, merging into an existing line item.
    ///
    /// The product id is not checked against the products store.
    async fn add_product(
        &self,
        cart: CartId,
        product: ProductId,
        quantity: i64,
    ) -> Result<Cart, CartsServiceError>;

    /// Sets a line item's quantity; zero or less removes the line item.
    async fn update_quantity(
        &self,
        cart: CartId,
        product: ProductId,
        quantity: i64,
    ) -> Result<Cart, CartsServiceError>;

    /// Removes a line item.
    async fn remove_product(
        &self,
        cart: CartId,
        product: ProductId,
    ) -> Result<RemovedLineItem, CartsServiceError>;

    /// Removes every line item, keeping the cart.
    async fn clear_cart(&self, cart: CartId) -> Result<Cart, CartsServiceError>;

    /// Deletes a cart, returning the removed record.
    async fn delete_cart(&self, cart: CartId) -> Result<Cart, CartsServiceError>;
}
