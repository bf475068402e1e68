//! State

use std::sync::Arc;

use storefront_app::{
    context::AppContext,
    domain::{carts::CartsService, products::ProductsService},
};

/// Services shared by every handler through the depot.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) products: Arc<dyn ProductsService>,
    pub(crate) carts: Arc<dyn CartsService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(products: Arc<dyn ProductsService>, carts: Arc<dyn CartsService>) -> Self {
        Self { products, carts }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app.products, app.carts))
    }
}
