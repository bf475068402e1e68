//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use storefront_app::domain::{
    carts::{
        MockCartsService,
        models::{Cart, CartId, LineItem},
    },
    products::{
        MockProductsService,
        models::{Product, ProductId},
    },
};

use crate::{envelope, state::State};

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_list_products_limited().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_list_carts().never();
    carts.expect_get_cart().never();
    carts.expect_create_cart().never();
    carts.expect_add_product().never();
    carts.expect_update_quantity().never();
    carts.expect_remove_product().never();
    carts.expect_clear_cart().never();
    carts.expect_delete_cart().never();

    carts
}

/// Serve `route` with both services mocked and errors rendered as envelopes.
pub(crate) fn make_service(
    products: MockProductsService,
    carts: MockCartsService,
    route: Router,
) -> Service {
    let state = Arc::new(State::new(Arc::new(products), Arc::new(carts)));

    Service::new(Router::new().hoop(inject(state)).push(route)).catcher(envelope::catcher())
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    make_service(products, strict_carts_mock(), route)
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    make_service(strict_products_mock(), carts, route)
}

pub(crate) fn make_product(id: u64) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        description: "A test product".to_owned(),
        price: 9.5,
        code: format!("P-{id}"),
        stock: 10,
        status: true,
        thumbnail: String::new(),
        category: None,
        category_name: None,
    }
}

pub(crate) fn make_cart(id: u64, products: Vec<LineItem>) -> Cart {
    Cart {
        id: CartId::new(id),
        products,
        timestamp: Timestamp::UNIX_EPOCH,
    }
}
