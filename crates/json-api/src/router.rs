//! API Router

use salvo::Router;

use crate::{carts, products};

/// Routes under `/api`.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("carts")
                .get(carts::index::handler)
                .post(carts::create::handler)
                .push(
                    Router::with_path("{cart}")
                        .get(carts::get::handler)
                        .delete(carts::clear::handler)
                        .push(Router::with_path("delete").delete(carts::delete::handler))
                        .push(
                            Router::with_path("product/{product}")
                                .post(carts::items::add::handler)
                                .put(carts::items::update::handler)
                                .delete(carts::items::remove::handler),
                        ),
                ),
        )
}
