//! Cart Line Items

mod handlers;
mod quantity;

pub(crate) use handlers::*;
