//! Storefront domain: product and cart stores persisted as JSON files.

pub mod context;
pub mod domain;
pub mod ids;
pub mod numeric;
pub mod storage;

#[cfg(test)]
mod test;
