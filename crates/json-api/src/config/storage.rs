//! Storage Config

use std::path::PathBuf;

use clap::Args;

/// Locations of the JSON collection files.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Products collection file
    #[arg(long, env = "PRODUCTS_FILE", default_value = "data/products.json")]
    pub products_file: PathBuf,

    /// Carts collection file
    #[arg(long, env = "CARTS_FILE", default_value = "data/carts.json")]
    pub carts_file: PathBuf,
}
