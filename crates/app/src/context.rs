//! App Context

use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use thiserror::Error;
use tokio::fs;

use crate::domain::{
    carts::{CartsService, JsonCartsService},
    products::{JsonProductsService, ProductsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to prepare data directory {}", path.display())]
    DataDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
}

impl AppContext {
    /// Build application context from the collection file locations.
    ///
    /// Missing parent directories are created; the files themselves are created on first write.
    ///
    /// # Errors
    ///
    /// Returns an error when a data directory cannot be created.
    pub async fn from_data_files(
        products: impl Into<PathBuf>,
        carts: impl Into<PathBuf>,
    ) -> Result<Self, AppInitError> {
        let products = products.into();
        let carts = carts.into();

        ensure_parent_dir(&products).await?;
        ensure_parent_dir(&carts).await?;

        Ok(Self {
            products: Arc::new(JsonProductsService::new(products)),
            carts: Arc::new(JsonCartsService::new(carts)),
        })
    }
}

async fn ensure_parent_dir(file: &Path) -> Result<(), AppInitError> {
    let Some(parent) = file.parent().filter(|dir| !dir.as_os_str().is_empty()) else {
        return Ok(());
    };

    fs::create_dir_all(parent)
        .await
        .map_err(|source| AppInitError::DataDirectory {
            path: parent.to_path_buf(),
            source,
        })
}
