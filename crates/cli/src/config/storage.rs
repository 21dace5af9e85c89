//! Cart Storage Config

use std::path::PathBuf;

use clap::Args;
use storefront_app::storage::FileStorage;

/// Where the cart is kept between runs.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Directory holding the persisted cart
    #[arg(long, env = "STOREFRONT_DATA_DIR", default_value = ".storefront", global = true)]
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.data_dir.clone())
    }
}
