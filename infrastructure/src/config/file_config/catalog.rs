//! Catalog configuration from TOML (`[catalog]` section)
//!
//! ```toml
//! [catalog]
//! path = "tools.json"
//! page_size = 50
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default number of tools per catalog page
pub const DEFAULT_PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// JSON file holding the tool list
    pub path: Option<PathBuf>,
    /// Tools per page served by the file catalog
    pub page_size: usize,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
