//! Tool catalog port
//!
//! Defines how the application layer obtains the tools it can offer.
//! Catalogs are paginated: each page carries an opaque cursor for the next.

use async_trait::async_trait;
use inspector_domain::ToolDescriptor;
use thiserror::Error;

/// Errors reported by a tool catalog
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Tool catalog unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid catalog cursor: {0}")]
    InvalidCursor(String),

    #[error("Malformed tool entry at index {index}: {reason}")]
    Malformed { index: usize, reason: String },
}

/// One page of tools
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolPage {
    pub tools: Vec<ToolDescriptor>,
    /// Cursor for the next page, `None` on the last page
    pub next_cursor: Option<String>,
}

/// Port for listing available tools.
///
/// Implementations (adapters) live in the infrastructure layer. The catalog
/// is read-only from the application's point of view.
#[async_trait]
pub trait ToolCatalogPort: Send + Sync {
    /// Fetch the page starting at `cursor` (`None` for the first page)
    async fn list_tools(&self, cursor: Option<&str>) -> Result<ToolPage, CatalogError>;
}
