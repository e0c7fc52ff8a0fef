//! File-backed tool catalog.
//!
//! [`JsonFileToolCatalog`] reads an MCP tool list from disk on every page
//! request, so edits to the file show up on the next `list_tools`. Cursors
//! are decimal offsets into the list.

use super::schema::McpToolConverter;
use async_trait::async_trait;
use inspector_application::{CatalogError, ToolCatalogPort, ToolPage};
use inspector_domain::ToolDescriptor;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct JsonFileToolCatalog {
    path: PathBuf,
    page_size: usize,
    converter: McpToolConverter,
}

impl JsonFileToolCatalog {
    pub fn new(path: impl Into<PathBuf>, page_size: usize) -> Self {
        Self {
            path: path.into(),
            page_size: page_size.max(1),
            converter: McpToolConverter,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<ToolDescriptor>, CatalogError> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CatalogError::Unavailable(format!("{}: {}", self.path.display(), e))
        })?;
        let value: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
            CatalogError::Unavailable(format!("{}: invalid JSON: {}", self.path.display(), e))
        })?;
        let entries = self
            .converter
            .parse_tool_list(&value)
            .map_err(|e| CatalogError::Unavailable(format!("{}: {}", self.path.display(), e)))?;

        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                self.converter
                    .parse_tool(entry)
                    .map_err(|e| CatalogError::Malformed {
                        index,
                        reason: e.to_string(),
                    })
            })
            .collect()
    }
}

#[async_trait]
impl ToolCatalogPort for JsonFileToolCatalog {
    async fn list_tools(&self, cursor: Option<&str>) -> Result<ToolPage, CatalogError> {
        let tools = self.read_all().await?;
        let page = paginate(tools, cursor, self.page_size)?;
        debug!(
            "Served {} tools from {} (next cursor: {:?})",
            page.tools.len(),
            self.path.display(),
            page.next_cursor
        );
        Ok(page)
    }
}

/// In-memory catalog, used when tools are supplied programmatically.
pub struct StaticToolCatalog {
    tools: Vec<ToolDescriptor>,
    page_size: usize,
}

impl StaticToolCatalog {
    pub fn new(tools: Vec<ToolDescriptor>, page_size: usize) -> Self {
        Self {
            tools,
            page_size: page_size.max(1),
        }
    }
}

#[async_trait]
impl ToolCatalogPort for StaticToolCatalog {
    async fn list_tools(&self, cursor: Option<&str>) -> Result<ToolPage, CatalogError> {
        paginate(self.tools.clone(), cursor, self.page_size)
    }
}

fn paginate(
    tools: Vec<ToolDescriptor>,
    cursor: Option<&str>,
    page_size: usize,
) -> Result<ToolPage, CatalogError> {
    let start = match cursor {
        None => 0,
        Some(c) => c
            .parse::<usize>()
            .ok()
            .filter(|&offset| offset <= tools.len())
            .ok_or_else(|| CatalogError::InvalidCursor(c.to_string()))?,
    };
    let end = start.saturating_add(page_size).min(tools.len());
    let next_cursor = (end < tools.len()).then(|| end.to_string());
    let tools = tools.into_iter().skip(start).take(end - start).collect();
    Ok(ToolPage { tools, next_cursor })
}

#[cfg(test)]
mod tests {
    use super::*;
    use inspector_domain::SchemaType;

    const TOOLS_JSON: &str = r#"{
        "tools": [
            { "name": "tool1", "description": "First tool",
              "inputSchema": { "type": "object", "properties": { "num": { "type": "number" } } } },
            { "name": "tool3", "description": "Integer tool",
              "inputSchema": { "type": "object", "properties": { "count": { "type": "integer" } } } },
            { "name": "tool2", "description": "Second tool",
              "inputSchema": { "type": "object", "properties": { "num": { "type": "number" } } } }
        ]
    }"#;

    fn write_tools(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tools.json");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[tokio::test]
    async fn test_reads_all_tools_in_one_page() {
        let (_dir, path) = write_tools(TOOLS_JSON);
        let catalog = JsonFileToolCatalog::new(&path, 50);

        let page = catalog.list_tools(None).await.unwrap();
        assert!(page.next_cursor.is_none());
        let names: Vec<&str> = page.tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["tool1", "tool3", "tool2"]);
        assert_eq!(
            page.tools[1].parameter("count").unwrap().declared_type,
            SchemaType::Integer
        );
    }

    #[tokio::test]
    async fn test_pagination() {
        let (_dir, path) = write_tools(TOOLS_JSON);
        let catalog = JsonFileToolCatalog::new(&path, 2);

        let first = catalog.list_tools(None).await.unwrap();
        assert_eq!(first.tools.len(), 2);
        assert_eq!(first.next_cursor.as_deref(), Some("2"));

        let second = catalog.list_tools(Some("2")).await.unwrap();
        assert_eq!(second.tools.len(), 1);
        assert_eq!(second.tools[0].name, "tool2");
        assert!(second.next_cursor.is_none());
    }

    #[tokio::test]
    async fn test_invalid_cursor() {
        let (_dir, path) = write_tools(TOOLS_JSON);
        let catalog = JsonFileToolCatalog::new(&path, 2);

        assert!(matches!(
            catalog.list_tools(Some("abc")).await,
            Err(CatalogError::InvalidCursor(_))
        ));
        assert!(matches!(
            catalog.list_tools(Some("99")).await,
            Err(CatalogError::InvalidCursor(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let catalog = JsonFileToolCatalog::new("/nonexistent/tools.json", 10);
        assert!(matches!(
            catalog.list_tools(None).await,
            Err(CatalogError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_malformed_entry_reports_index() {
        let (_dir, path) = write_tools(r#"[{ "name": "ok" }, { "description": "no name" }]"#);
        let catalog = JsonFileToolCatalog::new(&path, 10);

        match catalog.list_tools(None).await {
            Err(CatalogError::Malformed { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected malformed entry error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_static_catalog_pages() {
        let tools = (0..5)
            .map(|i| ToolDescriptor::new(format!("t{i}"), ""))
            .collect();
        let catalog = StaticToolCatalog::new(tools, 2);

        let page = catalog.list_tools(Some("4")).await.unwrap();
        assert_eq!(page.tools.len(), 1);
        assert!(page.next_cursor.is_none());
    }
}
