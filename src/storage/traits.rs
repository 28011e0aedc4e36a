use anyhow::Result;
use async_trait::async_trait;

/// Anything that can append rows to a named table
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Insert `rows` (a JSON object or array of objects) into `table`
    async fn insert(&self, table: &str, rows: serde_json::Value) -> Result<()>;
}
