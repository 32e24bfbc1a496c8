use async_trait::async_trait;
use serde_json::Value;

use crate::domain::entities::NeoBrowsePage;
use crate::domain::errors::CatalogError;

// The handlers depend on this trait, not the concrete client implementation.
// Dependencies point inwards to the domain layer.
#[async_trait]
pub trait NeoCatalog: Send + Sync {
    // Fetch one browse page of catalog entries.
    async fn browse(&self) -> Result<NeoBrowsePage, CatalogError>;

    // Fetch the full upstream record for one asteroid id, unmodified.
    async fn lookup(&self, neo_id: &str) -> Result<Value, CatalogError>;
}
