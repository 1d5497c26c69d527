use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

/// Errors surfaced by the document store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document not found")]
    NotFound,

    #[error("store is closed")]
    Closed,

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Minimal interface to the external document database.
///
/// Documents are JSON objects; the store assigns each one a `Uuid` on
/// insertion and keeps it outside the document body.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document and return the id the store assigned to it.
    async fn insert(&self, collection: &str, document: Value) -> Result<Uuid, StoreError>;

    /// Fetch a single document by id.
    async fn find_by_id(&self, collection: &str, id: Uuid) -> Result<Option<Value>, StoreError>;

    /// Merge the given top-level fields into an existing document.
    async fn update_fields(&self, collection: &str, id: Uuid, fields: Value)
        -> Result<(), StoreError>;

    /// List documents whose top-level fields equal every field in `filter`
    /// (an empty filter matches all), in insertion order.
    async fn list(&self, collection: &str, filter: Value)
        -> Result<Vec<(Uuid, Value)>, StoreError>;
}

/// Parse an opaque document id as it arrives in request paths and
/// references. Returns `None` for anything that is not a well-formed id.
pub fn parse_document_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}
