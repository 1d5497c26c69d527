use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;
use wills_core::repository::{DocumentStore, StoreError};

use crate::app_config::Config;
use crate::memory::MemoryStore;

/// Handle to the document store with an explicit lifecycle.
///
/// Opened once at process start and passed into the components that need
/// it; closed at shutdown. Operations on a closed client fail with
/// `StoreError::Closed`.
pub struct StoreClient {
    backend: MemoryStore,
    database: String,
    open: AtomicBool,
}

impl StoreClient {
    pub async fn open(config: &Config) -> Result<Self, StoreError> {
        info!(database = %config.database_name, "Opening document store");
        Ok(Self {
            backend: MemoryStore::new(),
            database: config.database_name.clone(),
            open: AtomicBool::new(true),
        })
    }

    pub fn database_name(&self) -> &str {
        &self.database
    }

    /// Cheap connectivity check used by the diagnostic endpoint.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.ensure_open()
    }

    /// Names of collections holding at least one document.
    pub async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        self.ensure_open()?;
        Ok(self.backend.collection_names().await)
    }

    pub fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
        info!(database = %self.database, "Document store closed");
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.open.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Closed)
        }
    }
}

#[async_trait]
impl DocumentStore for StoreClient {
    async fn insert(&self, collection: &str, document: Value) -> Result<Uuid, StoreError> {
        self.ensure_open()?;
        self.backend.insert(collection, document).await
    }

    async fn find_by_id(&self, collection: &str, id: Uuid) -> Result<Option<Value>, StoreError> {
        self.ensure_open()?;
        self.backend.find_by_id(collection, id).await
    }

    async fn update_fields(
        &self,
        collection: &str,
        id: Uuid,
        fields: Value,
    ) -> Result<(), StoreError> {
        self.ensure_open()?;
        self.backend.update_fields(collection, id, fields).await
    }

    async fn list(&self, collection: &str, filter: Value) -> Result<Vec<(Uuid, Value)>, StoreError> {
        self.ensure_open()?;
        self.backend.list(collection, filter).await
    }
}
