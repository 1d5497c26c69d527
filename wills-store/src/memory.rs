use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;
use wills_core::repository::{DocumentStore, StoreError};

/// In-memory document store backend.
///
/// Holds named collections of `(id, document)` pairs behind a read-write
/// lock. Insertion order is preserved, which is the order `list` returns.
/// Writes are serialized by the lock; there is no persistence.
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<(Uuid, Value)>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }

    /// Names of all collections that have received at least one document.
    pub async fn collection_names(&self) -> Vec<String> {
        let collections = self.collections.read().await;
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<Uuid, StoreError> {
        if !document.is_object() {
            return Err(StoreError::Backend(
                "documents must be JSON objects".to_string(),
            ));
        }

        let id = Uuid::new_v4();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push((id, document));
        Ok(id)
    }

    async fn find_by_id(&self, collection: &str, id: Uuid) -> Result<Option<Value>, StoreError> {
        let collections = self.collections.read().await;
        match collections.get(collection) {
            Some(documents) => Ok(documents
                .iter()
                .find(|(document_id, _)| *document_id == id)
                .map(|(_, document)| document.clone())),
            None => Ok(None),
        }
    }

    async fn update_fields(
        &self,
        collection: &str,
        id: Uuid,
        fields: Value,
    ) -> Result<(), StoreError> {
        let changes = match fields.as_object() {
            Some(changes) => changes.clone(),
            None => {
                return Err(StoreError::Backend(
                    "field updates must be JSON objects".to_string(),
                ))
            }
        };

        let mut collections = self.collections.write().await;
        let documents = collections.get_mut(collection).ok_or(StoreError::NotFound)?;
        let document = documents
            .iter_mut()
            .find(|(document_id, _)| *document_id == id)
            .map(|(_, document)| document)
            .ok_or(StoreError::NotFound)?;

        if let Some(target) = document.as_object_mut() {
            for (key, value) in changes {
                target.insert(key, value);
            }
        }
        Ok(())
    }

    async fn list(&self, collection: &str, filter: Value) -> Result<Vec<(Uuid, Value)>, StoreError> {
        let collections = self.collections.read().await;
        match collections.get(collection) {
            Some(documents) => Ok(documents
                .iter()
                .filter(|(_, document)| matches_filter(document, &filter))
                .map(|(id, document)| (*id, document.clone()))
                .collect()),
            None => Ok(Vec::new()),
        }
    }
}

/// Top-level equality match; an empty filter matches everything.
fn matches_filter(document: &Value, filter: &Value) -> bool {
    match filter.as_object() {
        Some(conditions) => conditions
            .iter()
            .all(|(key, expected)| document.get(key) == Some(expected)),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn insert_and_find_round_trip() {
        let store = MemoryStore::new();

        let id = store
            .insert("order", json!({"status": "created", "total": 79.0}))
            .await
            .unwrap();

        let found = store.find_by_id("order", id).await.unwrap().unwrap();
        assert_eq!(found["status"], "created");
        assert_eq!(found["total"], 79.0);

        let missing = store.find_by_id("order", Uuid::new_v4()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn insert_rejects_non_object_documents() {
        let store = MemoryStore::new();
        let result = store.insert("order", json!("just a string")).await;
        assert!(matches!(result, Err(StoreError::Backend(_))));
    }

    #[tokio::test]
    async fn update_fields_merges_top_level() {
        let store = MemoryStore::new();
        let id = store
            .insert("order", json!({"status": "created", "total": 79.0}))
            .await
            .unwrap();

        store
            .update_fields("order", id, json!({"status": "paid", "payment_reference": "PMT-1"}))
            .await
            .unwrap();

        let found = store.find_by_id("order", id).await.unwrap().unwrap();
        assert_eq!(found["status"], "paid");
        assert_eq!(found["payment_reference"], "PMT-1");
        assert_eq!(found["total"], 79.0);
    }

    #[tokio::test]
    async fn update_fields_requires_existing_document() {
        let store = MemoryStore::new();
        let result = store
            .update_fields("order", Uuid::new_v4(), json!({"status": "paid"}))
            .await;
        assert!(matches!(result, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn list_preserves_insertion_order_and_filters() {
        let store = MemoryStore::new();
        store.insert("order", json!({"n": 1, "status": "created"})).await.unwrap();
        store.insert("order", json!({"n": 2, "status": "paid"})).await.unwrap();
        store.insert("order", json!({"n": 3, "status": "created"})).await.unwrap();

        let all = store.list("order", json!({})).await.unwrap();
        assert_eq!(all.len(), 3);
        let ns: Vec<i64> = all.iter().map(|(_, d)| d["n"].as_i64().unwrap()).collect();
        assert_eq!(ns, [1, 2, 3]);

        let created = store.list("order", json!({"status": "created"})).await.unwrap();
        assert_eq!(created.len(), 2);

        let empty = store.list("plan", json!({})).await.unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn collection_names_track_inserts() {
        let store = MemoryStore::new();
        assert!(store.collection_names().await.is_empty());

        store.insert("plan", json!({"name": "Essential Will"})).await.unwrap();
        store.insert("order", json!({"status": "created"})).await.unwrap();

        assert_eq!(store.collection_names().await, ["order", "plan"]);
    }
}
