use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use uuid::Uuid;
use wills_core::repository::{parse_document_id, DocumentStore, StoreError};

use crate::plan::{default_plans, Plan};

/// Store collection holding plan documents.
pub const PLAN_COLLECTION: &str = "plan";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid ID format")]
    InvalidId,

    #[error("Plan not found")]
    NotFound,

    #[error("stored plan is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Catalog of purchasable plans, backed by the document store.
#[derive(Clone)]
pub struct PlanCatalog {
    store: Arc<dyn DocumentStore>,
}

impl PlanCatalog {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Return all plans, seeding the fixed defaults first if the catalog
    /// is empty. Seeding happens at most once: later calls see the
    /// existing records and insert nothing.
    pub async fn list_plans(&self) -> Result<Vec<(Uuid, Plan)>, CatalogError> {
        let mut records = self.store.list(PLAN_COLLECTION, json!({})).await?;

        if records.is_empty() {
            let now = Utc::now();
            let defaults = default_plans(now);
            let seeded = defaults.len();
            for plan in defaults {
                let document = serde_json::to_value(&plan)?;
                self.store.insert(PLAN_COLLECTION, document).await?;
            }
            tracing::info!(count = seeded, "Seeded default plans");
            records = self.store.list(PLAN_COLLECTION, json!({})).await?;
        }

        records
            .into_iter()
            .map(|(id, document)| {
                serde_json::from_value::<Plan>(document)
                    .map(|plan| (id, plan))
                    .map_err(CatalogError::from)
            })
            .collect()
    }

    /// Resolve a plan from an opaque string id.
    pub async fn find_plan(&self, plan_id: &str) -> Result<(Uuid, Plan), CatalogError> {
        let id = parse_document_id(plan_id).ok_or(CatalogError::InvalidId)?;
        let document = self
            .store
            .find_by_id(PLAN_COLLECTION, id)
            .await?
            .ok_or(CatalogError::NotFound)?;
        let plan = serde_json::from_value(document)?;
        Ok((id, plan))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wills_store::MemoryStore;

    fn catalog() -> PlanCatalog {
        PlanCatalog::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn list_plans_seeds_defaults_when_empty() {
        let catalog = catalog();
        let plans = catalog.list_plans().await.unwrap();

        assert_eq!(plans.len(), 3);
        let names: Vec<&str> = plans.iter().map(|(_, plan)| plan.name.as_str()).collect();
        assert_eq!(names, ["Essential Will", "Couples Will", "Premium Estate Plan"]);
        assert_eq!(plans[0].1.price, 79.0);
    }

    #[tokio::test]
    async fn seeding_happens_at_most_once() {
        let catalog = catalog();
        let first = catalog.list_plans().await.unwrap();
        let second = catalog.list_plans().await.unwrap();
        let third = catalog.list_plans().await.unwrap();

        assert_eq!(second.len(), 3);
        assert_eq!(third.len(), 3);

        let first_ids: Vec<Uuid> = first.iter().map(|(id, _)| *id).collect();
        let second_ids: Vec<Uuid> = second.iter().map(|(id, _)| *id).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[tokio::test]
    async fn find_plan_rejects_malformed_id() {
        let catalog = catalog();
        let result = catalog.find_plan("not-a-valid-id").await;
        assert!(matches!(result, Err(CatalogError::InvalidId)));
    }

    #[tokio::test]
    async fn find_plan_reports_unknown_id() {
        let catalog = catalog();
        catalog.list_plans().await.unwrap();

        let result = catalog.find_plan(&Uuid::new_v4().to_string()).await;
        assert!(matches!(result, Err(CatalogError::NotFound)));
    }

    #[tokio::test]
    async fn find_plan_returns_seeded_plan() {
        let catalog = catalog();
        let plans = catalog.list_plans().await.unwrap();
        let (id, expected) = &plans[1];

        let (found_id, found) = catalog.find_plan(&id.to_string()).await.unwrap();
        assert_eq!(found_id, *id);
        assert_eq!(found.name, expected.name);
        assert_eq!(found.price, expected.price);
        assert_eq!(found.features, expected.features);
    }
}
