use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use uuid::Uuid;
use wills_catalog::{CatalogError, PlanCatalog};
use wills_core::payment::{PaymentError, PaymentGateway};
use wills_core::repository::{parse_document_id, DocumentStore, StoreError};

use crate::models::{CreateOrderRequest, Order, OrderStatus, PaymentRequest, ValidationError};

/// Store collection holding order documents.
pub const ORDER_COLLECTION: &str = "order";

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Invalid ID format")]
    InvalidId,

    #[error("Plan not found")]
    PlanNotFound,

    #[error("Order not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error("order record is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<CatalogError> for OrderError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidId => OrderError::InvalidId,
            CatalogError::NotFound => OrderError::PlanNotFound,
            CatalogError::Malformed(err) => OrderError::Malformed(err),
            CatalogError::Store(err) => OrderError::Store(err),
        }
    }
}

/// Order lifecycle: create against a plan, point lookup, mock payment.
#[derive(Clone)]
pub struct OrderWorkflow {
    store: Arc<dyn DocumentStore>,
    catalog: PlanCatalog,
    gateway: Arc<dyn PaymentGateway>,
}

impl OrderWorkflow {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        catalog: PlanCatalog,
        gateway: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            store,
            catalog,
            gateway,
        }
    }

    /// Create an order for a plan, snapshotting the plan's name and price
    /// so later catalog changes cannot affect it. Returns the stored
    /// record and its assigned id.
    pub async fn create_order(
        &self,
        request: CreateOrderRequest,
    ) -> Result<(Uuid, Order), OrderError> {
        request.validate()?;

        let (plan_id, plan) = self.catalog.find_plan(&request.plan_id).await?;

        let now = Utc::now();
        let order = Order {
            plan_id: plan_id.to_string(),
            plan_name: plan.name,
            plan_price: plan.price,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            address_line1: request.address_line1,
            address_line2: request.address_line2,
            city: request.city,
            state: request.state,
            postal_code: request.postal_code,
            country: request.country,
            notes: request.notes,
            status: OrderStatus::Created,
            payment_reference: None,
            // No extras or discounts are modeled; the total is the plan price.
            total: plan.price,
            created_at: now,
            updated_at: now,
        };

        let document = serde_json::to_value(&order)?;
        let order_id = self.store.insert(ORDER_COLLECTION, document).await?;
        tracing::info!(%order_id, plan = %order.plan_name, total = order.total, "Order created");

        Ok((order_id, order))
    }

    /// Fetch an order by its opaque string id.
    pub async fn get_order(&self, order_id: &str) -> Result<(Uuid, Order), OrderError> {
        self.fetch(order_id).await
    }

    /// Mark an order paid. The mock gateway always approves; the approval
    /// reference and timestamp are written through to the store. There is
    /// no guard against an already-paid order: paying again overwrites the
    /// reference and `updated_at` (last writer wins).
    pub async fn pay_order(
        &self,
        order_id: &str,
        request: PaymentRequest,
    ) -> Result<(Uuid, Order), OrderError> {
        let (id, mut order) = self.fetch(order_id).await?;

        let approval = self
            .gateway
            .authorize(id, order.total, &request.method, request.token.as_deref())
            .await?;

        let fields = json!({
            "status": OrderStatus::Paid,
            "payment_reference": approval.reference,
            "updated_at": approval.approved_at,
        });
        self.store.update_fields(ORDER_COLLECTION, id, fields).await?;

        order.status = OrderStatus::Paid;
        order.payment_reference = Some(approval.reference);
        order.updated_at = approval.approved_at;
        tracing::info!(order_id = %id, reference = order.payment_reference.as_deref().unwrap_or(""), "Order paid");

        Ok((id, order))
    }

    async fn fetch(&self, order_id: &str) -> Result<(Uuid, Order), OrderError> {
        let id = parse_document_id(order_id).ok_or(OrderError::InvalidId)?;
        let document = self
            .store
            .find_by_id(ORDER_COLLECTION, id)
            .await?
            .ok_or(OrderError::NotFound)?;
        let order = serde_json::from_value(document)?;
        Ok((id, order))
    }
}
