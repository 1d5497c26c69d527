use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;
use wills_order::{CreateOrderRequest, Order, PaymentRequest};

use crate::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: String,
    #[serde(flatten)]
    pub order: Order,
}

#[derive(Debug, Serialize)]
pub struct OrderEnvelope {
    pub order: OrderResponse,
}

impl OrderEnvelope {
    fn new(id: Uuid, order: Order) -> Self {
        Self {
            order: OrderResponse {
                id: id.to_string(),
                order,
            },
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/orders
/// Create an order against a plan, snapshotting the plan details.
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Json<OrderEnvelope>, ApiError> {
    let (order_id, order) = state.orders.create_order(request).await?;
    Ok(Json(OrderEnvelope::new(order_id, order)))
}

/// GET /api/orders/{order_id}
/// Retrieve an order.
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<OrderEnvelope>, ApiError> {
    let (order_id, order) = state.orders.get_order(&order_id).await?;
    Ok(Json(OrderEnvelope::new(order_id, order)))
}

/// POST /api/orders/{order_id}/pay
/// Take (mock) payment for an order and mark it paid.
pub async fn pay_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<OrderEnvelope>, ApiError> {
    let (order_id, order) = state.orders.pay_order(&order_id, request).await?;
    Ok(Json(OrderEnvelope::new(order_id, order)))
}
