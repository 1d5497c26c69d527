use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of a successful payment authorization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentApproval {
    /// Opaque reference issued by the gateway.
    pub reference: String,
    pub approved_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("payment declined: {0}")]
    Declined(String),

    #[error("payment gateway error: {0}")]
    Gateway(String),
}

/// Gateway seam for taking payment on an order.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Authorize a charge against the given order.
    async fn authorize(
        &self,
        order_id: Uuid,
        amount: f64,
        method: &str,
        token: Option<&str>,
    ) -> Result<PaymentApproval, PaymentError>;
}
