use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;
use wills_core::payment::{PaymentApproval, PaymentError, PaymentGateway};

/// Build the reference issued for an approved payment: a fixed prefix, the
/// last 6 characters of the order id upper-cased, and the Unix timestamp
/// of the approval.
pub fn payment_reference(order_id: Uuid, approved_at: DateTime<Utc>) -> String {
    let id = order_id.to_string();
    let tail = &id[id.len() - 6..];
    format!("PMT-{}-{}", tail.to_uppercase(), approved_at.timestamp())
}

/// Gateway stand-in that approves every charge.
pub struct MockPaymentGateway;

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn authorize(
        &self,
        order_id: Uuid,
        amount: f64,
        method: &str,
        _token: Option<&str>,
    ) -> Result<PaymentApproval, PaymentError> {
        let approved_at = Utc::now();
        let reference = payment_reference(order_id, approved_at);
        tracing::debug!(%order_id, amount, method, %reference, "Mock payment approved");
        Ok(PaymentApproval {
            reference,
            approved_at,
        })
    }
}
