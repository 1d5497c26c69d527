use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status in the lifecycle.
///
/// Only `created` and `paid` are ever set by an operation; `failed` and
/// `cancelled` are declared for the stored shape but currently have no
/// transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Paid,
    Failed,
    Cancelled,
}

/// A customer's purchase record.
///
/// The plan fields are a snapshot taken at creation time; they are never
/// re-read from the plan afterwards, so later catalog changes cannot
/// affect existing orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub plan_id: String,
    pub plan_name: String,
    pub plan_price: f64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: String,
    pub country: String,
    pub notes: Option<String>,
    pub status: OrderStatus,
    pub payment_reference: Option<String>,
    pub total: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("email is not a valid email address")]
    InvalidEmail,
}

/// Request body for creating an order.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub plan_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: String,
    pub country: String,
    pub notes: Option<String>,
}

impl CreateOrderRequest {
    /// Field-level checks run before any business logic.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("plan_id", &self.plan_id),
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("address_line1", &self.address_line1),
            ("city", &self.city),
            ("postal_code", &self.postal_code),
            ("country", &self.country),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyField(name));
            }
        }

        if !looks_like_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// Request body for paying an order.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRequest {
    #[serde(default = "default_payment_method")]
    pub method: String,
    /// Reserved for real gateway integrations; the mock ignores it.
    #[serde(default)]
    pub token: Option<String>,
}

fn default_payment_method() -> String {
    "card".to_string()
}

/// Structural check only: one `@` with a dotted domain after it.
fn looks_like_email(value: &str) -> bool {
    let mut parts = value.splitn(2, '@');
    match (parts.next(), parts.next()) {
        (Some(local), Some(domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> CreateOrderRequest {
        CreateOrderRequest {
            plan_id: "b2f6d9d4-3f3a-4a2e-9c61-1d2f5a7b8c90".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            phone: None,
            address_line1: "1 High Street".to_string(),
            address_line2: None,
            city: "London".to_string(),
            state: None,
            postal_code: "N1 9GU".to_string(),
            country: "GB".to_string(),
            notes: None,
        }
    }

    #[test]
    fn validate_accepts_complete_request() {
        assert_eq!(request().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_blank_required_field() {
        let mut req = request();
        req.city = "   ".to_string();
        assert_eq!(req.validate(), Err(ValidationError::EmptyField("city")));
    }

    #[test]
    fn validate_rejects_structurally_bad_email() {
        for bad in ["jane.doe", "@example.com", "jane@", "jane@nodot", "jane@.com"] {
            let mut req = request();
            req.email = bad.to_string();
            assert_eq!(req.validate(), Err(ValidationError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn order_status_serializes_lowercase() {
        assert_eq!(serde_json::to_value(OrderStatus::Created).unwrap(), json!("created"));
        assert_eq!(serde_json::to_value(OrderStatus::Paid).unwrap(), json!("paid"));
        let parsed: OrderStatus = serde_json::from_value(json!("cancelled")).unwrap();
        assert_eq!(parsed, OrderStatus::Cancelled);
    }

    #[test]
    fn payment_request_defaults_to_card() {
        let parsed: PaymentRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(parsed.method, "card");
        assert!(parsed.token.is_none());

        let parsed: PaymentRequest =
            serde_json::from_value(json!({"method": "paypal", "token": "tok_1"})).unwrap();
        assert_eq!(parsed.method, "paypal");
        assert_eq!(parsed.token.as_deref(), Some("tok_1"));
    }
}
