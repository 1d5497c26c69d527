use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A purchasable will-writing service tier.
///
/// Plans are immutable after seeding; no update or delete operation exists.
/// Identity is assigned by the store on insertion and carried outside the
/// document body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub features: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Plan {
    fn tier(name: &str, description: &str, price: f64, features: &[&str], now: DateTime<Utc>) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            price,
            features: features.iter().map(|f| f.to_string()).collect(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// The three fixed tiers seeded when the catalog is empty.
pub fn default_plans(now: DateTime<Utc>) -> Vec<Plan> {
    vec![
        Plan::tier(
            "Essential Will",
            "A legally valid simple Will for a single person.",
            79.0,
            &[
                "Legally valid simple Will",
                "Appointment of executors",
                "Basic gifts and bequests",
            ],
            now,
        ),
        Plan::tier(
            "Couples Will",
            "Mirror Wills for couples with aligned wishes.",
            129.0,
            &[
                "Two matching Wills",
                "Guardians for children",
                "Replacement executors",
            ],
            now,
        ),
        Plan::tier(
            "Premium Estate Plan",
            "Comprehensive Will with additional estate planning guidance.",
            199.0,
            &[
                "Complex gifts and trusts",
                "Digital asset wishes",
                "One review session",
            ],
            now,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tiers_are_priced_ascending() {
        let plans = default_plans(Utc::now());
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[0].name, "Essential Will");
        assert_eq!(plans[0].price, 79.0);
        assert_eq!(plans[1].name, "Couples Will");
        assert_eq!(plans[1].price, 129.0);
        assert_eq!(plans[2].name, "Premium Estate Plan");
        assert_eq!(plans[2].price, 199.0);
        assert!(plans.iter().all(|plan| plan.features.len() == 3));
    }

    #[test]
    fn plan_serializes_with_feature_order() {
        let plans = default_plans(Utc::now());
        let value = serde_json::to_value(&plans[0]).unwrap();
        assert_eq!(value["features"][0], "Legally valid simple Will");
        assert_eq!(value["features"][2], "Basic gifts and bequests");
    }
}
