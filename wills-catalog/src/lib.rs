pub mod catalog;
pub mod plan;

pub use catalog::{CatalogError, PlanCatalog, PLAN_COLLECTION};
pub use plan::{default_plans, Plan};
