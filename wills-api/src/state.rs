use std::sync::Arc;

use wills_catalog::PlanCatalog;
use wills_order::{MockPaymentGateway, OrderWorkflow};
use wills_store::StoreClient;

/// Shared application state: the store client plus the components built
/// on top of it, constructed once at startup and injected everywhere.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<StoreClient>,
    pub catalog: PlanCatalog,
    pub orders: OrderWorkflow,
}

impl AppState {
    pub fn new(store: Arc<StoreClient>) -> Self {
        let catalog = PlanCatalog::new(store.clone());
        let orders = OrderWorkflow::new(
            store.clone(),
            catalog.clone(),
            Arc::new(MockPaymentGateway),
        );
        Self {
            store,
            catalog,
            orders,
        }
    }
}
