pub mod models;
pub mod payment;
pub mod workflow;

pub use models::{CreateOrderRequest, Order, OrderStatus, PaymentRequest, ValidationError};
pub use payment::MockPaymentGateway;
pub use workflow::{OrderError, OrderWorkflow, ORDER_COLLECTION};
