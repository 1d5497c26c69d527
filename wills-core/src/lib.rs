pub mod payment;
pub mod repository;

pub use payment::{PaymentApproval, PaymentError, PaymentGateway};
pub use repository::{parse_document_id, DocumentStore, StoreError};
