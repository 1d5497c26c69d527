pub mod app_config;
pub mod database;
pub mod memory;

pub use database::StoreClient;
pub use memory::MemoryStore;
