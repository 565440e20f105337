// ============================================================================
// Storage - Persistence contract and simulated backends
// ============================================================================

mod repository;
mod mysql;
mod redis;
mod database;

pub use repository::{order_payload, OrderManager, OrderRepository};
pub use mysql::MySqlConnection;
pub use redis::RedisStore;
pub use database::DatabaseRepository;
