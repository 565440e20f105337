use crate::domain::order::Order;

use super::repository::{order_payload, OrderRepository};

/// Key-value backend. Orders would be stored as JSON under `<prefix>:<id>`.
#[derive(Debug, Clone)]
pub struct RedisStore {
    key_prefix: String,
}

impl Default for RedisStore {
    fn default() -> Self {
        Self::new("order")
    }
}

impl RedisStore {
    pub fn new(key_prefix: impl Into<String>) -> Self {
        Self {
            key_prefix: key_prefix.into(),
        }
    }

    pub fn key_for(&self, order: &Order) -> String {
        format!("{}:{}", self.key_prefix, order.id())
    }
}

impl OrderRepository for RedisStore {
    fn save(&self, order: &Order) -> String {
        let key = self.key_for(order);

        match order_payload(order) {
            Some(value) => tracing::debug!(key = %key, value = %value, "Simulated Redis SET"),
            None => tracing::debug!(key = %key, "Simulated Redis SET without payload"),
        }

        "Save data to Redis".to_string()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
