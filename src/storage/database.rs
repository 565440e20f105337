use crate::domain::order::Order;

use super::repository::OrderRepository;

/// Generic database backend used by the single-responsibility demo.
#[derive(Debug, Default, Clone, Copy)]
pub struct DatabaseRepository;

impl DatabaseRepository {
    pub fn new() -> Self {
        Self
    }
}

impl OrderRepository for DatabaseRepository {
    fn save(&self, order: &Order) -> String {
        tracing::debug!(order_id = %order.id(), "Simulated database write");
        "Saved to Database".to_string()
    }

    fn backend(&self) -> &'static str {
        "database"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_confirmation() {
        assert_eq!(DatabaseRepository::new().save(&Order::new()), "Saved to Database");
    }
}
