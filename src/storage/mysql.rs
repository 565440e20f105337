use crate::domain::order::Order;

use super::repository::{order_payload, OrderRepository};

/// Relational-style backend. Builds the INSERT it would run and logs it.
#[derive(Debug, Clone)]
pub struct MySqlConnection {
    table: String,
}

impl Default for MySqlConnection {
    fn default() -> Self {
        Self::new("orders")
    }
}

impl MySqlConnection {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }

    fn insert_statement(&self, order: &Order) -> String {
        format!(
            "INSERT INTO {} (id, created_at, items) VALUES ('{}', '{}', ?)",
            self.table,
            order.id(),
            order.created_at().to_rfc3339()
        )
    }
}

impl OrderRepository for MySqlConnection {
    fn save(&self, order: &Order) -> String {
        let statement = self.insert_statement(order);
        let payload = order_payload(order).unwrap_or_default();

        tracing::debug!(
            order_id = %order.id(),
            statement = %statement,
            payload_bytes = payload.len(),
            "Simulated MySQL write"
        );

        "Save data to MySQL Database".to_string()
    }

    fn backend(&self) -> &'static str {
        "mysql"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mysql_confirmation() {
        let order = Order::new();
        assert_eq!(MySqlConnection::default().save(&order), "Save data to MySQL Database");
    }

    #[test]
    fn test_insert_statement_targets_table() {
        let order = Order::new();
        let statement = MySqlConnection::new("archive").insert_statement(&order);

        assert!(statement.starts_with("INSERT INTO archive "));
        assert!(statement.contains(&order.id().to_string()));
    }
}
