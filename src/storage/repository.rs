use crate::domain::order::Order;

// ============================================================================
// Order Repository - Persistence Contract
// ============================================================================
//
// High-level code depends on this trait only. Backends (MySQL, Redis,
// generic database) implement it and are injected at construction.
// No backend stores anything: `save` produces a confirmation message.
//
// ============================================================================

pub trait OrderRepository {
    /// Save `order` and return the backend's confirmation message.
    fn save(&self, order: &Order) -> String;

    /// Backend label used in diagnostics.
    fn backend(&self) -> &'static str;
}

/// Serialize an order for a backend's simulated write.
///
/// Serialization failures are logged and reported as `None`; the save
/// itself still succeeds because nothing is written.
pub fn order_payload(order: &Order) -> Option<String> {
    match serde_json::to_string(order) {
        Ok(json) => Some(json),
        Err(e) => {
            tracing::warn!(
                order_id = %order.id(),
                error = %e,
                "Failed to serialize order payload"
            );
            None
        }
    }
}

// ============================================================================
// Order Manager - High-level consumer
// ============================================================================

/// Saves orders through the repository it was constructed with.
///
/// The repository is owned exclusively and cannot be replaced.
pub struct OrderManager {
    repository: Box<dyn OrderRepository>,
}

impl OrderManager {
    pub fn new(repository: impl OrderRepository + 'static) -> Self {
        Self {
            repository: Box::new(repository),
        }
    }

    pub fn save_order(&self, order: &Order) -> String {
        tracing::info!(
            order_id = %order.id(),
            backend = self.repository.backend(),
            items = order.len(),
            "Saving order"
        );

        self.repository.save(order)
    }

    pub fn backend(&self) -> &'static str {
        self.repository.backend()
    }
}

impl std::fmt::Debug for OrderManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderManager")
            .field("backend", &self.repository.backend())
            .finish()
    }
}
