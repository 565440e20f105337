use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::calculator::total_price;
use super::errors::OrderError;
use super::value_objects::LineItem;

// ============================================================================
// Order - Line Item Container
// ============================================================================

/// An order: an append-only, insertion-ordered list of line items.
///
/// The plain `Order` accepts anything, including negative prices. Use
/// [`SpecialOrder`] when the price guard is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: Uuid,
    created_at: DateTime<Utc>,
    items: Vec<LineItem>,
}

impl Order {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            items: Vec::new(),
        }
    }

    /// Append a line item. Duplicates are kept as separate entries.
    pub fn add_item(&mut self, name: impl Into<String>, price: f64, quantity: u32) {
        self.items.push(LineItem::new(name, price, quantity));
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Special Order - Validating Variant
// ============================================================================

/// Order that rejects negative prices at append time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecialOrder {
    inner: Order,
}

impl SpecialOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line item, failing without side effects when `price < 0`.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Result<(), OrderError> {
        let name = name.into();
        if price < 0.0 {
            tracing::debug!(
                order_id = %self.inner.id(),
                item = %name,
                price,
                "Rejected line item with negative price"
            );
            return Err(OrderError::NegativePrice { name, price });
        }

        self.inner.add_item(name, price, quantity);
        Ok(())
    }

    pub fn items(&self) -> &[LineItem] {
        self.inner.items()
    }

    /// Borrow as a plain order, e.g. for printing or persisting.
    pub fn as_order(&self) -> &Order {
        &self.inner
    }
}

// ============================================================================
// Substitutable Order Contract
// ============================================================================

/// Common contract shared by every order variant.
///
/// Callers written against this trait work with any implementation; a
/// variant may reject an item but must report it through the `Result`
/// rather than by changing what the other operations mean.
pub trait PricedOrder {
    fn add_item(&mut self, name: &str, price: f64, quantity: u32) -> Result<(), OrderError>;

    fn calculate_total_price(&self) -> f64;
}

impl PricedOrder for Order {
    fn add_item(&mut self, name: &str, price: f64, quantity: u32) -> Result<(), OrderError> {
        Order::add_item(self, name, price, quantity);
        Ok(())
    }

    fn calculate_total_price(&self) -> f64 {
        total_price(self.items())
    }
}

impl PricedOrder for SpecialOrder {
    fn add_item(&mut self, name: &str, price: f64, quantity: u32) -> Result<(), OrderError> {
        SpecialOrder::add_item(self, name, price, quantity)
    }

    fn calculate_total_price(&self) -> f64 {
        total_price(self.items())
    }
}
