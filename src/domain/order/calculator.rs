use super::aggregate::Order;
use super::value_objects::LineItem;

/// Sum of `unit_price * quantity` over `items`; `0.0` when empty.
pub fn total_price(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::subtotal).sum()
}

/// Computes order totals. Holds no state of its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderCalculator;

impl OrderCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_total_price(&self, order: &Order) -> f64 {
        let total = total_price(order.items());

        tracing::debug!(
            order_id = %order.id(),
            items = order.len(),
            total,
            "Calculated order total"
        );

        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_item_total() {
        let mut order = Order::new();
        order.add_item("short", 50.0, 4);

        assert_eq!(OrderCalculator::new().calculate_total_price(&order), 200.0);
    }

    #[test]
    fn test_multiple_items_total() {
        let mut order = Order::new();
        order.add_item("short", 50.0, 2);
        order.add_item("mont", 200.0, 1);

        assert_eq!(OrderCalculator::new().calculate_total_price(&order), 300.0);
    }

    #[test]
    fn test_empty_order_total_is_zero() {
        let order = Order::new();
        assert_eq!(OrderCalculator::new().calculate_total_price(&order), 0.0);
    }

    #[test]
    fn test_negative_price_contributes_negative_subtotal() {
        let mut order = Order::new();
        order.add_item("mont", 200.0, 1);
        order.add_item("refund", -50.0, 3);

        assert_eq!(OrderCalculator::new().calculate_total_price(&order), 50.0);
    }

    #[test]
    fn test_total_does_not_mutate_order() {
        let mut order = Order::new();
        order.add_item("short", 50.0, 2);
        let calculator = OrderCalculator::new();

        let first = calculator.calculate_total_price(&order);
        let second = calculator.calculate_total_price(&order);

        assert_eq!(first, second);
        assert_eq!(order.len(), 1);
    }
}
