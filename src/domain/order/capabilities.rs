use super::aggregate::Order;
use super::calculator::total_price;

// ============================================================================
// Order Capabilities
// ============================================================================
//
// Each trait carries exactly one operation. Order types implement only
// the capabilities they actually support.
//
// ============================================================================

pub trait CalculateOrder {
    fn calculate_total_price(&self) -> f64;
}

pub trait Download {
    fn download_order(&self) -> String;
}

pub trait ShipOrder {
    fn ship_order(&self) -> String;
}

// ============================================================================
// In-Store Order - price calculation only
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct InStoreOrder {
    order: Order,
}

impl InStoreOrder {
    pub fn new(order: Order) -> Self {
        Self { order }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }
}

impl CalculateOrder for InStoreOrder {
    fn calculate_total_price(&self) -> f64 {
        total_price(self.order.items())
    }
}

// ============================================================================
// Online Order - price, download and shipping
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct OnlineOrder {
    order: Order,
}

impl OnlineOrder {
    pub fn new(order: Order) -> Self {
        Self { order }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }
}

impl CalculateOrder for OnlineOrder {
    fn calculate_total_price(&self) -> f64 {
        total_price(self.order.items())
    }
}

impl Download for OnlineOrder {
    fn download_order(&self) -> String {
        tracing::debug!(order_id = %self.order.id(), "Preparing order download");
        "download order".to_string()
    }
}

impl ShipOrder for OnlineOrder {
    fn ship_order(&self) -> String {
        tracing::debug!(
            order_id = %self.order.id(),
            items = self.order.len(),
            "Dispatching order"
        );
        "ship order".to_string()
    }
}

// ============================================================================
// Capability-bound consumers
// ============================================================================

/// Checkout only needs a price.
pub fn checkout<O: CalculateOrder + ?Sized>(order: &O) -> f64 {
    order.calculate_total_price()
}

/// Fulfilment of a remote order needs every capability.
pub fn fulfil<O>(order: &O) -> Vec<String>
where
    O: CalculateOrder + Download + ShipOrder + ?Sized,
{
    vec![
        order.calculate_total_price().to_string(),
        order.download_order(),
        order.ship_order(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        let mut order = Order::new();
        order.add_item("short", 50.0, 2);
        order.add_item("mont", 200.0, 1);
        order
    }

    #[test]
    fn test_in_store_checkout() {
        let order = InStoreOrder::new(sample_order());
        assert_eq!(checkout(&order), 300.0);
    }

    #[test]
    fn test_online_order_supports_every_capability() {
        let order = OnlineOrder::new(sample_order());

        assert_eq!(order.calculate_total_price(), 300.0);
        assert_eq!(order.download_order(), "download order");
        assert_eq!(order.ship_order(), "ship order");
    }

    #[test]
    fn test_fulfil_online_order() {
        let order = OnlineOrder::new(sample_order());
        assert_eq!(fulfil(&order), vec!["300", "download order", "ship order"]);
    }

    #[test]
    fn test_checkout_through_trait_object() {
        let orders: Vec<Box<dyn CalculateOrder>> = vec![
            Box::new(InStoreOrder::new(sample_order())),
            Box::new(OnlineOrder::new(Order::new())),
        ];

        let totals: Vec<f64> = orders.iter().map(|o| checkout(&**o)).collect();
        assert_eq!(totals, vec![300.0, 0.0]);
    }
}
