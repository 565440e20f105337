use super::strategy::DiscountStrategy;

/// Applies the strategy it was built with. The strategy is fixed for the
/// calculator's lifetime.
pub struct DiscountCalculator {
    strategy: Box<dyn DiscountStrategy>,
}

impl DiscountCalculator {
    pub fn new(strategy: impl DiscountStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    pub fn calculate(&self, amount: f64) -> f64 {
        let discounted = self.strategy.apply(amount);

        tracing::debug!(
            strategy = self.strategy.name(),
            amount,
            discounted,
            "Applied discount"
        );

        discounted
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

impl std::fmt::Debug for DiscountCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscountCalculator")
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
