// ============================================================================
// Discount Strategies
// ============================================================================
//
// New policies are added by implementing `DiscountStrategy`; the
// calculator never changes.
//
// ============================================================================

/// Maps a base amount to the amount after discount.
pub trait DiscountStrategy {
    fn apply(&self, amount: f64) -> f64;

    /// Short label used in diagnostics.
    fn name(&self) -> &'static str;
}

/// Multiplies the amount by a fixed factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentDiscount {
    pub factor: f64,
}

impl Default for PercentDiscount {
    fn default() -> Self {
        Self { factor: 0.5 }
    }
}

impl PercentDiscount {
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }
}

impl DiscountStrategy for PercentDiscount {
    fn apply(&self, amount: f64) -> f64 {
        amount * self.factor
    }

    fn name(&self) -> &'static str {
        "percent"
    }
}

/// Subtracts a fixed amount. The result is not floored at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NominalDiscount {
    pub amount: f64,
}

impl Default for NominalDiscount {
    fn default() -> Self {
        Self { amount: 100.0 }
    }
}

impl NominalDiscount {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }
}

impl DiscountStrategy for NominalDiscount {
    fn apply(&self, amount: f64) -> f64 {
        amount - self.amount
    }

    fn name(&self) -> &'static str {
        "nominal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_halves_amount() {
        assert_eq!(PercentDiscount::default().apply(200.0), 100.0);
        assert_eq!(PercentDiscount::default().apply(0.0), 0.0);
    }

    #[test]
    fn test_custom_percent_factor() {
        assert_eq!(PercentDiscount::new(0.2).apply(100.0), 20.0);
    }

    #[test]
    fn test_nominal_subtracts_hundred() {
        assert_eq!(NominalDiscount::default().apply(200.0), 100.0);
    }

    #[test]
    fn test_nominal_goes_negative_below_threshold() {
        assert_eq!(NominalDiscount::default().apply(50.0), -50.0);
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(PercentDiscount::default().name(), "percent");
        assert_eq!(NominalDiscount::default().name(), "nominal");
    }
}
