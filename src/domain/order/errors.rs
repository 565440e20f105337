// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    /// Invalid argument passed to `add_item` on a validating order.
    #[error("Invalid argument: price cannot be negative (got {price} for '{name}')")]
    NegativePrice { name: String, price: f64 },
}
