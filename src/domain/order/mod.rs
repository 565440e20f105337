// ============================================================================
// Order Domain
// ============================================================================
//
// - Value objects (LineItem)
// - Errors (OrderError)
// - Aggregate (Order, SpecialOrder, PricedOrder contract)
// - Calculator and printer, each with a single job
// - Capabilities (CalculateOrder, Download, ShipOrder)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod aggregate;
pub mod calculator;
pub mod printer;
pub mod capabilities;

pub use value_objects::*;
pub use errors::*;
pub use aggregate::*;
pub use calculator::*;
pub use printer::*;
pub use capabilities::*;
