// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Pure, synchronous business types. Nothing here knows how orders are
// stored; see `storage` for the persistence contract and its backends.
//
// ============================================================================

pub mod order;
pub mod discount;
