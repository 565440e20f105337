//! Toy order-management domain used to walk through the five SOLID
//! principles: single responsibility, open/closed, Liskov substitution,
//! interface segregation and dependency inversion.

pub mod domain;
pub mod storage;
pub mod demos;
