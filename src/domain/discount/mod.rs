pub mod strategy;
pub mod calculator;

pub use strategy::{DiscountStrategy, NominalDiscount, PercentDiscount};
pub use calculator::DiscountCalculator;
