use std::io::Write;

use anyhow::Result;

use crate::domain::order::{Order, PricedOrder, SpecialOrder};

/// Reports the total of any order variant, without knowing which one it is.
pub struct Controller;

impl Controller {
    pub fn report(order: &dyn PricedOrder, out: &mut dyn Write) -> Result<f64> {
        let total = order.calculate_total_price();
        writeln!(out, "{}", total)?;
        Ok(total)
    }
}

/// Both order variants honour the same contract and can stand in for each other.
///
/// A rejected item is not caught here: the error propagates to the caller.
pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut order = Order::new();
    PricedOrder::add_item(&mut order, "short", 50.0, 4)?;
    Controller::report(&order, out)?;

    let mut special_order = SpecialOrder::new();
    special_order.add_item("mont", 250.0, 4)?;
    Controller::report(&special_order, out)?;

    Ok(())
}
