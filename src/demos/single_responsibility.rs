use std::io::Write;

use anyhow::Result;

use crate::domain::order::{Order, OrderCalculator, OrderPrinter};
use crate::storage::{DatabaseRepository, OrderRepository};

/// Order, printer, calculator and repository each do one job.
pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut order = Order::new();
    order.add_item("short", 50.0, 2);
    order.add_item("mont", 200.0, 1);

    let printer = OrderPrinter::new();
    let calculator = OrderCalculator::new();
    let repository = DatabaseRepository::new();

    printer.write_orders(&order, out)?;

    let total = calculator.calculate_total_price(&order);
    writeln!(out, "Total Price: {}", total)?;

    writeln!(out, "{}", repository.save(&order))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript() {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "short 50 2\nmont 200 1\nTotal Price: 300\nSaved to Database\n"
        );
    }
}
