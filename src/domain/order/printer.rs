use std::fmt::Write as _;
use std::io::{self, Write};

use super::aggregate::Order;

/// Renders the items of an order as text, one `"<name> <price> <quantity>"`
/// line per item in insertion order.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderPrinter;

impl OrderPrinter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, order: &Order) -> String {
        let mut output = String::new();
        for item in order.items() {
            // Writing into a String cannot fail.
            let _ = writeln!(output, "{} {} {}", item.name, item.unit_price, item.quantity);
        }
        output
    }

    /// Write the rendered items to `out`.
    pub fn write_orders<W: Write + ?Sized>(&self, order: &Order, out: &mut W) -> io::Result<()> {
        out.write_all(self.render(order).as_bytes())
    }

    /// Print the rendered items to standard output.
    pub fn print_orders(&self, order: &Order) {
        print!("{}", self.render(order));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_item_line() {
        let mut order = Order::new();
        order.add_item("short", 50.0, 2);

        assert_eq!(OrderPrinter::new().render(&order), "short 50 2\n");
    }

    #[test]
    fn test_lines_follow_insertion_order() {
        let mut order = Order::new();
        order.add_item("short", 50.0, 2);
        order.add_item("mont", 200.0, 1);

        assert_eq!(OrderPrinter::new().render(&order), "short 50 2\nmont 200 1\n");
    }

    #[test]
    fn test_fractional_price() {
        let mut order = Order::new();
        order.add_item("socks", 9.5, 3);

        assert_eq!(OrderPrinter::new().render(&order), "socks 9.5 3\n");
    }

    #[test]
    fn test_empty_order_prints_nothing() {
        assert_eq!(OrderPrinter::new().render(&Order::new()), "");
    }

    #[test]
    fn test_write_orders_to_buffer() {
        let mut order = Order::new();
        order.add_item("short", 50.0, 2);
        let mut buf = Vec::new();

        OrderPrinter::new().write_orders(&order, &mut buf).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "short 50 2\n");
    }
}
