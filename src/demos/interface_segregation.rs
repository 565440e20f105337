use std::io::Write;

use anyhow::Result;

use crate::domain::order::{checkout, fulfil, InStoreOrder, OnlineOrder, Order};

/// Each order type implements only the capabilities it needs.
pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut basket = Order::new();
    basket.add_item("short", 50.0, 2);
    let in_store = InStoreOrder::new(basket);
    writeln!(out, "in-store total: {}", checkout(&in_store))?;

    let mut parcel = Order::new();
    parcel.add_item("mont", 200.0, 1);
    let online = OnlineOrder::new(parcel);
    for line in fulfil(&online) {
        writeln!(out, "{}", line)?;
    }

    Ok(())
}
