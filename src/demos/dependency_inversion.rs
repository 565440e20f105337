use std::io::Write;

use anyhow::Result;

use crate::domain::order::Order;
use crate::storage::{MySqlConnection, OrderManager, RedisStore};

/// `OrderManager` depends on the repository trait, so backends swap without edits.
pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut first = Order::new();
    first.add_item("short", 50.0, 2);
    let manager = OrderManager::new(RedisStore::default());
    writeln!(out, "{}", manager.save_order(&first))?;

    let mut second = Order::new();
    second.add_item("mont", 200.0, 1);
    let manager = OrderManager::new(MySqlConnection::default());
    writeln!(out, "{}", manager.save_order(&second))?;

    Ok(())
}
