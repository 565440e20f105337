// ============================================================================
// Demos - one runnable walkthrough per design principle
// ============================================================================

use std::io::Write;

use anyhow::Result;

pub mod single_responsibility;
pub mod open_closed;
pub mod liskov_substitution;
pub mod interface_segregation;
pub mod dependency_inversion;

pub type Demo = fn(&mut dyn Write) -> Result<()>;

pub const ALL: [(&str, Demo); 5] = [
    ("Single Responsibility", single_responsibility::run),
    ("Open/Closed", open_closed::run),
    ("Liskov Substitution", liskov_substitution::run),
    ("Interface Segregation", interface_segregation::run),
    ("Dependency Inversion", dependency_inversion::run),
];

/// Run every demo in order, each under its own heading.
pub fn run_all(out: &mut dyn Write) -> Result<()> {
    for (title, demo) in ALL {
        tracing::info!(demo = title, "Running demo");
        writeln!(out, "== {} ==", title)?;
        demo(out)?;
        writeln!(out)?;
    }
    Ok(())
}
