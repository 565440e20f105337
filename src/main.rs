use std::io::Write;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so stdout carries only the demo output.
    // Override with RUST_LOG, e.g. RUST_LOG=solid_orders=debug
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,solid_orders=info")),
        )
        .init();

    tracing::info!("Starting order principles demo");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    solid_orders::demos::run_all(&mut out)?;
    out.flush()?;

    tracing::info!("Demo complete");

    Ok(())
}
