//! # Tally CLI Library
//!
//! Console driver for Tally. Builds the demo cart, prices it with
//! `tally-core` and writes the receipt to stdout.
//!
//! ## Module Organization
//! ```text
//! tally_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── Log filter configuration
//! └── error.rs        ◄─── CLI error type
//! ```
//!
//! ## Output Channels
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdout  ◄── receipt lines only (one per item, then the total)         │
//! │  stderr  ◄── tracing events (filtered by RUST_LOG, default "warn")     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;

use std::io::{self, Write};

use tally_core::{Book, Cart, Fruit, Money, PricingPolicy, Receipt};
use tracing::{debug, info};

use config::AppConfig;
use error::CliResult;

/// Runs the CLI.
///
/// ## Startup Sequence
/// 1. Load configuration (log filter only)
/// 2. Initialize logging
/// 3. Build the demo cart
/// 4. Check out with the fixed pricing policy and write the receipt to stdout
pub fn run() -> CliResult<()> {
    let config = AppConfig::load();
    init_tracing(&config);
    debug!(log_filter = %config.log_filter, "Configuration loaded");

    let cart = demo_cart();
    info!(items = cart.len(), "Pricing demo cart");

    let receipt = cart.checkout(&PricingPolicy::default());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_receipt(&mut out, &receipt)?;
    out.flush()?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - one event per priced item
/// - `RUST_LOG=tally_core=trace` - core crate only
/// - Default: WARN (negative costs only)
fn init_tracing(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(io::stderr)
        .init();
}

/// The fixed cart the binary prices.
pub fn demo_cart() -> Cart {
    let mut cart = Cart::new();
    cart.push(Book::new(Money::from_units(40), "ISBN-1234"));
    cart.push(Book::new(Money::from_units(100), "ISBN-5678"));
    cart.push(Fruit::new(Money::from_units(2), 5, "Banana"));
    cart.push(Fruit::new(Money::from_units(3), 4, "Apple"));
    cart
}

/// Writes one line per item, in cart order, then the total line.
pub fn write_receipt<W: Write>(out: &mut W, receipt: &Receipt) -> io::Result<()> {
    write!(out, "{}", receipt)
}
