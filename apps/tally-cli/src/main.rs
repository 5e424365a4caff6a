//! # Tally Entry Point
//!
//! Prices the demo cart and prints the receipt:
//!
//! ```text
//! $ tally
//! Book ISBN:ISBN-1234 cost = 40
//! Book ISBN:ISBN-5678 has a high-price discount. Discounted cost = 95
//! Banana cost = 10
//! Apple cost = 12
//! Total cost = 157
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    match tally_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
