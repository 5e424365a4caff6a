//! # CLI Error Type
//!
//! Pricing itself cannot fail, and configuration always falls back to
//! defaults. What can fail is writing the receipt:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  write_receipt ────── stdout closed ──────► io::Error ──► CliError      │
//! │                                                           │             │
//! │                                                           ▼             │
//! │                                               main prints, exits 1      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Errors surfaced by the `tally` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing the receipt failed (e.g. stdout is a closed pipe).
    #[error("Failed to write receipt: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;
