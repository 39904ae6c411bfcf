//! Error types for genalg
//!
//! The engine is fail-fast: invalid configuration is rejected at construction
//! and internal selection inconsistencies are fatal. Nothing is retried.

use thiserror::Error;

/// Top-level error type for engine operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid engine parameters, detected at construction
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// The cumulative selection distribution failed to cover a drawn value.
    ///
    /// The distribution ends at 1.0 (up to floating-point slack) and draws are
    /// taken from [0, 1), so this indicates a bug in distribution construction.
    #[error("Selection draw {draw} not covered by cumulative distribution")]
    SelectionConsistency {
        /// The uniform random value that no cumulative entry exceeded
        draw: f64,
    },
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;
