//! Error types for feedsift.
//!
//! Field- and node-level failures are recovered inside the pipeline and
//! never reach this enum; the variants below represent total loss of
//! output, the only condition a scan surfaces to its caller.

/// Error type for scan and persistence operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The tabular destination could not be written.
    #[error("record sink failed: {0}")]
    Sink(#[from] csv::Error),

    /// The diagnostic snapshot destination could not be written.
    #[error("diagnostic snapshot failed: {0}")]
    Diagnostic(std::io::Error),
}

/// Result type alias for scan and persistence operations.
pub type Result<T> = std::result::Result<T, Error>;
