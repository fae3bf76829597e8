//! Error type shared by every fallible operation in the crate.

/// Errors raised while loading cities, validating tours, or running a search.
///
/// `InvalidTour` and `InvalidInput` signal broken internal invariants: they
/// should never fire during a normal run, and tests assert exactly that.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("city table is empty")]
    EmptyCityTable,

    #[error("invalid tour: {0}")]
    InvalidTour(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
