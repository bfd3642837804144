use thiserror::Error;

/// Structural errors raised by graph mutation, traffic configuration and loading.
///
/// Absence (no path, unknown stop in a query, empty candidate set) is never
/// reported through this type, queries return `Option` instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Stop {0} already exists")]
    DuplicateStop(String),
    #[error("Unknown stop: {0}")]
    UnknownStop(String),
    #[error("Invalid route distance: {0} (must be a non-negative number)")]
    InvalidDistance(f64),
    #[error("Route {from} -> {to} already exists")]
    DuplicateRoute { from: String, to: String },
    #[error("Invalid traffic period: {0:?}")]
    InvalidPeriod(String),
    #[error("Invalid zone: {0:?}")]
    InvalidZone(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
