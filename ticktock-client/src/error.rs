use thiserror::Error;

/// Failure classes for a timesheet fetch. The UI collapses all of
/// these into a single error display; the distinction only matters
/// for diagnostics.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
}
