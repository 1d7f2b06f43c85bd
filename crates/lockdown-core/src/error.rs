// crates/lockdown-core/src/error.rs
use thiserror::Error;

/// Every failure the library surfaces.
///
/// Skipped input lines are *not* errors; they are reported as
/// [`crate::pipeline::LineOutcome`] variants. Anything in here aborts the run.
#[derive(Debug, Error)]
pub enum LockdownError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{service} answered {status} for {url}")]
    Status {
        service: &'static str,
        status: u16,
        url: String,
    },

    /// The remote service answered, but not with the shape we expect.
    #[error("unexpected {service} response: {detail}")]
    Schema {
        service: &'static str,
        detail: String,
    },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, LockdownError>;
