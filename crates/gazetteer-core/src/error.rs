// crates/gazetteer-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading or caching a gazetteer.
///
/// Matching itself never fails; only the I/O side of the crate returns
/// these.
#[derive(Debug, Error)]
pub enum GazetteerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown administrative level: {0:?} (expected district, upazila or union)")]
    UnknownLevel(String),
}

pub type Result<T> = std::result::Result<T, GazetteerError>;
