//! App-layer error type.
//!
//! Wraps everything the CLI can fail on: terminal I/O, catalog parsing, and
//! domain errors bubbling up from the core.

use thiserror::Error;

use storefront_core::CoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type AppResult<T> = Result<T, AppError>;
