use std::path::PathBuf;

use thiserror::Error;

/// Result alias for the application crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Startup errors. Search outcomes are never errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The grid needs at least one row.
    #[error("--rows must be at least 1")]
    InvalidRows,

    /// Cells would be zero pixels wide.
    #[error("--width {width} is smaller than --rows {rows}; cells need at least one pixel")]
    WidthTooSmall { width: i32, rows: usize },

    /// The idle poll rate is outside 1..=1000.
    #[error("--fps must be between 1 and 1000")]
    InvalidFps,

    /// The log file could not be opened.
    #[error("cannot open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
