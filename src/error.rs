//! Error types for the radio inventory

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for wmon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the radio inventory
#[derive(Error, Debug)]
pub enum Error {
    /// The phy registry listed successfully but contained no radios
    #[error("No WiFi radios detected")]
    NoRadiosDetected,

    /// A sysfs directory could not be listed (missing, permission denied)
    #[error("Failed to read {}: {source}", path.display())]
    PathUnreadable {
        /// The directory that could not be listed
        path: PathBuf,
        /// The underlying OS error
        source: io::Error,
    },

    /// I/O error while writing the report
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
