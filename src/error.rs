//! Error handling for the barnone library.
//!
//! Lifecycle misuse (starting twice, updating before start) and invalid
//! construction parameters are reported through [`Error`]. Running past the
//! configured total is not an error; the bar renders a warning instead.

use std::io;
use thiserror::Error;

/// Errors that can happen when driving a progress bar.
#[derive(Error, Debug)]
pub enum Error {
    /// [`start`](crate::ProgressBar::start) was called on a bar that is already running.
    #[error("Progress bar has already been started.")]
    AlreadyStarted,

    /// The bar was advanced before [`start`](crate::ProgressBar::start) was called.
    #[error("Progress bar has not been started yet.")]
    NotStarted,

    /// The total number of steps must be greater than zero.
    #[error("Invalid total: expected at least one step")]
    InvalidTotal,

    /// The bar must be at least one glyph wide.
    #[error("Invalid width: expected at least one column")]
    InvalidWidth,

    /// I/O Error.
    ///
    /// Wraps failures of the output sink while writing or flushing a line.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a barnone error.
pub type Result<T> = std::result::Result<T, Error>;
