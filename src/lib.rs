//! Barnone draws a single-line terminal progress bar that repaints in place.
//!
//! The line shows a gradient-colored bar, the percentage, the step counter,
//! the elapsed time and an estimate of the time remaining:
//!
//! ```text
//! Building |████████████░░░░░░░░| 60% 6/10 2.1s ETA 1.4s
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use barnone::{Error, ProgressBar};
//!
//! # fn main() -> Result<(), Error> {
//! let mut bar = ProgressBar::new(10)?;
//! for _ in 0..10 {
//!     // ... one unit of work ...
//!     bar.inc()?;
//! }
//! bar.finish()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`progress`] - The `ProgressBar`, its builder, configuration and repaint primitive
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`utils`] - Color gradient and duration formatting helpers

pub mod error;
pub mod progress;
pub mod utils;

pub use error::{Error, Result};
pub use progress::{BarStyle, LineWriter, ProgressBar, ProgressBarBuilder, ProgressBarConfig};
pub use utils::{format_time, gradient_color, gradient_color_with_edges};
