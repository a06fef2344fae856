//! Formatting helpers shared by the renderer.
//!
//! These are pure functions with no knowledge of the bar itself:
//!
//! - [`color`] - the red → gold → green foreground gradient
//! - [`time`] - compact duration strings for elapsed and ETA readouts
//!
//! # Examples
//!
//! ```rust
//! use barnone::utils::{format_time, gradient_color, RESET};
//!
//! let tinted = format!("{}███{}", gradient_color(0.5), RESET);
//! assert!(tinted.starts_with("\x1b[38;2;"));
//! assert_eq!(format_time(45.0), "45s");
//! ```

pub mod color;
pub mod time;

// Re-export commonly used utilities
pub use color::{gradient_color, gradient_color_with_edges, GradientEdges, Rgb, RESET};
pub use time::{format_duration, format_time};
