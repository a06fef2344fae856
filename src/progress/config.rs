//! Configuration for a progress bar.
//!
//! [`ProgressBarConfig`] holds every display option with sensible defaults;
//! [`ProgressBarBuilder`](crate::ProgressBarBuilder) fills it in.
//!
//! # Examples
//!
//! ```rust
//! use barnone::progress::ProgressBarConfig;
//!
//! let config = ProgressBarConfig {
//!     width: 20,
//!     prefix: "Indexing".into(),
//!     ..ProgressBarConfig::default()
//! };
//! assert!(config.use_color);
//! ```

use crate::progress::BarStyle;
use crate::utils::GradientEdges;

/// Default glyph width of the bar.
pub const DEFAULT_WIDTH: usize = 40;

/// Display options for a [`ProgressBar`](crate::ProgressBar).
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBarConfig {
    /// Number of glyphs in the bar.
    pub width: usize,
    /// Text rendered before the bar.
    pub prefix: String,
    /// Text rendered at the end of the line.
    pub suffix: String,
    /// Tint the filled glyphs with the gradient.
    pub use_color: bool,
    /// Start timing as soon as the bar is built.
    pub auto_start: bool,
    /// Glyphs for the bar.
    pub style: BarStyle,
    /// Where the gradient switches segments.
    pub gradient: GradientEdges,
}

impl Default for ProgressBarConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            prefix: String::new(),
            suffix: String::new(),
            use_color: true,
            auto_start: true,
            style: BarStyle::default(),
            gradient: GradientEdges::default(),
        }
    }
}
