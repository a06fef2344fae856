//! Builder pattern implementation for creating [`ProgressBar`] instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust,no_run
//! use barnone::ProgressBar;
//!
//! # fn main() -> barnone::Result<()> {
//! let mut bar = ProgressBar::builder(120)
//!     .width(30)
//!     .prefix("Resizing")
//!     .build()?;
//! bar.inc()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Sink
//!
//! ```rust
//! use barnone::{BarStyle, ProgressBar};
//!
//! # fn main() -> barnone::Result<()> {
//! let mut bar = ProgressBar::builder(2)
//!     .use_color(false)
//!     .style(BarStyle::ASCII)
//!     .sink(Vec::new())
//!     .build()?;
//! bar.update(2)?;
//! let out = String::from_utf8(bar.into_inner()).unwrap();
//! assert!(out.contains("100%"));
//! # Ok(())
//! # }
//! ```

use super::{bar::ProgressBar, config::ProgressBarConfig};
use crate::progress::BarStyle;
use crate::utils::GradientEdges;
use crate::{Error, Result};

use std::io::{self, Stdout, Write};

/// A builder used to create a [`ProgressBar`].
#[derive(Debug)]
pub struct ProgressBarBuilder<W: Write = Stdout> {
    total: u64,
    config: ProgressBarConfig,
    sink: W,
}

impl ProgressBarBuilder<Stdout> {
    /// Creates a builder with the default options, writing to standard output.
    pub fn new(total: u64) -> Self {
        Self {
            total,
            config: ProgressBarConfig::default(),
            sink: io::stdout(),
        }
    }
}

impl<W: Write> ProgressBarBuilder<W> {
    /// Replace the whole configuration.
    pub fn config(mut self, config: ProgressBarConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the number of glyphs in the bar.
    pub fn width(mut self, width: usize) -> Self {
        self.config.width = width;
        self
    }

    /// Set the text rendered before the bar.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    /// Set the text rendered at the end of the line.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.suffix = suffix.into();
        self
    }

    /// Enable or disable the color gradient.
    pub fn use_color(mut self, use_color: bool) -> Self {
        self.config.use_color = use_color;
        self
    }

    /// Start the bar as part of [`build`](Self::build).
    pub fn auto_start(mut self, auto_start: bool) -> Self {
        self.config.auto_start = auto_start;
        self
    }

    /// Set the bar glyphs.
    pub fn style(mut self, style: BarStyle) -> Self {
        self.config.style = style;
        self
    }

    /// Move the gradient segment edges.
    pub fn gradient_edges(mut self, edge: f64, edge2: f64) -> Self {
        self.config.gradient = GradientEdges::new(edge, edge2);
        self
    }

    /// Write to `sink` instead of standard output.
    pub fn sink<S: Write>(self, sink: S) -> ProgressBarBuilder<S> {
        ProgressBarBuilder {
            total: self.total,
            config: self.config,
            sink,
        }
    }

    /// Create the [`ProgressBar`], starting it when `auto_start` is set.
    pub fn build(self) -> Result<ProgressBar<W>> {
        if self.total == 0 {
            return Err(Error::InvalidTotal);
        }
        if self.config.width == 0 {
            return Err(Error::InvalidWidth);
        }

        let auto_start = self.config.auto_start;
        let mut bar = ProgressBar::from_parts(self.total, self.config, self.sink);
        if auto_start {
            bar.start()?;
        }
        Ok(bar)
    }
}
