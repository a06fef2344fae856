//! Progress module containing the progress bar and its rendering pieces.
//!
//! # Overview
//!
//! - `bar` - [`ProgressBar`], the step counter and line renderer
//! - `builder` - [`ProgressBarBuilder`] for configuring a bar
//! - `config` - [`ProgressBarConfig`] and its defaults
//! - `display` - [`LineWriter`], the in-place repaint primitive
//! - `style` - [`BarStyle`] glyph presets
//!
//! # Examples
//!
//! ## Quiet, Uncolored Bar
//!
//! ```rust
//! use barnone::progress::{BarStyle, ProgressBar};
//!
//! # fn main() -> barnone::Result<()> {
//! let mut bar = ProgressBar::builder(4)
//!     .width(8)
//!     .use_color(false)
//!     .style(BarStyle::ASCII)
//!     .sink(Vec::new())
//!     .build()?;
//! bar.update(2)?;
//! bar.finish()?;
//!
//! let out = String::from_utf8(bar.into_inner()).unwrap();
//! assert!(out.ends_with('\n'));
//! assert!(out.contains("|########| 100% 4/4"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Manual Start
//!
//! ```rust
//! use barnone::progress::ProgressBar;
//!
//! # fn main() -> barnone::Result<()> {
//! let mut bar = ProgressBar::builder(10)
//!     .auto_start(false)
//!     .sink(Vec::new())
//!     .build()?;
//! assert!(bar.inc().is_err());
//! bar.start()?;
//! bar.inc()?;
//! # Ok(())
//! # }
//! ```

pub(crate) mod bar;
pub(crate) mod builder;
pub(crate) mod config;
pub(crate) mod display;
pub(crate) mod style;

pub use bar::ProgressBar;
pub use builder::ProgressBarBuilder;
pub use config::{ProgressBarConfig, DEFAULT_WIDTH};
pub use display::{visible_len, LineWriter};
pub use style::BarStyle;
