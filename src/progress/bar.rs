//! The progress bar state machine and its renderer.
//!
//! A [`ProgressBar`] counts completed steps against a fixed total. Each call to
//! [`update`](ProgressBar::update) recomputes the percentage, fill and ETA and
//! repaints the current terminal line through a [`LineWriter`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use barnone::ProgressBar;
//!
//! # fn main() -> barnone::Result<()> {
//! let files = ["a.txt", "b.txt", "c.txt"];
//! let mut bar = ProgressBar::builder(files.len() as u64)
//!     .prefix("Copying")
//!     .build()?;
//!
//! for _file in files {
//!     // ... copy the file ...
//!     bar.inc()?;
//! }
//! bar.finish()?;
//! # Ok(())
//! # }
//! ```

use super::builder::ProgressBarBuilder;
use super::config::ProgressBarConfig;
use super::display::{visible_len, LineWriter};
use crate::utils::{format_duration, format_time, RESET};
use crate::{Error, Result};

use std::io::{Stdout, Write};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Single-line progress bar writing to `W` (standard output by default).
///
/// The bar is not synchronized: share it across threads only behind a lock
/// of your own.
#[derive(Debug)]
pub struct ProgressBar<W: Write = Stdout> {
    /// Number of steps expected.
    total: u64,
    /// Number of steps completed so far. May exceed `total`.
    current: u64,
    /// Display options.
    config: ProgressBarConfig,
    /// Whether [`start`](Self::start) has run.
    started: bool,
    /// When the bar was started.
    start_time: Option<Instant>,
    /// Sink and line-length bookkeeping.
    writer: LineWriter<W>,
}

impl ProgressBar<Stdout> {
    /// Create a started bar on standard output with the default options.
    pub fn new(total: u64) -> Result<Self> {
        ProgressBarBuilder::new(total).build()
    }

    /// Create a [`ProgressBarBuilder`] for a bar of `total` steps.
    pub fn builder(total: u64) -> ProgressBarBuilder<Stdout> {
        ProgressBarBuilder::new(total)
    }
}

impl<W: Write> ProgressBar<W> {
    pub(crate) fn from_parts(total: u64, config: ProgressBarConfig, sink: W) -> Self {
        Self {
            total,
            current: 0,
            config,
            started: false,
            start_time: None,
            writer: LineWriter::new(sink),
        }
    }

    /// Start timing.
    ///
    /// Fails with [`Error::AlreadyStarted`] if the bar is already running.
    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Err(Error::AlreadyStarted);
        }
        self.started = true;
        self.start_time = Some(Instant::now());
        debug!(total = self.total, "Progress bar started");
        Ok(())
    }

    /// Record `step` completed steps and repaint the line.
    ///
    /// Fails with [`Error::NotStarted`] if [`start`](Self::start) has not run.
    /// Going past the total is allowed and shows a warning on the line.
    pub fn update(&mut self, step: u64) -> Result<()> {
        if !self.started {
            return Err(Error::NotStarted);
        }

        let was_overrun = self.is_overrun();
        self.current = self.current.saturating_add(step);
        if !was_overrun && self.is_overrun() {
            warn!(
                current = self.current,
                total = self.total,
                "Progress bar overrun"
            );
        }

        self.render(false)
    }

    /// Record a single completed step.
    pub fn inc(&mut self) -> Result<()> {
        self.update(1)
    }

    /// Jump to completion and end the line.
    ///
    /// Raises the count to the total (an overrun count is kept), repaints once
    /// more and moves to a new line.
    ///
    /// Fails with [`Error::NotStarted`] if [`start`](Self::start) has not run.
    pub fn finish(&mut self) -> Result<()> {
        if !self.started {
            return Err(Error::NotStarted);
        }
        self.current = self.current.max(self.total);
        debug!(
            current = self.current,
            total = self.total,
            elapsed = ?self.elapsed(),
            "Progress bar finished"
        );
        self.render(true)
    }

    /// Number of steps completed so far.
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Number of steps expected.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Whether the bar has been started.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether the count has reached the total.
    pub fn is_complete(&self) -> bool {
        self.current >= self.total
    }

    /// Whether the count has gone past the total.
    pub fn is_overrun(&self) -> bool {
        self.current > self.total
    }

    /// Rounded percentage of completion. Exceeds 100 on overrun.
    pub fn percent(&self) -> u64 {
        (100.0 * self.current as f64 / self.total as f64).round() as u64
    }

    /// Time since the bar was started, zero before that.
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|start| start.elapsed())
            .unwrap_or_default()
    }

    /// Estimated seconds remaining.
    ///
    /// `None` until the first step has been recorded, `0.0` once complete.
    pub fn eta(&self) -> Option<f64> {
        self.eta_from(self.elapsed().as_secs_f64())
    }

    /// Display options of this bar.
    pub fn config(&self) -> &ProgressBarConfig {
        &self.config
    }

    /// Get a reference to the sink.
    pub fn get_ref(&self) -> &W {
        self.writer.get_ref()
    }

    /// Give the sink back.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn eta_from(&self, elapsed: f64) -> Option<f64> {
        if self.current >= self.total {
            Some(0.0)
        } else if self.current == 0 {
            None
        } else {
            Some(elapsed / self.current as f64 * (self.total - self.current) as f64)
        }
    }

    fn render(&mut self, newline: bool) -> Result<()> {
        let line = self.render_line();

        // A shorter line keeps the old baseline and gets padded over it.
        let pad_line = visible_len(&line) >= self.writer.last_line_len();
        self.writer.write(&line, pad_line, !newline)?;

        if newline {
            // The cursor is on a fresh line, so the baseline drops to zero.
            self.writer.write("\n", true, true)?;
        }
        Ok(())
    }

    fn render_line(&self) -> String {
        let width = self.config.width;
        let fraction = self.current.min(self.total) as f64 / self.total as f64;
        let filled = ((fraction * width as f64).floor() as usize).min(width);

        let mut bar = self.config.style.filled(filled);
        if self.config.use_color && filled > 0 {
            let color = self.config.gradient.rgb(fraction).to_ansi();
            bar = format!("{color}{bar}{RESET}");
        }
        bar.push_str(&self.config.style.empty(width - filled));

        let elapsed = self.elapsed();
        let eta = match self.eta_from(elapsed.as_secs_f64()) {
            Some(seconds) => format_time(seconds),
            None => "--".to_string(),
        };

        let mut line = String::from("\r");
        if !self.config.prefix.is_empty() {
            line.push_str(&self.config.prefix);
            line.push(' ');
        }
        line.push_str(&format!(
            "|{bar}| {}% {}/{} {} ETA {eta}",
            self.percent(),
            self.current,
            self.total,
            format_duration(elapsed),
        ));
        if self.is_overrun() {
            line.push_str(&format!(
                " Warning: Progress bar overrun. Current Step: {} of {}.",
                self.current, self.total
            ));
        }
        if !self.config.suffix.is_empty() {
            line.push(' ');
            line.push_str(&self.config.suffix);
        }
        line
    }
}
