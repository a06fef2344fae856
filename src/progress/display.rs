//! In-place line repainting.
//!
//! [`LineWriter`] is the only place that touches the output sink. It keeps
//! track of how long the last line was so a shorter repaint can be padded
//! with spaces, erasing what the longer line left behind.
//!
//! # Examples
//!
//! ```rust
//! use barnone::progress::LineWriter;
//!
//! # fn main() -> barnone::Result<()> {
//! let mut writer = LineWriter::new(Vec::new());
//! writer.write("\rloading...", true, true)?;
//! writer.write("\rdone", false, true)?;
//!
//! let out = String::from_utf8(writer.into_inner()).unwrap();
//! assert_eq!(out, format!("\rloading...\rdone{}", " ".repeat(6)));
//! # Ok(())
//! # }
//! ```

use crate::Result;
use std::io::Write;

/// Sink wrapper implementing the repaint primitive.
#[derive(Debug)]
pub struct LineWriter<W: Write> {
    /// The externally owned output sink.
    sink: W,
    /// Visible length of the last baseline line.
    last_line_len: usize,
}

impl<W: Write> LineWriter<W> {
    /// Wrap a sink. Nothing has been written yet, so the baseline is zero.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            last_line_len: 0,
        }
    }

    /// Write `text` to the sink.
    ///
    /// Lengths are counted in visible characters (see [`visible_len`]), not
    /// bytes or `char`s of `text`: a leading `\r` and ANSI escapes count as
    /// zero, so `"\x1b[31mab"` has length 2.
    ///
    /// # Arguments
    /// * `text` - The line to display, including any leading `\r`
    /// * `pad_line` - When `true`, `text` becomes the new baseline length and
    ///   is written as is. When `false`, trailing spaces are appended so the
    ///   visible length reaches the current baseline, which is left unchanged.
    /// * `flush` - Flush the sink after writing
    pub fn write(&mut self, text: &str, pad_line: bool, flush: bool) -> Result<()> {
        let len = visible_len(text);
        self.sink.write_all(text.as_bytes())?;

        if pad_line {
            self.last_line_len = len;
        } else if len < self.last_line_len {
            let padding = " ".repeat(self.last_line_len - len);
            self.sink.write_all(padding.as_bytes())?;
        }

        if flush {
            self.sink.flush()?;
        }
        Ok(())
    }

    /// Length of the current baseline.
    pub fn last_line_len(&self) -> usize {
        self.last_line_len
    }

    /// Override the baseline, e.g. when something else already drew on the line.
    pub fn set_last_line_len(&mut self, len: usize) {
        self.last_line_len = len;
    }

    /// Get a reference to the sink.
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Give the sink back.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

/// Number of characters a line occupies on screen.
///
/// ANSI escape sequences and control characters such as `\r` take no room.
pub fn visible_len(text: &str) -> usize {
    console::strip_ansi_codes(text)
        .chars()
        .filter(|c| !c.is_control())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_len_ignores_escapes() {
        assert_eq!(visible_len("abc"), 3);
        assert_eq!(visible_len("\r\x1b[38;2;1;2;3m██\x1b[0m|"), 3);
    }

    #[test]
    fn test_padding_longer_text_is_not_truncated() {
        let mut writer = LineWriter::new(Vec::new());
        writer.set_last_line_len(2);
        writer.write("abcd", false, false).unwrap();
        assert_eq!(writer.get_ref().as_slice(), b"abcd");
        assert_eq!(writer.last_line_len(), 2);
    }
}
