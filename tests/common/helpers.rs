use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use barnone::{BarStyle, ProgressBar};

// Common escape fragments
pub const SET_COLOR: &str = "\x1b[38;2;";
pub const RESET_COLOR: &str = "\x1b[0m";

/// In-memory sink that can be inspected while a bar still owns a clone of it.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
    flushes: Arc<Mutex<usize>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        String::from_utf8(self.bytes.lock().unwrap().clone()).expect("Output is not UTF-8")
    }

    /// Number of times the sink was flushed
    pub fn flush_count(&self) -> usize {
        *self.flushes.lock().unwrap()
    }

    /// Text of the most recent repaint, with padding removed
    pub fn last_line(&self) -> String {
        last_line(&self.contents())
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        *self.flushes.lock().unwrap() += 1;
        Ok(())
    }
}

/// Sink whose every write fails
pub struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Last repaint of a captured output, ignoring the final newline and padding
pub fn last_line(output: &str) -> String {
    output
        .trim_end()
        .rsplit(['\r', '\n'])
        .next()
        .unwrap_or_default()
        .trim_end()
        .to_string()
}

/// Creates a started bar writing to a shared buffer
pub fn create_test_bar(total: u64, width: usize) -> (ProgressBar<SharedBuffer>, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let bar = ProgressBar::builder(total)
        .width(width)
        .sink(buffer.clone())
        .build()
        .expect("Failed to build progress bar");
    (bar, buffer)
}

/// Creates a started, uncolored ASCII bar writing to a shared buffer
pub fn create_plain_bar(total: u64, width: usize) -> (ProgressBar<SharedBuffer>, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let bar = ProgressBar::builder(total)
        .width(width)
        .use_color(false)
        .style(BarStyle::ASCII)
        .sink(buffer.clone())
        .build()
        .expect("Failed to build progress bar");
    (bar, buffer)
}

/// Asserts that the output carries no color escapes at all
pub fn assert_no_color(output: &str) {
    assert!(!output.contains(SET_COLOR), "Unexpected color in {:?}", output);
    assert!(!output.contains(RESET_COLOR), "Unexpected reset in {:?}", output);
}
