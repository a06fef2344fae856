//! Tests for the in-place repaint primitive.

use barnone::progress::visible_len;
use barnone::LineWriter;

mod common;
use common::helpers::*;

#[test]
fn test_write_basic_message_sets_last_line_len_and_writes() {
    let buffer = SharedBuffer::new();
    let mut writer = LineWriter::new(buffer.clone());

    writer.write("Hello World", true, true).unwrap();
    assert_eq!(buffer.contents(), "Hello World");
    assert_eq!(writer.last_line_len(), "Hello World".len());
}

#[test]
fn test_write_message_pads_to_last_line_len() {
    let buffer = SharedBuffer::new();
    let mut writer = LineWriter::new(buffer.clone());
    writer.set_last_line_len(15);

    writer.write("Short", false, true).unwrap();
    assert_eq!(buffer.contents(), format!("Short{}", " ".repeat(15 - "Short".len())));
    assert_eq!(writer.last_line_len(), 15);
}

#[test]
fn test_write_message_updates_last_line_len_when_pad_line_true() {
    let mut writer = LineWriter::new(SharedBuffer::new());
    writer.set_last_line_len(5);

    writer.write("Longer message", true, true).unwrap();
    assert_eq!(writer.last_line_len(), "Longer message".len());
}

#[test]
fn test_write_shorter_baseline_with_pad_line_true() {
    let buffer = SharedBuffer::new();
    let mut writer = LineWriter::new(buffer.clone());
    writer.set_last_line_len(20);

    writer.write("tiny", true, false).unwrap();
    assert_eq!(buffer.contents(), "tiny");
    assert_eq!(writer.last_line_len(), 4);
}

#[test]
fn test_write_flush_false() {
    let buffer = SharedBuffer::new();
    let mut writer = LineWriter::new(buffer.clone());

    writer.write("Test", true, false).unwrap();
    assert_eq!(buffer.flush_count(), 0);
}

#[test]
fn test_write_flush_true() {
    let buffer = SharedBuffer::new();
    let mut writer = LineWriter::new(buffer.clone());

    writer.write("Test", true, true).unwrap();
    assert_eq!(buffer.flush_count(), 1);
}

#[test]
fn test_write_pads_by_visible_width() {
    let buffer = SharedBuffer::new();
    let mut writer = LineWriter::new(buffer.clone());
    writer.write("\r0123456789", true, false).unwrap();
    assert_eq!(writer.last_line_len(), 10);

    writer.write("\r\x1b[38;2;1;2;3mab\x1b[0m", false, false).unwrap();
    let repaint = buffer.contents().rsplit('\r').next().unwrap().to_string();
    assert_eq!(visible_len(&repaint), 10);
    assert!(repaint.ends_with(&" ".repeat(8)));
}

#[test]
fn test_write_counts_visible_characters_only() {
    let buffer = SharedBuffer::new();
    let mut writer = LineWriter::new(buffer.clone());

    writer.write("\x1b[31mab", true, false).unwrap();
    assert_eq!(buffer.contents(), "\x1b[31mab");
    assert_eq!(writer.last_line_len(), 2);

    writer.write("\r\x1b[31mab\x1b[0m", true, false).unwrap();
    assert_eq!(writer.last_line_len(), 2);
}

#[test]
fn test_write_error_propagates() {
    let mut writer = LineWriter::new(BrokenSink);
    assert!(writer.write("x", true, true).is_err());
    assert_eq!(writer.last_line_len(), 0);
}
