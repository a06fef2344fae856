//! Glyphs used to draw the bar.
//!
//! # Examples
//!
//! ```rust
//! use barnone::progress::BarStyle;
//!
//! let style = BarStyle::ASCII;
//! assert_eq!(style.filled(3), "###");
//! assert_eq!(style.empty(2), "--");
//! ```

/// Pair of glyphs for the completed and remaining parts of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    /// Glyph for completed steps.
    pub fill: char,
    /// Glyph for remaining steps.
    pub empty: char,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self::SHADE
    }
}

impl BarStyle {
    /// Full blocks over light shade: `"█████░░░░░"`.
    pub const SHADE: BarStyle = BarStyle::new('█', '░');
    /// Full blocks over blanks: `"█████     "`.
    pub const BLOCK: BarStyle = BarStyle::new('█', ' ');
    /// Heavy line over light line: `"━━━━━─────"`.
    pub const LINE: BarStyle = BarStyle::new('━', '─');
    /// Plain ASCII for terminals without box drawing: `"#####-----"`.
    pub const ASCII: BarStyle = BarStyle::new('#', '-');

    /// Create a new [`BarStyle`].
    pub const fn new(fill: char, empty: char) -> Self {
        Self { fill, empty }
    }

    /// `count` fill glyphs.
    pub fn filled(&self, count: usize) -> String {
        std::iter::repeat(self.fill).take(count).collect()
    }

    /// `count` empty glyphs.
    pub fn empty(&self, count: usize) -> String {
        std::iter::repeat(self.empty).take(count).collect()
    }
}
