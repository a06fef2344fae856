//! 24-bit ANSI color gradient used to tint the filled part of the bar.
//!
//! The gradient runs soft red → warm gold → deep green across three
//! segments split by two edges (0.4 and 0.65 by default).

/// ANSI sequence restoring the terminal's default colors.
pub const RESET: &str = "\x1b[0m";

/// Default edge between the red and gold segments.
pub const DEFAULT_EDGE: f64 = 0.4;
/// Default edge between the gold and green segments.
pub const DEFAULT_EDGE2: f64 = 0.65;

const SOFT_RED: Rgb = Rgb::new(230, 90, 90);
const WARM_GOLD: Rgb = Rgb::new(240, 200, 100);
const LEAF_GREEN: Rgb = Rgb::new(120, 180, 80);
const DEEP_GREEN: Rgb = Rgb::new(19, 154, 21);

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation towards `to`.
    ///
    /// Channels round to the nearest integer with ties to even, then
    /// saturate to `0..=255`.
    pub fn lerp(self, to: Rgb, t: f64) -> Self {
        let channel = |from: u8, to: u8| {
            let value = f64::from(from) + (f64::from(to) - f64::from(from)) * t;
            value.round_ties_even().clamp(0.0, 255.0) as u8
        };
        Self {
            r: channel(self.r, to.r),
            g: channel(self.g, to.g),
            b: channel(self.b, to.b),
        }
    }

    /// The "set foreground color" escape for this color.
    pub fn to_ansi(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

/// Edges splitting `[0, 1]` into the three gradient segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientEdges {
    pub edge: f64,
    pub edge2: f64,
}

impl Default for GradientEdges {
    fn default() -> Self {
        Self {
            edge: DEFAULT_EDGE,
            edge2: DEFAULT_EDGE2,
        }
    }
}

impl GradientEdges {
    pub fn new(edge: f64, edge2: f64) -> Self {
        Self { edge, edge2 }
    }

    /// Color for a completion fraction.
    ///
    /// `progress` is expected in `[0, 1]`. Values outside that range are not
    /// clamped; they extrapolate the nearest segment and each channel then
    /// saturates to `0..=255`.
    pub fn rgb(&self, progress: f64) -> Rgb {
        if progress < self.edge {
            let t = progress / self.edge;
            SOFT_RED.lerp(WARM_GOLD, t)
        } else if progress < self.edge2 {
            let t = (progress - self.edge) / (self.edge2 - self.edge);
            WARM_GOLD.lerp(LEAF_GREEN, t)
        } else {
            let t = (progress - self.edge2) / (1.0 - self.edge2);
            LEAF_GREEN.lerp(DEEP_GREEN, t)
        }
    }
}

/// Foreground escape for `progress` using the default edges.
///
/// ```rust
/// use barnone::utils::gradient_color;
///
/// assert_eq!(gradient_color(0.0), "\x1b[38;2;230;90;90m");
/// assert_eq!(gradient_color(1.0), "\x1b[38;2;19;154;21m");
/// ```
pub fn gradient_color(progress: f64) -> String {
    gradient_color_with_edges(progress, DEFAULT_EDGE, DEFAULT_EDGE2)
}

/// Foreground escape for `progress` using custom segment edges.
pub fn gradient_color_with_edges(progress: f64, edge: f64, edge2: f64) -> String {
    GradientEdges::new(edge, edge2).rgb(progress).to_ansi()
}
