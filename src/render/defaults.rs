//! Constants shared by the style vocabulary, the path builder and the SVG writer.

/// Smoothness of [`Style::Continuous`](crate::Style::Continuous).
pub const CONTINUOUS_SMOOTHNESS: f64 = 0.6;

/// Smoothness of [`Style::SMOOTH`](crate::Style::SMOOTH), the end of the nominal range.
pub const MAX_SMOOTHNESS: f64 = 1.0;

/// Divisor for legacy percent-scaled smoothness (`0..100`).
pub const PERCENT_SCALE: f64 = 100.0;

/// Significant digits used when printing SVG numbers.
pub const SVG_SIG_FIGS: i32 = 6;

/// Magnitudes below this print as `0` in SVG output.
pub const SVG_ZERO_SNAP: f64 = 1e-9;

/// Two points closer than this are treated as coincident.
pub const POINT_EPSILON: f64 = 1e-9;
