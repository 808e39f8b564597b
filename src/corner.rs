//! Per-corner configuration and corner identifiers.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use crate::types::{NumericError, check_finite, check_non_negative};

/// Physical corner of a rectangle, listed in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopRight,
    BottomRight,
    BottomLeft,
    TopLeft,
}

impl Corner {
    /// Drawing order of the outline, starting after the top-left corner.
    pub const CLOCKWISE: [Corner; 4] = [
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
        Corner::TopLeft,
    ];
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Corner::TopRight => "top-right",
            Corner::BottomRight => "bottom-right",
            Corner::BottomLeft => "bottom-left",
            Corner::TopLeft => "top-left",
        };
        f.write_str(name)
    }
}

/// Horizontal layout direction used to resolve leading/trailing corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    /// Map `(leading, trailing)` values to `(left, right)`.
    #[inline]
    pub fn resolve<T>(self, leading: T, trailing: T) -> (T, T) {
        match self {
            LayoutDirection::LeftToRight => (leading, trailing),
            LayoutDirection::RightToLeft => (trailing, leading),
        }
    }
}

/// A set of logical corners.
///
/// Only used to decide which corners receive a radius; it carries no geometry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Corners(u8);

impl Corners {
    pub const NONE: Corners = Corners(0);
    pub const TOP_LEADING: Corners = Corners(1 << 0);
    pub const TOP_TRAILING: Corners = Corners(1 << 1);
    pub const BOTTOM_LEADING: Corners = Corners(1 << 2);
    pub const BOTTOM_TRAILING: Corners = Corners(1 << 3);

    pub const ALL: Corners = Corners(0b1111);
    pub const TOP: Corners = Corners(Self::TOP_LEADING.0 | Self::TOP_TRAILING.0);
    pub const BOTTOM: Corners = Corners(Self::BOTTOM_LEADING.0 | Self::BOTTOM_TRAILING.0);
    pub const LEADING: Corners = Corners(Self::TOP_LEADING.0 | Self::BOTTOM_LEADING.0);
    pub const TRAILING: Corners = Corners(Self::TOP_TRAILING.0 | Self::BOTTOM_TRAILING.0);

    /// Same as [`Corners::LEADING`]; the left side in a left-to-right layout.
    pub const LEFT: Corners = Self::LEADING;
    /// Same as [`Corners::TRAILING`]; the right side in a left-to-right layout.
    pub const RIGHT: Corners = Self::TRAILING;

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Build from raw bits; bits outside the four corners are dropped.
    #[inline]
    pub const fn from_bits_truncate(bits: u8) -> Corners {
        Corners(bits & Self::ALL.0)
    }

    #[inline]
    pub const fn contains(self, other: Corners) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn insert(&mut self, other: Corners) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn remove(&mut self, other: Corners) {
        self.0 &= !other.0;
    }
}

impl BitOr for Corners {
    type Output = Corners;
    fn bitor(self, rhs: Corners) -> Corners {
        Corners(self.0 | rhs.0)
    }
}

impl BitOrAssign for Corners {
    fn bitor_assign(&mut self, rhs: Corners) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Corners {
    type Output = Corners;
    fn bitand(self, rhs: Corners) -> Corners {
        Corners(self.0 & rhs.0)
    }
}

impl Not for Corners {
    type Output = Corners;
    fn not(self) -> Corners {
        Corners(!self.0 & Self::ALL.0)
    }
}

impl fmt::Debug for Corners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Corners::TOP_LEADING, "TOP_LEADING"),
            (Corners::TOP_TRAILING, "TOP_TRAILING"),
            (Corners::BOTTOM_LEADING, "BOTTOM_LEADING"),
            (Corners::BOTTOM_TRAILING, "BOTTOM_TRAILING"),
        ];
        let mut set = f.debug_set();
        for (corner, name) in names {
            if self.contains(corner) {
                set.entry(&format_args!("{name}"));
            }
        }
        set.finish()
    }
}

/// Radius and smoothness of one corner.
///
/// `segment_length` is derived at construction and always equals
/// `radius * (1 + smoothness)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerSpec {
    radius: f64,
    smoothness: f64,
    segment_length: f64,
}

impl CornerSpec {
    /// A square corner.
    pub const SQUARE: CornerSpec = CornerSpec {
        radius: 0.0,
        smoothness: 0.0,
        segment_length: 0.0,
    };

    /// Create a corner, sanitizing the inputs.
    ///
    /// A negative or non-finite radius becomes `0`; a non-finite smoothness
    /// becomes `0`. Finite smoothness outside `0..=1` is kept.
    pub fn new(radius: f64, smoothness: f64) -> Self {
        let clean_radius = if radius.is_finite() && radius > 0.0 { radius } else { 0.0 };
        if clean_radius != radius && radius != 0.0 {
            crate::log::warn!(radius, "corner radius clamped to zero");
        }
        let clean_smoothness = if smoothness.is_finite() { smoothness } else { 0.0 };
        if !smoothness.is_finite() {
            crate::log::warn!(smoothness, "non-finite corner smoothness replaced by zero");
        }
        Self::from_raw(clean_radius, clean_smoothness)
    }

    /// Create a corner with validation (rejects NaN, infinities and a negative radius)
    pub fn try_new(radius: f64, smoothness: f64) -> Result<Self, NumericError> {
        let radius = check_non_negative(radius)?;
        let smoothness = check_finite(smoothness)?;
        Ok(Self::from_raw(radius, smoothness))
    }

    /// Unchecked constructor for values already produced by the engine.
    #[inline]
    pub(crate) fn from_raw(radius: f64, smoothness: f64) -> Self {
        Self {
            radius,
            smoothness,
            segment_length: radius * (1.0 + smoothness),
        }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn smoothness(&self) -> f64 {
        self.smoothness
    }

    /// Straight-edge distance consumed by this corner along each adjacent edge.
    #[inline]
    pub fn segment_length(&self) -> f64 {
        self.segment_length
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.radius == 0.0
    }
}

/// The four corners of a rectangle keyed by physical position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectangleAttributes {
    pub top_left: CornerSpec,
    pub top_right: CornerSpec,
    pub bottom_left: CornerSpec,
    pub bottom_right: CornerSpec,
}

impl RectangleAttributes {
    /// Same corner everywhere.
    pub fn uniform(corner: CornerSpec) -> Self {
        Self {
            top_left: corner,
            top_right: corner,
            bottom_left: corner,
            bottom_right: corner,
        }
    }

    #[inline]
    pub fn get(&self, corner: Corner) -> CornerSpec {
        match corner {
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::TopLeft => self.top_left,
        }
    }

    /// The corner sharing the top or bottom edge.
    #[inline]
    pub fn horizontal_neighbour(&self, corner: Corner) -> CornerSpec {
        match corner {
            Corner::TopRight => self.top_left,
            Corner::BottomRight => self.bottom_left,
            Corner::BottomLeft => self.bottom_right,
            Corner::TopLeft => self.top_right,
        }
    }

    /// The corner sharing the left or right edge.
    #[inline]
    pub fn vertical_neighbour(&self, corner: Corner) -> CornerSpec {
        match corner {
            Corner::TopRight => self.bottom_right,
            Corner::BottomRight => self.top_right,
            Corner::BottomLeft => self.top_left,
            Corner::TopLeft => self.bottom_left,
        }
    }
}
