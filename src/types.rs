//! Numeric primitives shared by the corner engine.
//!
//! Geometry runs on raw `f64` and [`glam::DVec2`]; the newtypes here only exist
//! where a unit or a validity rule must not get lost (angles in degrees,
//! rectangles with an origin).

use glam::{DVec2, dvec2};
use std::fmt;
use std::ops::{Add, Sub};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN and infinities.
#[inline]
pub(crate) fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Reject NaN, infinities and negative values.
#[inline]
pub(crate) fn check_non_negative(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Angle in degrees.
///
/// Angles are measured from the positive x axis toward the positive y axis of
/// the shape's local frame. With the y-down frame used throughout this crate
/// that reads as clockwise on screen.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    #[inline]
    pub const fn degrees(val: f64) -> Angle {
        Angle(val)
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Point on a circle of `radius` around `center` at this angle.
    #[inline]
    pub fn point_on_circle(self, center: DVec2, radius: f64) -> DVec2 {
        let (sin, cos) = self.to_radians().sin_cos();
        center + dvec2(cos, sin) * radius
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Axis-aligned rectangle, top-left origin, y grows downward.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(x, y),
            size: DVec2::new(width, height),
        }
    }

    /// Rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Create a rectangle with validation (rejects non-finite values and negative size)
    pub fn try_new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, NumericError> {
        Ok(Self::new(
            check_finite(x)?,
            check_finite(y)?,
            check_non_negative(width)?,
            check_non_negative(height)?,
        ))
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.size.y
    }

    #[inline]
    pub fn min(self) -> DVec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> DVec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Shrinks the rectangle by `amount` on every side; negative amounts grow it.
    ///
    /// The size is not clamped, so insetting past the centre yields a negative size.
    #[inline]
    pub fn inset(self, amount: f64) -> Self {
        Self {
            origin: self.origin + DVec2::splat(amount),
            size: self.size - DVec2::splat(2.0 * amount),
        }
    }
}
