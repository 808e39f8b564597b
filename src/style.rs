//! Smoothing styles.
//!
//! A [`Style`] is the user-facing name for a smoothness factor. The geometry only
//! ever sees the number returned by [`Style::smoothness`].

use std::fmt;
use std::str::FromStr;

use crate::errors::{ParseStyleError, style_source};
use crate::render::defaults::{CONTINUOUS_SMOOTHNESS, MAX_SMOOTHNESS, PERCENT_SCALE};

/// How much of each corner is spent on the smoothing ramps.
///
/// `Custom` is never clamped: values outside `0..=1` reach the geometry as-is and
/// produce extrapolated, possibly self-intersecting outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Style {
    /// Plain quarter-circle corners (smoothness `0`).
    Circular,
    /// Approximation of the platform continuous corner (smoothness `0.6`).
    Continuous,
    /// Explicit smoothness factor on the `0..=1` scale.
    Custom(f64),
}

impl Style {
    /// Maximal smoothing, `Custom(1.0)`.
    pub const SMOOTH: Style = Style::Custom(MAX_SMOOTHNESS);

    /// The smoothness factor this style stands for.
    pub fn smoothness(self) -> f64 {
        match self {
            Style::Circular => 0.0,
            Style::Continuous => CONTINUOUS_SMOOTHNESS,
            Style::Custom(value) => value,
        }
    }

    /// Build a style from the legacy `0..100` percent scale.
    pub fn from_percent(percent: f64) -> Style {
        Style::Custom(percent / PERCENT_SCALE)
    }

    /// The smoothness expressed on the legacy percent scale.
    pub fn percent(self) -> f64 {
        self.smoothness() * PERCENT_SCALE
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::SMOOTH
    }
}

impl From<f64> for Style {
    fn from(value: f64) -> Self {
        Style::Custom(value)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Circular => write!(f, "circular"),
            Style::Continuous => write!(f, "continuous"),
            Style::Custom(value) => write!(f, "smooth({})", value),
        }
    }
}

/// Parses `circular`, `continuous`, `smooth`, `smooth(<f64>)` and `smooth(<f64>%)`.
///
/// The legacy names `none` and `ios` are accepted for `circular` and
/// `continuous`, and `custom(...)` for `smooth(...)`.
impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseStyleError::Empty);
        }
        let lead = input.len() - input.trim_start().len();

        let Some(open) = trimmed.find('(') else {
            return match trimmed.to_ascii_lowercase().as_str() {
                "circular" | "none" => Ok(Style::Circular),
                "continuous" | "ios" => Ok(Style::Continuous),
                "smooth" => Ok(Style::SMOOTH),
                _ => Err(ParseStyleError::UnknownStyle {
                    name: trimmed.to_string(),
                    src: style_source(input),
                    span: (lead, trimmed.len()).into(),
                }),
            };
        };

        let name = trimmed[..open].trim_end();
        if !matches!(name.to_ascii_lowercase().as_str(), "smooth" | "custom") {
            return Err(ParseStyleError::UnknownStyle {
                name: name.to_string(),
                src: style_source(input),
                span: (lead, name.len().max(1)).into(),
            });
        }

        if !trimmed.ends_with(')') {
            return Err(ParseStyleError::Unbalanced {
                src: style_source(input),
                span: (lead + open, trimmed.len() - open).into(),
            });
        }

        let body = &trimmed[open + 1..trimmed.len() - 1];
        let body_start = lead + open + 1 + (body.len() - body.trim_start().len());
        let body = body.trim();
        let (number, percent) = match body.strip_suffix('%') {
            Some(rest) => (rest.trim_end(), true),
            None => (body, false),
        };

        let value: f64 = number.parse().map_err(|_| ParseStyleError::InvalidFactor {
            text: body.to_string(),
            src: style_source(input),
            span: (body_start, body.len()).into(),
        })?;
        if !value.is_finite() {
            return Err(ParseStyleError::NonFiniteFactor {
                src: style_source(input),
                span: (body_start, body.len()).into(),
            });
        }

        Ok(if percent {
            Style::from_percent(value)
        } else {
            Style::Custom(value)
        })
    }
}
