//! Outline geometry for rectangles with smoothed ("squircle") corners.
//!
//! A corner is described by a radius and a smoothness factor. Smoothness `0` is
//! a plain quarter circle; larger values spend more of the corner on cubic
//! ramps that ease the straight edge into a shorter circular arc.
//!
//! ```
//! use glam::dvec2;
//! use squircle::{LayoutDirection, Rect, SmoothRect, Style, render};
//!
//! let shape = SmoothRect::uniform(24.0, Style::SMOOTH);
//! let path = shape.evaluate(Rect::from_size(200.0, 120.0), LayoutDirection::LeftToRight);
//! assert_eq!(path.start_point(), Some(dvec2(48.0, 0.0)));
//!
//! let d = render::path_data(&path, &render::SvgOptions::default());
//! assert!(d.starts_with('M'));
//! ```
//!
//! Evaluation is a pure function of the shape, the rectangle and the layout
//! direction. Corners too large for the rectangle are scaled down so that
//! neighbours never overlap.

pub mod corner;
pub mod errors;
pub mod log;
pub mod normalize;
pub mod render;
pub mod shape;
pub mod style;
pub mod types;

pub use corner::{Corner, CornerSpec, Corners, LayoutDirection, RectangleAttributes};
pub use errors::{ParseStyleError, RenderError};
pub use normalize::normalize;
pub use render::{CornerParameters, Path, PathCommand, PathConsumer, compute_path};
pub use shape::SmoothRect;
pub use style::Style;
pub use types::{Angle, NumericError, Rect};
