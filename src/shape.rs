//! The smoothed rectangle shape.

use crate::corner::{CornerSpec, Corners, LayoutDirection, RectangleAttributes};
use crate::render::path::Path;
use crate::render::path_builder::compute_path;
use crate::style::Style;
use crate::types::Rect;

/// A rectangle with independently smoothed corners.
///
/// Corners are stored by logical position (leading/trailing) and resolved to
/// physical left/right when the shape is evaluated. The shape is an immutable
/// value; [`SmoothRect::inset`] returns a new one.
///
/// # Example
///
/// ```
/// use squircle::{LayoutDirection, Rect, SmoothRect, Style};
///
/// let shape = SmoothRect::uniform(16.0, Style::Continuous);
/// let path = shape.evaluate(Rect::from_size(120.0, 80.0), LayoutDirection::LeftToRight);
/// assert!(path.is_closed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SmoothRect {
    top_leading: CornerSpec,
    top_trailing: CornerSpec,
    bottom_trailing: CornerSpec,
    bottom_leading: CornerSpec,
    inset: f64,
}

impl SmoothRect {
    /// Create a shape from four corners, in the same order as [`SmoothRect::detailed`]:
    /// top-leading, bottom-leading, bottom-trailing, top-trailing.
    pub fn new(
        top_leading: CornerSpec,
        bottom_leading: CornerSpec,
        bottom_trailing: CornerSpec,
        top_trailing: CornerSpec,
    ) -> Self {
        Self {
            top_leading,
            top_trailing,
            bottom_trailing,
            bottom_leading,
            inset: 0.0,
        }
    }

    /// Same radius and style on every corner.
    pub fn uniform(radius: f64, style: Style) -> Self {
        Self::selective(radius, Corners::ALL, style)
    }

    /// `radius` on the selected corners, square corners elsewhere.
    pub fn selective(radius: f64, corners: Corners, style: Style) -> Self {
        let pick = |corner| if corners.contains(corner) { radius } else { 0.0 };
        Self::detailed(
            pick(Corners::TOP_LEADING),
            pick(Corners::BOTTOM_LEADING),
            pick(Corners::BOTTOM_TRAILING),
            pick(Corners::TOP_TRAILING),
            style,
        )
    }

    /// An independent radius per corner sharing one style.
    pub fn detailed(
        top_leading: f64,
        bottom_leading: f64,
        bottom_trailing: f64,
        top_trailing: f64,
        style: Style,
    ) -> Self {
        let smoothness = style.smoothness();
        Self::new(
            CornerSpec::new(top_leading, smoothness),
            CornerSpec::new(bottom_leading, smoothness),
            CornerSpec::new(bottom_trailing, smoothness),
            CornerSpec::new(top_trailing, smoothness),
        )
    }

    /// A copy of this shape inset by a further `amount`.
    ///
    /// Insets accumulate; positive amounts shrink the outline, negative ones
    /// grow it. A non-finite amount leaves the shape unchanged.
    pub fn inset(&self, amount: f64) -> Self {
        if !amount.is_finite() {
            crate::log::warn!(amount, "ignoring non-finite inset");
            return *self;
        }
        Self {
            inset: self.inset + amount,
            ..*self
        }
    }

    /// Total inset applied so far.
    pub fn inset_amount(&self) -> f64 {
        self.inset
    }

    pub fn top_leading(&self) -> CornerSpec {
        self.top_leading
    }

    pub fn top_trailing(&self) -> CornerSpec {
        self.top_trailing
    }

    pub fn bottom_leading(&self) -> CornerSpec {
        self.bottom_leading
    }

    pub fn bottom_trailing(&self) -> CornerSpec {
        self.bottom_trailing
    }

    /// The corners at their physical positions for `direction`.
    pub fn attributes(&self, direction: LayoutDirection) -> RectangleAttributes {
        let (top_left, top_right) = direction.resolve(self.top_leading, self.top_trailing);
        let (bottom_left, bottom_right) =
            direction.resolve(self.bottom_leading, self.bottom_trailing);
        RectangleAttributes {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// The closed outline of this shape filling `rect`.
    pub fn evaluate(&self, rect: Rect, direction: LayoutDirection) -> Path {
        compute_path(rect, self.attributes(direction), self.inset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_uses_style_everywhere() {
        let shape = SmoothRect::uniform(12.0, Style::Continuous);
        let corners = [
            shape.top_leading(),
            shape.top_trailing(),
            shape.bottom_leading(),
            shape.bottom_trailing(),
        ];
        for c in corners {
            assert_eq!(c.radius(), 12.0);
            assert_eq!(c.smoothness(), 0.6);
        }
    }

    #[test]
    fn selective_zeroes_unselected_corners() {
        let corners = Corners::TOP_LEADING | Corners::BOTTOM_TRAILING;
        let shape = SmoothRect::selective(20.0, corners, Style::SMOOTH);
        assert_eq!(shape.top_leading().radius(), 20.0);
        assert_eq!(shape.bottom_trailing().radius(), 20.0);
        assert!(shape.top_trailing().is_square());
        assert!(shape.bottom_leading().is_square());
    }

    #[test]
    fn detailed_argument_order() {
        let shape = SmoothRect::detailed(1.0, 2.0, 3.0, 4.0, Style::Circular);
        assert_eq!(shape.top_leading().radius(), 1.0);
        assert_eq!(shape.bottom_leading().radius(), 2.0);
        assert_eq!(shape.bottom_trailing().radius(), 3.0);
        assert_eq!(shape.top_trailing().radius(), 4.0);
    }

    #[test]
    fn right_to_left_swaps_sides() {
        let shape = SmoothRect::detailed(1.0, 2.0, 3.0, 4.0, Style::Circular);
        let ltr = shape.attributes(LayoutDirection::LeftToRight);
        assert_eq!(ltr.top_left.radius(), 1.0);
        assert_eq!(ltr.top_right.radius(), 4.0);
        assert_eq!(ltr.bottom_left.radius(), 2.0);
        assert_eq!(ltr.bottom_right.radius(), 3.0);

        let rtl = shape.attributes(LayoutDirection::RightToLeft);
        assert_eq!(rtl.top_left.radius(), 4.0);
        assert_eq!(rtl.top_right.radius(), 1.0);
        assert_eq!(rtl.bottom_left.radius(), 3.0);
        assert_eq!(rtl.bottom_right.radius(), 2.0);
    }

    #[test]
    fn inset_accumulates_without_mutating() {
        let shape = SmoothRect::uniform(8.0, Style::SMOOTH);
        let once = shape.inset(2.0);
        let twice = once.inset(3.0).inset(-1.0);
        assert_eq!(shape.inset_amount(), 0.0);
        assert_eq!(once.inset_amount(), 2.0);
        assert_eq!(twice.inset_amount(), 4.0);
        assert_eq!(shape.inset(f64::NAN), shape);
    }

    #[test]
    fn new_and_detailed_share_argument_order() {
        let corner = |r| CornerSpec::new(r, Style::Circular.smoothness());
        let explicit = SmoothRect::new(corner(1.0), corner(2.0), corner(3.0), corner(4.0));
        assert_eq!(explicit, SmoothRect::detailed(1.0, 2.0, 3.0, 4.0, Style::Circular));
    }

    #[test]
    fn negative_radius_is_square() {
        let shape = SmoothRect::uniform(-5.0, Style::SMOOTH);
        assert!(shape.top_leading().is_square());
    }
}
