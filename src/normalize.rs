//! Cross-corner normalization.
//!
//! Two corners sharing an edge must not claim more of that edge than exists.
//! Each corner is compared with its horizontal neighbour against the width and
//! with its vertical neighbour against the height, and keeps the smaller radius
//! and the smaller smoothness of the two comparisons.
//!
//! Non-positive rectangle sizes are not special-cased; callers guard them.

use crate::corner::{Corner, CornerSpec, RectangleAttributes};
use crate::types::Rect;

/// Which branch of the pairwise clamp fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clamp {
    /// The radii alone overflow the edge: radii scaled to fit, smoothness dropped.
    Radius,
    /// The radii fit but the smoothed segments do not: smoothness reduced.
    Smoothness,
    /// Nothing overflows.
    None,
}

/// Clamp every corner of `attrs` to `rect`.
pub fn normalize(rect: Rect, attrs: RectangleAttributes) -> RectangleAttributes {
    RectangleAttributes {
        top_right: normalize_corner(rect, &attrs, Corner::TopRight),
        bottom_right: normalize_corner(rect, &attrs, Corner::BottomRight),
        bottom_left: normalize_corner(rect, &attrs, Corner::BottomLeft),
        top_left: normalize_corner(rect, &attrs, Corner::TopLeft),
    }
}

fn normalize_corner(rect: Rect, attrs: &RectangleAttributes, corner: Corner) -> CornerSpec {
    let base = attrs.get(corner);
    let (r1, s1, c1) = clamp_pair(base, attrs.horizontal_neighbour(corner), rect.width());
    let (r2, s2, c2) = clamp_pair(base, attrs.vertical_neighbour(corner), rect.height());
    let normalized = CornerSpec::from_raw(r1.min(r2), s1.min(s2));

    if c1 != Clamp::None || c2 != Clamp::None {
        crate::log::debug!(
            %corner,
            radius = base.radius(),
            smoothness = base.smoothness(),
            new_radius = normalized.radius(),
            new_smoothness = normalized.smoothness(),
            horizontal = ?c1,
            vertical = ?c2,
            "corner normalized"
        );
    }

    normalized
}

/// Compare `base` against the `neighbour` sharing an edge of length `edge`.
///
/// Returns the radius and smoothness `base` may use on that edge.
pub fn clamp_pair(base: CornerSpec, neighbour: CornerSpec, edge: f64) -> (f64, f64, Clamp) {
    let radii = base.radius() + neighbour.radius();
    let segments = base.segment_length() + neighbour.segment_length();

    if radii >= edge {
        let scale = edge / radii;
        (base.radius() * scale, 0.0, Clamp::Radius)
    } else if segments > edge {
        let scale = edge / segments;
        (base.radius(), (1.0 + base.smoothness()) * scale - 1.0, Clamp::Smoothness)
    } else {
        (base.radius(), base.smoothness(), Clamp::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn corner(r: f64, s: f64) -> CornerSpec {
        CornerSpec::new(r, s)
    }

    fn assert_edges_fit(rect: Rect, n: &RectangleAttributes) {
        let pairs = [
            (n.top_left, n.top_right, rect.width()),
            (n.bottom_left, n.bottom_right, rect.width()),
            (n.top_left, n.bottom_left, rect.height()),
            (n.top_right, n.bottom_right, rect.height()),
        ];
        for (a, b, edge) in pairs {
            assert!(
                a.radius() + b.radius() <= edge + EPSILON,
                "radii {} + {} overflow edge {}",
                a.radius(),
                b.radius(),
                edge
            );
            assert!(
                a.segment_length() + b.segment_length() <= edge + EPSILON,
                "segments {} + {} overflow edge {}",
                a.segment_length(),
                b.segment_length(),
                edge
            );
        }
    }

    #[test]
    fn fitting_corners_are_untouched() {
        let rect = Rect::from_size(200.0, 200.0);
        let attrs = RectangleAttributes::uniform(corner(16.0, 1.0));
        assert_eq!(normalize(rect, attrs), attrs);
    }

    #[test]
    fn radius_overflow_scales_and_drops_smoothness() {
        // 30 + 30 >= 40 on the horizontal edges
        let rect = Rect::from_size(40.0, 100.0);
        let n = normalize(rect, RectangleAttributes::uniform(corner(30.0, 0.6)));
        for c in [n.top_left, n.top_right, n.bottom_left, n.bottom_right] {
            assert!((c.radius() - 20.0).abs() < EPSILON);
            assert_eq!(c.smoothness(), 0.0);
            assert!((c.segment_length() - 20.0).abs() < EPSILON);
        }
    }

    #[test]
    fn exact_fit_counts_as_radius_overflow() {
        let (r, s, clamp) = clamp_pair(corner(20.0, 0.5), corner(20.0, 0.5), 40.0);
        assert_eq!(clamp, Clamp::Radius);
        assert_eq!(r, 20.0);
        assert_eq!(s, 0.0);
    }

    #[test]
    fn segment_overflow_reduces_smoothness_only() {
        // radii 40 < 100, segments 80 + 80 > 100
        let (r, s, clamp) = clamp_pair(corner(40.0, 1.0), corner(40.0, 1.0), 100.0);
        assert_eq!(clamp, Clamp::Smoothness);
        assert_eq!(r, 40.0);
        assert!((s - 0.25).abs() < EPSILON);
        assert!((r * (1.0 + s) - 50.0).abs() < EPSILON);
    }

    #[test]
    fn more_restrictive_edge_wins() {
        // wide enough horizontally, too short vertically
        let rect = Rect::from_size(500.0, 60.0);
        let n = normalize(rect, RectangleAttributes::uniform(corner(20.0, 1.0)));
        assert_eq!(n.top_left.radius(), 20.0);
        assert!((n.top_left.segment_length() - 30.0).abs() < EPSILON);
        assert_edges_fit(rect, &n);
    }

    #[test]
    fn mixed_corners_only_shrink_where_needed() {
        let rect = Rect::from_size(100.0, 100.0);
        let attrs = RectangleAttributes {
            top_left: corner(80.0, 0.0),
            top_right: corner(30.0, 0.0),
            bottom_left: corner(0.0, 0.0),
            bottom_right: corner(5.0, 0.0),
        };
        let n = normalize(rect, attrs);
        assert!((n.top_left.radius() - 100.0 * 80.0 / 110.0).abs() < EPSILON);
        assert!((n.top_right.radius() - 100.0 * 30.0 / 110.0).abs() < EPSILON);
        assert_eq!(n.bottom_left.radius(), 0.0);
        assert_eq!(n.bottom_right.radius(), 5.0);
        assert_edges_fit(rect, &n);
    }

    #[test]
    fn edges_always_fit_after_normalization() {
        let sizes = [(1.0, 1.0), (10.0, 300.0), (37.5, 12.0), (100.0, 100.0), (640.0, 48.0)];
        let radii = [0.0, 0.5, 4.0, 16.0, 50.0, 120.0, 1000.0];
        let smoothness = [0.0, 0.3, 0.6, 1.0];
        for (w, h) in sizes {
            let rect = Rect::from_size(w, h);
            for (i, &r) in radii.iter().enumerate() {
                for &s in &smoothness {
                    let other = radii[(i + 3) % radii.len()];
                    let attrs = RectangleAttributes {
                        top_left: corner(r, s),
                        top_right: corner(other, s),
                        bottom_left: corner(other * 0.5, 1.0 - s),
                        bottom_right: corner(r * 2.0, s * 0.5),
                    };
                    assert_edges_fit(rect, &normalize(rect, attrs));
                }
            }
        }
    }
}
