//! Outline synthesis for smoothed corners.
//!
//! Each rounded corner is drawn as a straight run up to the ramp, a cubic ramp
//! into a trimmed circular arc, the arc itself, and a mirrored cubic ramp out
//! onto the next edge.
//!
//! # Corner parameters
//!
//! For radius `r` and smoothness `s` (Fig. 11.1 of Figma's "Desperately seeking
//! squircles"):
//!
//! - `p = (1 + s) * r`: distance along each edge consumed by the corner
//! - `theta = 45 * s`: arc trimmed from each side of the quarter circle
//! - `c`, `d`: offsets of the arc's start point from the edge
//! - `arc_seg`: straight-edge share of the trimmed arc
//! - `b = (p - arc_seg - c - d) / 3`, `a = 2 * b`: control-point spacing of the ramp
//!
//! so that `a + b + c + d + arc_seg == p` for every corner.

use glam::{DVec2, dvec2};

use crate::corner::{Corner, CornerSpec, RectangleAttributes};
use crate::normalize::normalize;
use crate::types::{Angle, Rect};

use super::path::{Path, PathConsumer};

/// Derived geometry of one corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerParameters {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub p: f64,
    pub r: f64,
    /// Straight-edge contribution of the trimmed arc.
    pub arc_seg: f64,
    /// Deviation of the arc's start from the quarter-circle start.
    pub theta: Angle,
}

impl CornerParameters {
    pub fn from_corner(corner: CornerSpec) -> Self {
        let r = corner.radius();
        let s = corner.smoothness();
        let p = (1.0 + s) * r;

        let beta = Angle::degrees(90.0 * (1.0 - s));
        let theta = Angle::degrees(45.0 * s);
        let half_theta = Angle::degrees(theta.raw() / 2.0);

        let c = r * half_theta.to_radians().tan() * theta.to_radians().cos();
        let d = r * half_theta.to_radians().tan() * theta.to_radians().sin();
        let arc_seg = (beta.to_radians() / 2.0).sin() * r * std::f64::consts::SQRT_2;
        let b = (p - arc_seg - c - d) / 3.0;
        let a = 2.0 * b;

        Self {
            a,
            b,
            c,
            d,
            p,
            r,
            arc_seg,
            theta,
        }
    }
}

/// Orientation of a corner inside a rectangle of the given size.
///
/// `incoming` is the travel direction along the edge that reaches the vertex,
/// `outgoing` the direction along the edge that leaves it.
#[derive(Debug, Clone, Copy)]
struct CornerFrame {
    vertex: DVec2,
    incoming: DVec2,
    outgoing: DVec2,
    start_angle: Angle,
}

impl CornerFrame {
    fn new(size: DVec2, corner: Corner) -> Self {
        let (w, h) = (size.x, size.y);
        match corner {
            Corner::TopRight => CornerFrame {
                vertex: dvec2(w, 0.0),
                incoming: dvec2(1.0, 0.0),
                outgoing: dvec2(0.0, 1.0),
                start_angle: Angle::degrees(270.0),
            },
            Corner::BottomRight => CornerFrame {
                vertex: dvec2(w, h),
                incoming: dvec2(0.0, 1.0),
                outgoing: dvec2(-1.0, 0.0),
                start_angle: Angle::degrees(0.0),
            },
            Corner::BottomLeft => CornerFrame {
                vertex: dvec2(0.0, h),
                incoming: dvec2(-1.0, 0.0),
                outgoing: dvec2(0.0, -1.0),
                start_angle: Angle::degrees(90.0),
            },
            Corner::TopLeft => CornerFrame {
                vertex: dvec2(0.0, 0.0),
                incoming: dvec2(0.0, -1.0),
                outgoing: dvec2(1.0, 0.0),
                start_angle: Angle::degrees(180.0),
            },
        }
    }

    /// Point `distance` before the vertex on the incoming edge.
    #[inline]
    fn before(&self, distance: f64) -> DVec2 {
        self.vertex - self.incoming * distance
    }

    /// Point `distance` after the vertex on the outgoing edge.
    #[inline]
    fn after(&self, distance: f64) -> DVec2 {
        self.vertex + self.outgoing * distance
    }

    /// Centre of the corner's arc.
    #[inline]
    fn center(&self, radius: f64) -> DVec2 {
        self.vertex - self.incoming * radius + self.outgoing * radius
    }
}

/// Emit one corner, starting from wherever the pen currently is.
///
/// A square corner is a single line to the vertex.
pub fn draw_corner<C: PathConsumer + ?Sized>(
    out: &mut C,
    size: DVec2,
    spec: CornerSpec,
    corner: Corner,
) {
    let frame = CornerFrame::new(size, corner);

    if spec.radius() == 0.0 {
        out.line_to(frame.before(0.0));
        return;
    }

    let CornerParameters {
        a,
        b,
        c,
        d,
        p,
        r,
        theta,
        ..
    } = CornerParameters::from_corner(spec);

    out.line_to(frame.before(p));
    out.curve_to(
        frame.before(p - a),
        frame.before(p - a - b),
        frame.before(p - a - b - c) + frame.outgoing * d,
    );
    out.arc(
        frame.center(r),
        r,
        frame.start_angle + theta,
        frame.start_angle + Angle::degrees(90.0) - theta,
        false,
    );
    out.curve_to(frame.after(p - a - b), frame.after(p - a), frame.after(p));
}

/// Build the closed outline of `rect` with the given corners.
///
/// The rectangle is first shrunk by `inset` on every side (negative grows it),
/// the corners are normalized against the shrunk rectangle, and the outline is
/// expressed in the coordinate space of `rect`.
pub fn compute_path(rect: Rect, attrs: RectangleAttributes, inset: f64) -> Path {
    let inset_rect = rect.inset(inset);
    let corners = normalize(inset_rect, attrs);

    let mut path = Path::new();
    path.move_to(dvec2(corners.top_left.segment_length(), 0.0));
    for corner in Corner::CLOCKWISE {
        draw_corner(&mut path, inset_rect.size, corners.get(corner), corner);
    }
    path.close();

    let path = path.translate(inset_rect.origin);

    crate::log::debug!(
        width = rect.width(),
        height = rect.height(),
        inset,
        commands = path.len(),
        "computed outline"
    );

    path
}
