//! Path commands and the consumer seam toward rendering backends.
//!
//! Coordinates are absolute, in the y-down frame of the rectangle the path was
//! computed for.

use glam::DVec2;

use crate::types::Angle;

use super::defaults::POINT_EPSILON;

/// One drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    CurveTo {
        ctrl1: DVec2,
        ctrl2: DVec2,
        to: DVec2,
    },
    /// Circular arc. A backend draws a straight line from the current point to
    /// the arc's start point first if the two differ.
    Arc {
        center: DVec2,
        radius: f64,
        start: Angle,
        end: Angle,
        /// `false` sweeps toward increasing angles.
        clockwise: bool,
    },
    Close,
}

impl PathCommand {
    /// Where the pen is after this command, `None` for `Close`.
    pub fn end_point(&self) -> Option<DVec2> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::CurveTo { to, .. } => Some(to),
            PathCommand::Arc {
                center,
                radius,
                end,
                ..
            } => Some(end.point_on_circle(center, radius)),
            PathCommand::Close => None,
        }
    }

    /// The same command shifted by `offset`.
    pub fn translated(self, offset: DVec2) -> PathCommand {
        match self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(p + offset),
            PathCommand::LineTo(p) => PathCommand::LineTo(p + offset),
            PathCommand::CurveTo { ctrl1, ctrl2, to } => PathCommand::CurveTo {
                ctrl1: ctrl1 + offset,
                ctrl2: ctrl2 + offset,
                to: to + offset,
            },
            PathCommand::Arc {
                center,
                radius,
                start,
                end,
                clockwise,
            } => PathCommand::Arc {
                center: center + offset,
                radius,
                start,
                end,
                clockwise,
            },
            PathCommand::Close => PathCommand::Close,
        }
    }
}

/// Receiver of path commands, implemented by rendering backends.
pub trait PathConsumer {
    fn move_to(&mut self, to: DVec2);

    fn line_to(&mut self, to: DVec2);

    fn curve_to(&mut self, ctrl1: DVec2, ctrl2: DVec2, to: DVec2);

    fn arc(&mut self, center: DVec2, radius: f64, start: Angle, end: Angle, clockwise: bool);

    fn close(&mut self);
}

/// An ordered list of drawing commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathCommand> {
        self.commands.iter()
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// The first `MoveTo` target.
    pub fn start_point(&self) -> Option<DVec2> {
        self.commands.iter().find_map(|c| match c {
            PathCommand::MoveTo(p) => Some(*p),
            _ => None,
        })
    }

    /// The pen position after the last drawing command, ignoring `Close`.
    pub fn end_point(&self) -> Option<DVec2> {
        self.commands.iter().rev().find_map(PathCommand::end_point)
    }

    /// True when the path ends with `Close` and the last drawn point meets the start.
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
            && match (self.start_point(), self.end_point()) {
                (Some(start), Some(end)) => start.distance(end) <= POINT_EPSILON,
                _ => false,
            }
    }

    /// A copy of the path shifted by `offset`.
    pub fn translate(&self, offset: DVec2) -> Path {
        Path {
            commands: self.commands.iter().map(|c| c.translated(offset)).collect(),
        }
    }

    /// Feed every command to `consumer`, in order.
    pub fn replay<C: PathConsumer + ?Sized>(&self, consumer: &mut C) {
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => consumer.move_to(p),
                PathCommand::LineTo(p) => consumer.line_to(p),
                PathCommand::CurveTo { ctrl1, ctrl2, to } => consumer.curve_to(ctrl1, ctrl2, to),
                PathCommand::Arc {
                    center,
                    radius,
                    start,
                    end,
                    clockwise,
                } => consumer.arc(center, radius, start, end, clockwise),
                PathCommand::Close => consumer.close(),
            }
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl PathConsumer for Path {
    fn move_to(&mut self, to: DVec2) {
        self.push(PathCommand::MoveTo(to));
    }

    fn line_to(&mut self, to: DVec2) {
        self.push(PathCommand::LineTo(to));
    }

    fn curve_to(&mut self, ctrl1: DVec2, ctrl2: DVec2, to: DVec2) {
        self.push(PathCommand::CurveTo { ctrl1, ctrl2, to });
    }

    fn arc(&mut self, center: DVec2, radius: f64, start: Angle, end: Angle, clockwise: bool) {
        self.push(PathCommand::Arc {
            center,
            radius,
            start,
            end,
            clockwise,
        });
    }

    fn close(&mut self) {
        self.push(PathCommand::Close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn square() -> Path {
        let mut path = Path::new();
        path.move_to(dvec2(0.0, 0.0));
        path.line_to(dvec2(10.0, 0.0));
        path.line_to(dvec2(10.0, 10.0));
        path.line_to(dvec2(0.0, 10.0));
        path.line_to(dvec2(0.0, 0.0));
        path.close();
        path
    }

    #[test]
    fn closed_square() {
        let path = square();
        assert_eq!(path.len(), 6);
        assert_eq!(path.start_point(), Some(dvec2(0.0, 0.0)));
        assert_eq!(path.end_point(), Some(dvec2(0.0, 0.0)));
        assert!(path.is_closed());
    }

    #[test]
    fn open_path_is_not_closed() {
        let mut path = Path::new();
        path.move_to(dvec2(0.0, 0.0));
        path.line_to(dvec2(5.0, 0.0));
        path.close();
        assert!(!path.is_closed());
        assert!(!Path::new().is_closed());
    }

    #[test]
    fn arc_end_point() {
        let arc = PathCommand::Arc {
            center: dvec2(10.0, 10.0),
            radius: 5.0,
            start: Angle::degrees(270.0),
            end: Angle::degrees(360.0),
            clockwise: false,
        };
        let end = arc.end_point().unwrap();
        assert!((end.x - 15.0).abs() < 1e-12);
        assert!((end.y - 10.0).abs() < 1e-12);
    }

    #[test]
    fn translate_moves_points_and_arc_centres() {
        let mut path = Path::new();
        path.move_to(dvec2(1.0, 2.0));
        path.arc(dvec2(3.0, 3.0), 1.0, Angle::ZERO, Angle::degrees(90.0), false);
        let moved = path.translate(dvec2(10.0, -1.0));
        assert_eq!(moved.commands()[0], PathCommand::MoveTo(dvec2(11.0, 1.0)));
        match moved.commands()[1] {
            PathCommand::Arc { center, radius, .. } => {
                assert_eq!(center, dvec2(13.0, 2.0));
                assert_eq!(radius, 1.0);
            }
            other => panic!("expected arc, got {other:?}"),
        }
    }

    #[test]
    fn replay_into_path_copies() {
        let path = square();
        let mut copy = Path::new();
        path.replay(&mut copy);
        assert_eq!(copy, path);
    }
}
