//! Path type - ordered sequences of drawing commands
//!
//! A Path is what every generator produces. It is a flat list of
//! `PathCommand`s; a sub-path starts at each `MoveTo` (or at the first
//! command when the path opens with an arc). The order of commands is
//! significant because it defines the stroke and fill topology.

use std::f64::consts::TAU;

use crate::geometry::{Angle, Point, Rect};
use crate::transform::Transform;

/// Number of line segments used to approximate an ellipse outline
pub const ELLIPSE_SEGMENTS: usize = 32;

/// One instruction in a vector drawing sequence
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Start a new sub-path at a point
    MoveTo(Point),
    /// Straight line from the current point
    LineTo(Point),
    /// Circular arc around `center`
    ///
    /// Angles are measured from the positive X axis and increase clockwise
    /// on screen.
    ArcTo {
        center: Point,
        radius: f64,
        start_angle: Angle,
        end_angle: Angle,
        clockwise: bool,
    },
    /// Close the current sub-path back to its starting point
    ClosePath,
}

impl PathCommand {
    /// Map every point in this command through a transform
    pub fn applying(&self, transform: &Transform) -> PathCommand {
        match *self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(transform.apply(p)),
            PathCommand::LineTo(p) => PathCommand::LineTo(transform.apply(p)),
            PathCommand::ArcTo {
                center,
                radius,
                start_angle,
                end_angle,
                clockwise,
            } => {
                let rotation = transform.rotation_angle();
                PathCommand::ArcTo {
                    center: transform.apply(center),
                    radius,
                    start_angle: start_angle + rotation,
                    end_angle: end_angle + rotation,
                    clockwise,
                }
            }
            PathCommand::ClosePath => PathCommand::ClosePath,
        }
    }
}

/// An ordered, fully materialized sequence of path commands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty path with room for `capacity` commands
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Start a new sub-path
    pub fn move_to(&mut self, point: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(point));
        self
    }

    /// Add a straight line to `point`
    pub fn line_to(&mut self, point: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(point));
        self
    }

    /// Add a circular arc
    pub fn add_arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: Angle,
        end_angle: Angle,
        clockwise: bool,
    ) -> &mut Self {
        self.commands.push(PathCommand::ArcTo {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
        });
        self
    }

    /// Close the current sub-path
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::ClosePath);
        self
    }

    /// Add a closed rectangle as its own sub-path
    ///
    /// Traced from the top-left corner: top → right → bottom → left.
    pub fn add_rect(&mut self, rect: Rect) -> &mut Self {
        self.move_to(Point::new(rect.min_x(), rect.min_y()))
            .line_to(Point::new(rect.max_x(), rect.min_y()))
            .line_to(Point::new(rect.max_x(), rect.max_y()))
            .line_to(Point::new(rect.min_x(), rect.max_y()))
            .close()
    }

    /// Add a closed ellipse inscribed in `rect` as its own sub-path
    ///
    /// The outline starts at the right-most point and is approximated with
    /// `ELLIPSE_SEGMENTS` straight lines.
    pub fn add_ellipse(&mut self, rect: Rect) -> &mut Self {
        let center = rect.center();
        let rx = rect.width / 2.0;
        let ry = rect.height / 2.0;

        for i in 0..ELLIPSE_SEGMENTS {
            let angle = i as f64 / ELLIPSE_SEGMENTS as f64 * TAU;
            let point = Point::new(center.x + rx * angle.cos(), center.y + ry * angle.sin());
            if i == 0 {
                self.move_to(point);
            } else {
                self.line_to(point);
            }
        }

        self.close()
    }

    /// Append every command of another path
    pub fn add_path(&mut self, other: &Path) -> &mut Self {
        self.commands.extend_from_slice(&other.commands);
        self
    }

    /// A copy of this path with every command mapped through `transform`
    pub fn applying(&self, transform: &Transform) -> Path {
        Path {
            commands: self
                .commands
                .iter()
                .map(|command| command.applying(transform))
                .collect(),
        }
    }

    /// The commands in drawing order
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Consume the path, returning its commands
    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    /// Number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the path has no commands
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of sub-paths
    ///
    /// Every `MoveTo` starts one; an `ArcTo` with no open sub-path starts
    /// one too, since it draws from its own start point.
    pub fn subpath_count(&self) -> usize {
        let mut count = 0;
        let mut open = false;
        for command in &self.commands {
            match command {
                PathCommand::MoveTo(_) => {
                    count += 1;
                    open = true;
                }
                PathCommand::ArcTo { .. } | PathCommand::LineTo(_) if !open => {
                    count += 1;
                    open = true;
                }
                PathCommand::ClosePath => open = false,
                _ => {}
            }
        }
        count
    }

    /// Number of explicit `LineTo` segments
    pub fn count_line_segments(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_)))
            .count()
    }
}

impl From<Vec<PathCommand>> for Path {
    fn from(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }
}

impl IntoIterator for Path {
    type Item = PathCommand;
    type IntoIter = std::vec::IntoIter<PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_basic() {
        let mut path = Path::new();
        path.move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(1.0, 0.0))
            .line_to(Point::new(1.0, 1.0));
        assert_eq!(path.len(), 3);
        assert_eq!(path.subpath_count(), 1);
        assert_eq!(path.count_line_segments(), 2);
    }

    #[test]
    fn test_add_rect() {
        let mut path = Path::new();
        path.add_rect(Rect::new(1.0, 2.0, 3.0, 4.0));

        assert_eq!(path.len(), 5);
        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(1.0, 2.0)));
        assert_eq!(path.commands()[2], PathCommand::LineTo(Point::new(4.0, 6.0)));
        assert_eq!(path.commands()[4], PathCommand::ClosePath);
    }

    #[test]
    fn test_add_ellipse() {
        let mut path = Path::new();
        path.add_ellipse(Rect::new(0.0, 0.0, 20.0, 10.0));

        assert_eq!(path.len(), ELLIPSE_SEGMENTS + 1);
        assert_eq!(path.subpath_count(), 1);
        // Starts at the right-most point
        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(20.0, 5.0)));
    }

    #[test]
    fn test_subpaths_after_close() {
        let mut path = Path::new();
        path.add_rect(Rect::from_size(1.0, 1.0))
            .add_rect(Rect::from_size(2.0, 2.0))
            .add_arc(Point::new(0.0, 0.0), 1.0, Angle::ZERO, Angle::degrees(90.0), false);
        assert_eq!(path.subpath_count(), 3);
    }

    #[test]
    fn test_applying_rotates_arcs() {
        let mut path = Path::new();
        path.add_arc(Point::new(1.0, 0.0), 2.0, Angle::ZERO, Angle::degrees(90.0), true);

        let rotated = path.applying(&Transform::rotation(Angle::degrees(90.0)));
        match rotated.commands()[0] {
            PathCommand::ArcTo {
                center,
                radius,
                start_angle,
                end_angle,
                clockwise,
            } => {
                assert!(center.x.abs() < 1e-9);
                assert!((center.y - 1.0).abs() < 1e-9);
                assert_eq!(radius, 2.0);
                assert!((start_angle.as_degrees() - 90.0).abs() < 1e-9);
                assert!((end_angle.as_degrees() - 180.0).abs() < 1e-9);
                assert!(clockwise);
            }
            other => panic!("expected an arc, got {other:?}"),
        }
    }
}
