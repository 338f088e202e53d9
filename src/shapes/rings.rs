//! Color-cycling rings - concentric outlines with a rotating hue
//!
//! `steps` outlines are stacked inside the rect, each inset one unit further
//! than the last. Every ring carries a vertical gradient whose hue is the
//! ring's position on the hue wheel, shifted by `amount`. Sweeping `amount`
//! from 0 to 1 makes the colors cycle through the rings.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use super::path::Path;
use super::traits::{Shape, ShapeError};
use crate::color::Hsb;
use crate::geometry::{Angle, Rect};

/// Outline drawn for each ring
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RingOutline {
    /// Circles centered in the rect, fitted to its shorter side
    #[default]
    Circle,
    /// Rectangles following the rect's edges
    Rectangle,
}

/// One ring: its outline and the two ends of its vertical gradient
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    pub path: Path,
    /// Gradient color at the top of the ring
    pub top: Hsb,
    /// Gradient color at the bottom of the ring
    pub bottom: Hsb,
}

/// Concentric rings whose colors cycle around the hue wheel
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorCyclingRings {
    /// Offset on the hue wheel, usually in [0, 1]
    pub amount: f64,
    /// Number of rings
    pub steps: u32,
    pub outline: RingOutline,
}

impl ColorCyclingRings {
    pub fn new(amount: f64, steps: u32, outline: RingOutline) -> Self {
        Self {
            amount,
            steps,
            outline,
        }
    }

    /// Hue of the ring at `value`, wrapped back into [0, 1]
    pub fn hue(&self, value: u32) -> f64 {
        let mut target_hue = value as f64 / self.steps as f64 + self.amount;
        if target_hue > 1.0 {
            target_hue -= 1.0;
        }
        target_hue
    }

    /// Gradient color of the ring at `value` with the given brightness
    pub fn color(&self, value: u32, brightness: f64) -> Hsb {
        Hsb::new(self.hue(value), 1.0, brightness)
    }

    /// Outline of the ring at `value`
    fn outline_path(&self, value: u32, rect: Rect) -> Path {
        let inset = value as f64;
        let mut path = Path::with_capacity(5);
        match self.outline {
            RingOutline::Circle => {
                let radius = (rect.width.min(rect.height) / 2.0 - inset).max(0.0);
                path.add_arc(rect.center(), radius, Angle::ZERO, Angle::radians(TAU), false)
                    .close();
            }
            RingOutline::Rectangle => {
                path.add_rect(rect.inset(inset));
            }
        }
        path
    }

    /// Build every ring, outermost first
    pub fn rings(&self, rect: Rect) -> Vec<Ring> {
        (0..self.steps)
            .map(|value| Ring {
                path: self.outline_path(value, rect),
                top: self.color(value, 1.0),
                bottom: self.color(value, 0.5),
            })
            .collect()
    }
}

impl Default for ColorCyclingRings {
    fn default() -> Self {
        Self::new(0.0, 100, RingOutline::Circle)
    }
}

impl Shape for ColorCyclingRings {
    /// All ring outlines, outermost first, one sub-path each
    fn path(&self, rect: Rect) -> Result<Path, ShapeError> {
        let mut path = Path::new();
        for ring in self.rings(rect) {
            path.add_path(&ring.path);
        }

        log::debug!(
            "ColorCyclingRings: {} {:?} rings, {} commands",
            self.steps,
            self.outline,
            path.len()
        );
        Ok(path)
    }

    fn name(&self) -> &str {
        "ColorCyclingRings"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::shapes::PathCommand;

    fn square() -> Rect {
        Rect::from_size(300.0, 300.0)
    }

    #[test]
    fn test_ring_count() {
        let rings = ColorCyclingRings::default();
        assert_eq!(rings.rings(square()).len(), 100);
        assert_eq!(rings.path(square()).unwrap().subpath_count(), 100);

        let none = ColorCyclingRings::new(0.3, 0, RingOutline::Rectangle);
        assert!(none.rings(square()).is_empty());
        assert!(none.path(square()).unwrap().is_empty());
    }

    #[test]
    fn test_hue_wraps() {
        let rings = ColorCyclingRings::new(0.5, 100, RingOutline::Circle);
        assert!((rings.hue(0) - 0.5).abs() < 1e-12);
        assert!((rings.hue(50) - 1.0).abs() < 1e-12);
        assert!((rings.hue(75) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_gradient_colors() {
        let rings = ColorCyclingRings::new(0.1, 10, RingOutline::Circle).rings(square());
        let first = &rings[0];
        assert_eq!(first.top, Hsb::new(0.1, 1.0, 1.0));
        assert_eq!(first.bottom, Hsb::new(0.1, 1.0, 0.5));
    }

    #[test]
    fn test_circle_rings_shrink() {
        let rings = ColorCyclingRings::new(0.0, 200, RingOutline::Circle).rings(square());

        let radius = |ring: &Ring| match ring.path.commands()[0] {
            PathCommand::ArcTo { center, radius, .. } => {
                assert_eq!(center, Point::new(150.0, 150.0));
                radius
            }
            other => panic!("expected an arc, got {other:?}"),
        };
        assert_eq!(radius(&rings[0]), 150.0);
        assert_eq!(radius(&rings[10]), 140.0);
        // Past the center the radius stays at zero
        assert_eq!(radius(&rings[199]), 0.0);
    }

    #[test]
    fn test_rectangle_rings() {
        let rings = ColorCyclingRings::new(0.0, 3, RingOutline::Rectangle).rings(square());
        assert_eq!(
            rings[2].path.commands()[0],
            PathCommand::MoveTo(Point::new(2.0, 2.0))
        );
        assert_eq!(
            rings[2].path.commands()[2],
            PathCommand::LineTo(Point::new(298.0, 298.0))
        );
    }
}
