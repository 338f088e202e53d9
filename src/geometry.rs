//! Geometry primitives - Point, Rect, Angle
//!
//! Coordinates follow the usual screen convention: X grows to the right,
//! Y grows downward, and a rect's origin is its top-left corner.

use std::f64::consts::PI;
use std::ops;

use serde::{Deserialize, Serialize};

/// A point in two-dimensional space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<nalgebra::Point2<f64>> for Point {
    fn from(p: nalgebra::Point2<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Point> for nalgebra::Point2<f64> {
    fn from(p: Point) -> Self {
        nalgebra::Point2::new(p.x, p.y)
    }
}

/// An axis-aligned bounding box
///
/// Every generator receives one of these and lays its output out inside it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rect from its origin and size
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rect at the origin
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// The center point of the rect
    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Shrink every edge inward by `amount`
    ///
    /// Width and height never go below zero; an over-inset rect collapses
    /// onto its center line.
    pub fn inset(&self, amount: f64) -> Self {
        let width = (self.width - 2.0 * amount).max(0.0);
        let height = (self.height - 2.0 * amount).max(0.0);
        Self {
            x: self.mid_x() - width / 2.0,
            y: self.mid_y() - height / 2.0,
            width,
            height,
        }
    }
}

/// An angle, stored in radians
///
/// Angles increase clockwise on screen because the Y axis points down.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub const ZERO: Angle = Angle { radians: 0.0 };

    /// Create an angle from radians
    pub const fn radians(radians: f64) -> Self {
        Self { radians }
    }

    /// Create an angle from degrees
    pub fn degrees(degrees: f64) -> Self {
        Self {
            radians: degrees * PI / 180.0,
        }
    }

    /// Get the angle in radians
    pub fn as_radians(self) -> f64 {
        self.radians
    }

    /// Get the angle in degrees
    pub fn as_degrees(self) -> f64 {
        self.radians * 180.0 / PI
    }
}

impl ops::Add for Angle {
    type Output = Angle;

    fn add(self, other: Angle) -> Angle {
        Angle::radians(self.radians + other.radians)
    }
}

impl ops::Sub for Angle {
    type Output = Angle;

    fn sub(self, other: Angle) -> Angle {
        Angle::radians(self.radians - other.radians)
    }
}

impl ops::Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::radians(-self.radians)
    }
}
