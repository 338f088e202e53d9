//! Affine transforms - rotation and translation
//!
//! A `Transform` is a rigid motion of the plane: rotate about the origin,
//! then translate. Transforms compose with `concatenating`, which applies
//! `self` first and the argument second.

use nalgebra::{Isometry2, Point2};

use crate::geometry::{Angle, Point};

/// A rotation followed by a translation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    isometry: Isometry2<f64>,
}

impl Transform {
    /// The transform that leaves every point where it is
    pub fn identity() -> Self {
        Self {
            isometry: Isometry2::identity(),
        }
    }

    /// Rotate about the origin
    pub fn rotation(angle: Angle) -> Self {
        Self {
            isometry: Isometry2::rotation(angle.as_radians()),
        }
    }

    /// Move every point by a fixed offset
    pub fn translation(x: f64, y: f64) -> Self {
        Self {
            isometry: Isometry2::translation(x, y),
        }
    }

    /// Apply `self`, then `next`
    pub fn concatenating(&self, next: &Transform) -> Self {
        Self {
            isometry: next.isometry * self.isometry,
        }
    }

    /// Transform a single point
    pub fn apply(&self, point: Point) -> Point {
        let point: Point2<f64> = point.into();
        self.isometry.transform_point(&point).into()
    }

    /// The rotation part of this transform
    pub fn rotation_angle(&self) -> Angle {
        Angle::radians(self.isometry.rotation.angle())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
