//! Arc - a single circular arc that can be inset
//!
//! Angles are given the way people usually think about a dial: 0° points
//! straight up and positive angles go clockwise. Internally the arc is
//! rotated back by a quarter turn, and the sweep flag is flipped because the
//! screen's angle convention already runs clockwise.

use serde::{Deserialize, Serialize};

use super::path::Path;
use super::traits::{InsettableShape, Shape, ShapeError};
use crate::geometry::{Angle, Rect};

/// Quarter-turn correction so that angle 0 points up
const ROTATION_ADJUSTMENT_DEGREES: f64 = 90.0;

/// A circular arc centered in the rect, sized to its width
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub start_angle: Angle,
    pub end_angle: Angle,
    pub clockwise: bool,
    /// Distance the arc sits in from the rect's edge
    #[serde(default)]
    pub inset_amount: f64,
}

impl Arc {
    /// Create an arc with no inset
    pub fn new(start_angle: Angle, end_angle: Angle, clockwise: bool) -> Self {
        Self {
            start_angle,
            end_angle,
            clockwise,
            inset_amount: 0.0,
        }
    }

    /// Radius of the arc inside `rect`
    pub fn radius_in(&self, rect: Rect) -> f64 {
        rect.width / 2.0 - self.inset_amount
    }
}

impl Default for Arc {
    fn default() -> Self {
        Self::new(Angle::ZERO, Angle::degrees(180.0), true)
    }
}

impl Shape for Arc {
    fn path(&self, rect: Rect) -> Result<Path, ShapeError> {
        let adjustment = Angle::degrees(ROTATION_ADJUSTMENT_DEGREES);

        let mut path = Path::with_capacity(1);
        path.add_arc(
            rect.center(),
            self.radius_in(rect),
            self.start_angle - adjustment,
            self.end_angle - adjustment,
            !self.clockwise,
        );
        Ok(path)
    }

    fn name(&self) -> &str {
        "Arc"
    }
}

impl InsettableShape for Arc {
    fn inset(&self, amount: f64) -> Self {
        Self {
            inset_amount: self.inset_amount + amount,
            ..*self
        }
    }
}
