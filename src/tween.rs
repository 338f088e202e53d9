//! Tweening - interpolating between two parameter records
//!
//! Shapes themselves never animate. To animate a shape, interpolate its
//! parameters for the current progress and generate a fresh path from the
//! result. Integer fields are interpolated as floating point and then
//! truncated toward zero, so a checkerboard animating from 4 to 8 rows
//! steps through 4, 5, 6, 7, 8 rather than rounding early.

use crate::geometry::{Angle, Rect};
use crate::shapes::{
    Arc, Arrow, CheckerBoard, ColorCyclingRings, Flower, Path, Shape, ShapeError, ShapeParams,
    Spirograph, Trapezoid, Triangle,
};

/// Linear interpolation between two floats
///
/// Exact at both ends: `t = 0` gives `from` and `t = 1` gives `to`.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from * (1.0 - t) + to * t
}

fn lerp_u32(from: u32, to: u32, t: f64) -> u32 {
    lerp(from as f64, to as f64, t) as u32
}

fn lerp_i32(from: i32, to: i32, t: f64) -> i32 {
    lerp(from as f64, to as f64, t) as i32
}

fn lerp_angle(from: Angle, to: Angle, t: f64) -> Angle {
    Angle::radians(lerp(from.as_radians(), to.as_radians(), t))
}

/// A value that can be blended with another of the same type
pub trait Animatable: Sized {
    /// Blend from `self` toward `to`
    ///
    /// `progress` is clamped to [0, 1]; 0 returns `self`, 1 returns `to`.
    fn interpolate(&self, to: &Self, progress: f64) -> Self;
}

/// Clamp progress into [0, 1], treating NaN as the start
fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

impl Animatable for CheckerBoard {
    fn interpolate(&self, to: &Self, progress: f64) -> Self {
        let t = clamp_progress(progress);
        CheckerBoard::new(lerp_u32(self.rows, to.rows, t), lerp_u32(self.columns, to.columns, t))
    }
}

impl Animatable for Trapezoid {
    fn interpolate(&self, to: &Self, progress: f64) -> Self {
        let t = clamp_progress(progress);
        Trapezoid::new(lerp(self.inset_amount, to.inset_amount, t))
    }
}

impl Animatable for Flower {
    fn interpolate(&self, to: &Self, progress: f64) -> Self {
        let t = clamp_progress(progress);
        Flower::new(
            lerp(self.petal_offset, to.petal_offset, t),
            lerp(self.petal_width, to.petal_width, t),
        )
    }
}

impl Animatable for Triangle {
    fn interpolate(&self, _to: &Self, _progress: f64) -> Self {
        Triangle
    }
}

impl Animatable for Arc {
    /// The sweep direction flips only once the tween has finished
    fn interpolate(&self, to: &Self, progress: f64) -> Self {
        let t = clamp_progress(progress);
        Arc {
            start_angle: lerp_angle(self.start_angle, to.start_angle, t),
            end_angle: lerp_angle(self.end_angle, to.end_angle, t),
            clockwise: if t >= 1.0 { to.clockwise } else { self.clockwise },
            inset_amount: lerp(self.inset_amount, to.inset_amount, t),
        }
    }
}

impl Animatable for Spirograph {
    fn interpolate(&self, to: &Self, progress: f64) -> Self {
        let t = clamp_progress(progress);
        Spirograph::new(
            lerp_i32(self.inner_radius, to.inner_radius, t),
            lerp_i32(self.outer_radius, to.outer_radius, t),
            lerp_i32(self.distance, to.distance, t),
            lerp(self.amount, to.amount, t),
        )
    }
}

impl Animatable for Arrow {
    fn interpolate(&self, to: &Self, progress: f64) -> Self {
        let t = clamp_progress(progress);
        Arrow::new(lerp(self.x_offset, to.x_offset, t), lerp(self.y_offset, to.y_offset, t))
    }
}

impl Animatable for ColorCyclingRings {
    fn interpolate(&self, to: &Self, progress: f64) -> Self {
        let t = clamp_progress(progress);
        ColorCyclingRings::new(
            lerp(self.amount, to.amount, t),
            lerp_u32(self.steps, to.steps, t),
            if t >= 1.0 { to.outline } else { self.outline },
        )
    }
}

impl ShapeParams {
    /// Interpolate toward parameters of the same shape
    ///
    /// Returns `None` when `to` is a different shape.
    pub fn interpolate(&self, to: &ShapeParams, progress: f64) -> Option<ShapeParams> {
        let params = match (self, to) {
            (ShapeParams::CheckerBoard(a), ShapeParams::CheckerBoard(b)) => {
                ShapeParams::CheckerBoard(a.interpolate(b, progress))
            }
            (ShapeParams::Trapezoid(a), ShapeParams::Trapezoid(b)) => {
                ShapeParams::Trapezoid(a.interpolate(b, progress))
            }
            (ShapeParams::Flower(a), ShapeParams::Flower(b)) => {
                ShapeParams::Flower(a.interpolate(b, progress))
            }
            (ShapeParams::Triangle(a), ShapeParams::Triangle(b)) => {
                ShapeParams::Triangle(a.interpolate(b, progress))
            }
            (ShapeParams::Arc(a), ShapeParams::Arc(b)) => {
                ShapeParams::Arc(a.interpolate(b, progress))
            }
            (ShapeParams::Spirograph(a), ShapeParams::Spirograph(b)) => {
                ShapeParams::Spirograph(a.interpolate(b, progress))
            }
            (ShapeParams::Arrow(a), ShapeParams::Arrow(b)) => {
                ShapeParams::Arrow(a.interpolate(b, progress))
            }
            (ShapeParams::ColorCyclingRings(a), ShapeParams::ColorCyclingRings(b)) => {
                ShapeParams::ColorCyclingRings(a.interpolate(b, progress))
            }
            _ => {
                log::debug!("Cannot interpolate {} into {}", self.name(), to.name());
                return None;
            }
        };
        Some(params)
    }
}

/// A transition between two parameter records of one shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<S> {
    pub from: S,
    pub to: S,
}

impl<S: Animatable + Shape> Tween<S> {
    pub fn new(from: S, to: S) -> Self {
        Self { from, to }
    }

    /// Parameters at `progress`
    pub fn params_at(&self, progress: f64) -> S {
        self.from.interpolate(&self.to, progress)
    }

    /// Path at `progress`
    ///
    /// # Errors
    /// Propagates the generator's error for the interpolated parameters.
    pub fn path_at(&self, progress: f64, rect: Rect) -> Result<Path, ShapeError> {
        self.params_at(progress).path(rect)
    }
}
