//! Parametric curves - Flower and Spirograph
//!
//! Both shapes sweep an angle through a range. The sweep is always driven
//! by an integer counter times a fixed step, so two calls with the same
//! parameters visit exactly the same angles.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use super::path::Path;
use super::traits::{Shape, ShapeError};
use crate::geometry::{Angle, Point, Rect};
use crate::transform::Transform;

/// Number of petals on a flower: one every π/8
pub const PETAL_COUNT: usize = 16;

/// Angle between consecutive spirograph samples, in radians
pub const SPIROGRAPH_STEP: f64 = 0.01;

/// Upper bound on the number of points a spirograph may produce
pub const MAX_SPIROGRAPH_STEPS: usize = 1_000_000;

/// A flower made of 16 elliptical petals rotated about the rect's center
///
/// Each petal is an ellipse in the box `(petal_offset, 0, petal_width,
/// rect.width / 2)`, rotated by its angle and moved to the center.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flower {
    /// Horizontal offset of each petal from the center
    pub petal_offset: f64,
    /// Width of each petal
    pub petal_width: f64,
}

impl Flower {
    pub fn new(petal_offset: f64, petal_width: f64) -> Self {
        Self {
            petal_offset,
            petal_width,
        }
    }
}

impl Default for Flower {
    fn default() -> Self {
        Self::new(-20.0, 100.0)
    }
}

impl Shape for Flower {
    fn path(&self, rect: Rect) -> Result<Path, ShapeError> {
        let mut petal = Path::new();
        petal.add_ellipse(Rect::new(
            self.petal_offset,
            0.0,
            self.petal_width,
            rect.width / 2.0,
        ));

        let to_center = Transform::translation(rect.mid_x(), rect.mid_y());
        let mut path = Path::with_capacity(petal.len() * PETAL_COUNT);
        for number in 0..PETAL_COUNT {
            let angle = Angle::radians(number as f64 * PI / 8.0);
            let position = Transform::rotation(angle).concatenating(&to_center);
            path.add_path(&petal.applying(&position));
        }

        log::debug!("Flower: {} petals, {} commands", PETAL_COUNT, path.len());
        Ok(path)
    }

    fn name(&self) -> &str {
        "Flower"
    }
}

/// Greatest common divisor of two non-negative integers
///
/// `gcd(a, 0) == a`, so `gcd(0, 0) == 0`.
pub fn gcd(a: u32, b: u32) -> u32 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

/// A hypotrochoid: the curve traced by a pen in a wheel rolling inside a ring
///
/// ## Parametric Equation
/// ```text
/// x = (inner - outer) * cos(θ) + distance * cos((inner - outer) / outer * θ)
/// y = (inner - outer) * sin(θ) + distance * sin((inner - outer) / outer * θ)
/// ```
///
/// θ runs from 0 up to `ceil(2π * outer / gcd(inner, outer)) * amount`, the
/// point where the curve closes on itself when `amount` is 1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Spirograph {
    pub inner_radius: i32,
    pub outer_radius: i32,
    /// Distance of the pen from the rolling wheel's center
    pub distance: i32,
    /// Fraction of the full curve to draw
    pub amount: f64,
}

impl Spirograph {
    pub fn new(inner_radius: i32, outer_radius: i32, distance: i32, amount: f64) -> Self {
        Self {
            inner_radius,
            outer_radius,
            distance,
            amount,
        }
    }

    /// Angle at which the sweep stops
    ///
    /// # Errors
    /// Fails on radii that would divide by zero, a negative inner radius,
    /// or an amount that is negative or not finite.
    pub fn end_theta(&self) -> Result<f64, ShapeError> {
        if self.outer_radius <= 0 {
            return Err(ShapeError::invalid(
                "Spirograph",
                format!("outer radius must be positive, got {}", self.outer_radius),
            ));
        }
        if self.inner_radius < 0 {
            return Err(ShapeError::invalid(
                "Spirograph",
                format!("inner radius must not be negative, got {}", self.inner_radius),
            ));
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(ShapeError::invalid(
                "Spirograph",
                format!("amount must be a non-negative number, got {}", self.amount),
            ));
        }

        let divisor = gcd(self.inner_radius.unsigned_abs(), self.outer_radius.unsigned_abs());
        if divisor == 0 {
            return Err(ShapeError::invalid("Spirograph", "radii have no common divisor"));
        }

        Ok((TAU * self.outer_radius as f64 / divisor as f64).ceil() * self.amount)
    }

    /// Number of points the sweep visits, including θ = 0
    ///
    /// # Errors
    /// Same as [`Spirograph::end_theta`], and also fails when the sweep would
    /// need more than `MAX_SPIROGRAPH_STEPS` points.
    pub fn step_count(&self) -> Result<usize, ShapeError> {
        let end_theta = self.end_theta()?;
        // Nudge past rounding noise so that e.g. 19.0 / 0.01 counts as 1900
        let last_step = (end_theta / SPIROGRAPH_STEP + 1e-9).floor();
        let too_many = || {
            ShapeError::invalid(
                "Spirograph",
                format!(
                    "sweep to {} radians needs more than {} points",
                    end_theta, MAX_SPIROGRAPH_STEPS
                ),
            )
        };

        if last_step >= MAX_SPIROGRAPH_STEPS as f64 {
            return Err(too_many());
        }
        (last_step as usize)
            .checked_add(1)
            .filter(|&steps| steps <= MAX_SPIROGRAPH_STEPS)
            .ok_or_else(too_many)
    }
}

impl Default for Spirograph {
    fn default() -> Self {
        Self::new(125, 75, 25, 1.0)
    }
}

impl Shape for Spirograph {
    fn path(&self, rect: Rect) -> Result<Path, ShapeError> {
        let steps = self.step_count()?;

        let outer_radius = self.outer_radius as f64;
        let distance = self.distance as f64;
        let difference = self.inner_radius as f64 - outer_radius;
        let center = rect.center();

        let mut path = Path::with_capacity(steps);
        for i in 0..steps {
            let theta = i as f64 * SPIROGRAPH_STEP;
            let x = difference * theta.cos() + distance * (difference / outer_radius * theta).cos();
            let y = difference * theta.sin() + distance * (difference / outer_radius * theta).sin();
            let point = Point::new(x + center.x, y + center.y);

            if i == 0 {
                path.move_to(point);
            } else {
                path.line_to(point);
            }
        }

        log::debug!(
            "Spirograph {}/{}/{}: {} points",
            self.inner_radius,
            self.outer_radius,
            self.distance,
            steps
        );
        Ok(path)
    }

    fn name(&self) -> &str {
        "Spirograph"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::PathCommand;

    fn square() -> Rect {
        Rect::from_size(300.0, 300.0)
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(125, 75), 25);
        assert_eq!(gcd(75, 125), 25);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(17, 5), 1);
    }

    #[test]
    fn test_flower_petals() {
        for (offset, width) in [(-20.0, 100.0), (0.0, 0.0), (40.0, 10.0), (-40.0, 250.0)] {
            let path = Flower::new(offset, width).path(square()).unwrap();
            assert_eq!(path.subpath_count(), PETAL_COUNT);
        }
    }

    #[test]
    fn test_flower_first_petal_unrotated() {
        let flower = Flower::new(-20.0, 100.0);
        let path = flower.path(square()).unwrap();

        // First petal starts at the ellipse's right-most point, moved to the center
        match path.commands()[0] {
            PathCommand::MoveTo(p) => {
                assert!((p.x - (80.0 + 150.0)).abs() < 1e-9);
                assert!((p.y - (75.0 + 150.0)).abs() < 1e-9);
            }
            other => panic!("expected a move, got {other:?}"),
        }
    }

    #[test]
    fn test_spirograph_default() {
        let spirograph = Spirograph::new(125, 75, 25, 1.0);
        assert_eq!(spirograph.end_theta().unwrap(), 19.0);

        let path = spirograph.path(square()).unwrap();
        assert_eq!(path.len(), 1901);
        assert_eq!(path.len(), (19.0_f64 / SPIROGRAPH_STEP).round() as usize + 1);

        match path.commands()[0] {
            PathCommand::MoveTo(p) => {
                // (inner - outer) + distance, then moved to the center
                assert!((p.x - (50.0 + 25.0 + 150.0)).abs() < 1e-9);
                assert!((p.y - 150.0).abs() < 1e-9);
            }
            other => panic!("expected a move, got {other:?}"),
        }
        assert!(path.commands()[1..]
            .iter()
            .all(|c| matches!(c, PathCommand::LineTo(_))));
    }

    #[test]
    fn test_spirograph_deterministic() {
        let spirograph = Spirograph::new(101, 37, 60, 0.73);
        let a = spirograph.path(square()).unwrap();
        let b = spirograph.path(square()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_spirograph_zero_amount() {
        let path = Spirograph::new(125, 75, 25, 0.0).path(square()).unwrap();
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_spirograph_rejects_bad_radii() {
        let zero_outer = Spirograph::new(125, 0, 25, 1.0).path(square());
        assert!(matches!(
            zero_outer,
            Err(ShapeError::InvalidParameter { shape: "Spirograph", .. })
        ));

        assert!(Spirograph::new(-5, 75, 25, 1.0).path(square()).is_err());
        assert!(Spirograph::new(125, -75, 25, 1.0).path(square()).is_err());
        assert!(Spirograph::new(125, 75, 25, -1.0).path(square()).is_err());
        assert!(Spirograph::new(125, 75, 25, f64::NAN).path(square()).is_err());
    }

    #[test]
    fn test_spirograph_rejects_huge_sweeps() {
        let huge_amount = Spirograph::new(125, 75, 25, 1e300).path(square());
        assert!(matches!(
            huge_amount,
            Err(ShapeError::InvalidParameter { shape: "Spirograph", .. })
        ));

        // gcd(125, 2^31 - 1) == 1, so the sweep is billions of radians long
        let huge_radius = Spirograph::new(125, i32::MAX, 25, 1.0).path(square());
        assert!(matches!(
            huge_radius,
            Err(ShapeError::InvalidParameter { shape: "Spirograph", .. })
        ));

        assert!(Spirograph::new(125, 75, 25, 1e5).step_count().is_err());
    }

    #[test]
    fn test_spirograph_step_limit() {
        // 150/149 is the largest sweep the usual radius range produces
        let widest = Spirograph::new(150, 149, 150, 1.0);
        let steps = widest.step_count().unwrap();
        assert!(steps <= MAX_SPIROGRAPH_STEPS);
        assert_eq!(widest.path(square()).unwrap().len(), steps);
    }

    #[test]
    fn test_spirograph_zero_inner_radius() {
        // gcd(0, outer) == outer, so a zero inner radius is still drawable
        let spirograph = Spirograph::new(0, 50, 10, 1.0);
        assert_eq!(spirograph.end_theta().unwrap(), 7.0);
        assert!(spirograph.path(square()).is_ok());
    }
}
