//! Shapes module - parametric path generators
//!
//! This module provides:
//! - `Shape` trait for abstracting over different shape types
//! - Primitive shapes: Triangle, Trapezoid, Arrow, CheckerBoard
//! - Curves: Flower, Spirograph
//! - The insettable `Arc`
//! - Color-cycling rings
//! - `ShapeParams`, a tagged union over all of the above

mod arc;
mod curves;
mod path;
mod primitives;
mod rings;
mod traits;

pub use arc::Arc;
pub use curves::{gcd, Flower, Spirograph, MAX_SPIROGRAPH_STEPS, PETAL_COUNT, SPIROGRAPH_STEP};
pub use path::{Path, PathCommand, ELLIPSE_SEGMENTS};
pub use primitives::{Arrow, CheckerBoard, Trapezoid, Triangle};
pub use rings::{ColorCyclingRings, Ring, RingOutline};
pub use traits::{BoxedShape, InsettableShape, Shape, ShapeError};

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Available shape types
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    CheckerBoard,
    Trapezoid,
    Flower,
    Triangle,
    Arc,
    Spirograph,
    Arrow,
    ColorCyclingRings,
}

impl ShapeKind {
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::CheckerBoard,
            ShapeKind::Trapezoid,
            ShapeKind::Flower,
            ShapeKind::Triangle,
            ShapeKind::Arc,
            ShapeKind::Spirograph,
            ShapeKind::Arrow,
            ShapeKind::ColorCyclingRings,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::CheckerBoard => "CheckerBoard",
            ShapeKind::Trapezoid => "Trapezoid",
            ShapeKind::Flower => "Flower",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Arc => "Arc",
            ShapeKind::Spirograph => "Spirograph",
            ShapeKind::Arrow => "Arrow",
            ShapeKind::ColorCyclingRings => "ColorCyclingRings",
        }
    }
}

/// Parameters for any one shape
///
/// Each variant wraps that shape's own parameter record; there is no
/// relationship between variants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum ShapeParams {
    CheckerBoard(CheckerBoard),
    Trapezoid(Trapezoid),
    Flower(Flower),
    Triangle(Triangle),
    Arc(Arc),
    Spirograph(Spirograph),
    Arrow(Arrow),
    ColorCyclingRings(ColorCyclingRings),
}

impl ShapeParams {
    /// Which shape these parameters belong to
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeParams::CheckerBoard(_) => ShapeKind::CheckerBoard,
            ShapeParams::Trapezoid(_) => ShapeKind::Trapezoid,
            ShapeParams::Flower(_) => ShapeKind::Flower,
            ShapeParams::Triangle(_) => ShapeKind::Triangle,
            ShapeParams::Arc(_) => ShapeKind::Arc,
            ShapeParams::Spirograph(_) => ShapeKind::Spirograph,
            ShapeParams::Arrow(_) => ShapeKind::Arrow,
            ShapeParams::ColorCyclingRings(_) => ShapeKind::ColorCyclingRings,
        }
    }

    /// Borrow the wrapped parameters as a `Shape`
    pub fn as_shape(&self) -> &dyn Shape {
        match self {
            ShapeParams::CheckerBoard(s) => s,
            ShapeParams::Trapezoid(s) => s,
            ShapeParams::Flower(s) => s,
            ShapeParams::Triangle(s) => s,
            ShapeParams::Arc(s) => s,
            ShapeParams::Spirograph(s) => s,
            ShapeParams::Arrow(s) => s,
            ShapeParams::ColorCyclingRings(s) => s,
        }
    }

    /// Inset the shape, if it supports insetting
    pub fn inset(&self, amount: f64) -> Option<ShapeParams> {
        match self {
            ShapeParams::Arc(arc) => Some(ShapeParams::Arc(arc.inset(amount))),
            _ => None,
        }
    }
}

impl Shape for ShapeParams {
    fn path(&self, rect: Rect) -> Result<Path, ShapeError> {
        self.as_shape().path(rect)
    }

    fn name(&self) -> &str {
        self.kind().name()
    }
}

/// Generate the path for any shape
///
/// # Errors
/// Propagates `ShapeError::InvalidParameter` from the shape's generator.
pub fn generate(params: &ShapeParams, rect: Rect) -> Result<Path, ShapeError> {
    params.path(rect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Angle;

    fn every_shape() -> Vec<ShapeParams> {
        vec![
            ShapeParams::CheckerBoard(CheckerBoard::default()),
            ShapeParams::Trapezoid(Trapezoid::default()),
            ShapeParams::Flower(Flower::default()),
            ShapeParams::Triangle(Triangle),
            ShapeParams::Arc(Arc::default()),
            ShapeParams::Spirograph(Spirograph::default()),
            ShapeParams::Arrow(Arrow::default()),
            ShapeParams::ColorCyclingRings(ColorCyclingRings::default()),
        ]
    }

    #[test]
    fn test_every_kind_covered() {
        let kinds: Vec<ShapeKind> = every_shape().iter().map(ShapeParams::kind).collect();
        assert_eq!(kinds, ShapeKind::all());
    }

    #[test]
    fn test_generate_is_deterministic() {
        let rect = Rect::from_size(300.0, 300.0);
        for params in every_shape() {
            let a = generate(&params, rect).unwrap();
            let b = generate(&params, rect).unwrap();
            assert!(!a.is_empty(), "{} produced nothing", params.name());
            assert_eq!(a, b, "{} is not deterministic", params.name());
        }
    }

    #[test]
    fn test_generate_propagates_errors() {
        let params = ShapeParams::Spirograph(Spirograph::new(10, 0, 5, 1.0));
        let err = generate(&params, Rect::from_size(10.0, 10.0)).unwrap_err();
        assert!(err.to_string().contains("Spirograph"));
    }

    #[test]
    fn test_only_arc_insets() {
        let arc = ShapeParams::Arc(Arc::new(Angle::ZERO, Angle::degrees(90.0), true));
        match arc.inset(5.0) {
            Some(ShapeParams::Arc(inset)) => assert_eq!(inset.inset_amount, 5.0),
            other => panic!("expected an inset arc, got {other:?}"),
        }

        assert!(ShapeParams::Triangle(Triangle).inset(5.0).is_none());
        assert!(ShapeParams::Flower(Flower::default()).inset(5.0).is_none());
    }

    #[test]
    fn test_params_json() {
        let params = ShapeParams::Flower(Flower::new(-20.0, 100.0));
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("\"shape\":\"Flower\""));
        let back: ShapeParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn test_boxed_shapes() {
        let shapes: Vec<BoxedShape> = vec![Box::new(Triangle), Box::new(Arrow::default())];
        let names: Vec<&str> = shapes.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Triangle", "Arrow"]);
    }
}
