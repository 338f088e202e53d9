//! drawing-paths - parametric vector path generators
//!
//! Each shape is a small parameter record that turns a bounding rect into a
//! `Path`: an ordered list of move, line, arc and close commands that any
//! renderer (a canvas, an SVG writer, a GPU tessellator) can replay.
//!
//! ```rust
//! use drawing_paths::{generate, Rect, ShapeParams, Spirograph};
//!
//! let params = ShapeParams::Spirograph(Spirograph::new(125, 75, 25, 1.0));
//! let path = generate(&params, Rect::from_size(300.0, 300.0)).unwrap();
//! assert_eq!(path.len(), 1901);
//! ```
//!
//! Generators are pure: no shared state, no I/O, and identical inputs always
//! give identical paths. Animation is done outside the generators by
//! interpolating parameters with [`tween`] and generating again.

pub mod color;
pub mod geometry;
pub mod settings;
pub mod shapes;
pub mod transform;
pub mod tween;

pub use color::{Hsb, Rgb};
pub use geometry::{Angle, Point, Rect};
pub use settings::{SettingsError, ShapeSettings};
pub use shapes::{
    generate, Arc, Arrow, BoxedShape, CheckerBoard, ColorCyclingRings, Flower, InsettableShape,
    Path, PathCommand, Ring, RingOutline, Shape, ShapeError, ShapeKind, ShapeParams, Spirograph,
    Trapezoid, Triangle,
};
pub use transform::Transform;
pub use tween::{Animatable, Tween};
