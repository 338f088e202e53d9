//! Shape trait definition
//!
//! The `Shape` trait is the core abstraction: any parameter record that
//! implements it can turn a bounding rect into a `Path`. Shapes hold no
//! state beyond their parameters, so the same value can be asked for a
//! path any number of times, from any thread.

use thiserror::Error;

use super::path::Path;
use crate::geometry::Rect;

/// Errors that can occur while generating a path
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("Invalid parameter for {shape}: {reason}")]
    InvalidParameter { shape: &'static str, reason: String },
}

impl ShapeError {
    pub(crate) fn invalid(shape: &'static str, reason: impl Into<String>) -> Self {
        let err = ShapeError::InvalidParameter {
            shape,
            reason: reason.into(),
        };
        log::warn!("{}", err);
        err
    }
}

/// A parametric shape that lays itself out inside a rect
///
/// ## Determinism
///
/// Calling `path` twice with the same rect must produce identical output.
/// Implementations that step through a floating-point range do so with an
/// integer counter and a fixed step, never by accumulating the step.
///
/// ## Thread Safety
///
/// Shapes must be `Send + Sync`; generating a path only reads `self`.
pub trait Shape: Send + Sync {
    /// Generate the path for this shape inside `rect`
    ///
    /// # Errors
    /// Returns `ShapeError::InvalidParameter` when the parameters would make
    /// the geometry undefined (a division by zero, for instance).
    fn path(&self, rect: Rect) -> Result<Path, ShapeError>;

    /// Get the name of this shape (for logs and error messages)
    fn name(&self) -> &str;
}

/// A shape that can produce a copy of itself shrunk inward
///
/// Only shapes with a meaningful inset implement this; `inset` never
/// modifies the receiver.
pub trait InsettableShape: Shape + Sized {
    /// Return a copy inset by a further `amount`
    fn inset(&self, amount: f64) -> Self;
}

/// A boxed shape for dynamic dispatch
///
/// ## Example
///
/// ```rust
/// use drawing_paths::{BoxedShape, Rect, Shape, Trapezoid, Triangle};
///
/// let shapes: Vec<BoxedShape> = vec![
///     Box::new(Triangle),
///     Box::new(Trapezoid::new(20.0)),
/// ];
/// for shape in &shapes {
///     assert!(shape.path(Rect::from_size(100.0, 100.0)).is_ok());
/// }
/// ```
pub type BoxedShape = Box<dyn Shape>;
