//! Primitive shapes - Triangle, Trapezoid, Arrow, CheckerBoard
//!
//! These are fixed polygons whose corners are picked from the rect's
//! min/mid/max reference points, nudged by a parameter or two.

use serde::{Deserialize, Serialize};

use super::path::Path;
use super::traits::{Shape, ShapeError};
use crate::geometry::{Point, Rect};

/// An isosceles triangle filling the rect
///
/// Apex at the top middle, base along the bottom edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Triangle;

impl Shape for Triangle {
    fn path(&self, rect: Rect) -> Result<Path, ShapeError> {
        let apex = Point::new(rect.mid_x(), rect.min_y());

        let mut path = Path::with_capacity(5);
        path.move_to(apex)
            .line_to(Point::new(rect.min_x(), rect.max_y()))
            .line_to(Point::new(rect.max_x(), rect.max_y()))
            .line_to(apex)
            .close();
        Ok(path)
    }

    fn name(&self) -> &str {
        "Triangle"
    }
}

/// A trapezoid whose top edge is pulled in from both sides
///
/// ```text
///    inset ┌────────┐ inset
///         /          \
///        └────────────┘
/// ```
///
/// Negative insets are allowed and flare the top edge outward.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trapezoid {
    /// How far the top corners sit in from the sides
    pub inset_amount: f64,
}

impl Trapezoid {
    pub fn new(inset_amount: f64) -> Self {
        Self { inset_amount }
    }
}

impl Default for Trapezoid {
    fn default() -> Self {
        Self::new(50.0)
    }
}

impl Shape for Trapezoid {
    fn path(&self, rect: Rect) -> Result<Path, ShapeError> {
        let mut path = Path::with_capacity(5);
        path.move_to(Point::new(rect.min_x(), rect.max_y()))
            .line_to(Point::new(rect.min_x() + self.inset_amount, rect.min_y()))
            .line_to(Point::new(rect.max_x() - self.inset_amount, rect.min_y()))
            .line_to(Point::new(rect.max_x(), rect.max_y()))
            .close();
        Ok(path)
    }

    fn name(&self) -> &str {
        "Trapezoid"
    }
}

/// An upward arrow: a triangular head on top of a rectangular shaft
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    /// Half the width of the shaft
    pub x_offset: f64,
    /// How far above the vertical middle the head's base sits
    pub y_offset: f64,
}

impl Arrow {
    pub fn new(x_offset: f64, y_offset: f64) -> Self {
        Self { x_offset, y_offset }
    }
}

impl Default for Arrow {
    fn default() -> Self {
        Self::new(40.0, 20.0)
    }
}

impl Shape for Arrow {
    fn path(&self, rect: Rect) -> Result<Path, ShapeError> {
        let tip = Point::new(rect.mid_x(), rect.min_y());
        let head_base = rect.mid_y() - self.y_offset;
        let shaft_left = rect.mid_x() - self.x_offset;
        let shaft_right = rect.mid_x() + self.x_offset;

        let mut path = Path::with_capacity(9);
        path.move_to(tip)
            .line_to(Point::new(rect.min_x(), head_base))
            .line_to(Point::new(shaft_left, head_base))
            .line_to(Point::new(shaft_left, rect.max_y()))
            .line_to(Point::new(shaft_right, rect.max_y()))
            .line_to(Point::new(shaft_right, head_base))
            .line_to(Point::new(rect.max_x(), head_base))
            .line_to(tip)
            .close();
        Ok(path)
    }

    fn name(&self) -> &str {
        "Arrow"
    }
}

/// A checkerboard of filled cells
///
/// The rect is split into `rows × columns` equal cells and every cell where
/// `row + column` is even becomes a closed rectangle sub-path. A board with
/// no rows or no columns is simply empty.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckerBoard {
    pub rows: u32,
    pub columns: u32,
}

impl CheckerBoard {
    pub fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    /// Number of filled cells: half the board, rounded up
    pub fn filled_cells(&self) -> usize {
        (self.rows as usize * self.columns as usize).div_ceil(2)
    }
}

impl Default for CheckerBoard {
    fn default() -> Self {
        Self::new(4, 4)
    }
}

impl Shape for CheckerBoard {
    fn path(&self, rect: Rect) -> Result<Path, ShapeError> {
        if self.rows == 0 || self.columns == 0 {
            log::debug!("CheckerBoard with {}x{} cells is empty", self.rows, self.columns);
            return Ok(Path::new());
        }

        let row_size = rect.height / self.rows as f64;
        let column_size = rect.width / self.columns as f64;

        let mut path = Path::with_capacity(self.filled_cells() * 5);
        for row in 0..self.rows {
            for col in 0..self.columns {
                if (row + col) % 2 == 0 {
                    path.add_rect(Rect::new(
                        rect.min_x() + column_size * col as f64,
                        rect.min_y() + row_size * row as f64,
                        column_size,
                        row_size,
                    ));
                }
            }
        }

        log::debug!(
            "CheckerBoard {}x{}: {} commands",
            self.rows,
            self.columns,
            path.len()
        );
        Ok(path)
    }

    fn name(&self) -> &str {
        "CheckerBoard"
    }
}
