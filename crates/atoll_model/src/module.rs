//! Rectangular circuit modules with mutable position and orientation.

use crate::geom::Rect;
use serde::{Deserialize, Serialize};

/// A rectangular circuit block identified by a stable name.
///
/// Dimensions and position are integers (layout grid units). The position is
/// assigned by the placement engine and is not part of the module's identity;
/// callers that need a prior placement must snapshot it before re-packing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Module {
    name: String,
    width: i32,
    height: i32,
    x: i32,
    y: i32,
    rotated: bool,
}

impl Module {
    /// Creates a module with the given dimensions at position `(0, 0)`.
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            x: 0,
            y: 0,
            rotated: false,
        }
    }

    /// Returns the module's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current width (already reflecting any rotation).
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Returns the current height (already reflecting any rotation).
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns the x coordinate of the lower-left corner.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Returns the y coordinate of the lower-left corner.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Returns whether the module is currently rotated by 90 degrees.
    pub fn rotated(&self) -> bool {
        self.rotated
    }

    /// Moves the module's lower-left corner.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Rotates the module a quarter turn: swaps width and height and toggles
    /// the orientation flag.
    pub fn rotate(&mut self) {
        std::mem::swap(&mut self.width, &mut self.height);
        self.rotated = !self.rotated;
    }

    /// Records the orientation flag without touching the stored dimensions.
    ///
    /// Used to propagate orientation state across a symmetry pair whose
    /// drawn dimensions already agree; [`rotate`](Self::rotate) is the
    /// geometric quarter turn.
    pub fn set_rotation(&mut self, rotated: bool) {
        self.rotated = rotated;
    }

    /// Returns the module's outline at its current position.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Returns the x coordinate of the module's center.
    pub fn center_x(&self) -> f64 {
        self.rect().center_x()
    }

    /// Returns the y coordinate of the module's center.
    pub fn center_y(&self) -> f64 {
        self.rect().center_y()
    }
}
