//! Viewport geometry.
//!
//! All coordinates are CSS pixels relative to the viewport's top-left corner.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Width and height of a viewport or element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An element's bounding box, as reported by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a rect from its top-left corner and size.
    pub fn from_origin(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether the rect spills past the right or bottom edge of the viewport.
    ///
    /// The top and left edges are not checked: a dragged element can never
    /// be placed at a negative offset.
    pub fn overflows(&self, viewport: Size) -> bool {
        self.right() > viewport.width || self.bottom() > viewport.height
    }

    /// Constrain a candidate top-left corner so this rect's size fits in the viewport.
    ///
    /// Each axis is clamped on its own to `[0, viewport - extent]`.
    pub fn clamp_origin(&self, candidate: Point, viewport: Size) -> Point {
        Point::new(
            clamp_axis(candidate.x, viewport.width, self.width),
            clamp_axis(candidate.y, viewport.height, self.height),
        )
    }
}

/// Clamp one coordinate to `[0, viewport - extent]`.
///
/// When the element is larger than the viewport the range collapses to `0`.
pub fn clamp_axis(value: f64, viewport: f64, extent: f64) -> f64 {
    let max = (viewport - extent).max(0.0);
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}
