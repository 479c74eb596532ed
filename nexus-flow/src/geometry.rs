//! Geometry primitives for flow layout.
//!
//! Physical types (`Point`, `Size`, `Rect`) live in screen coordinates.
//! `FlowSize` is the orientation-independent view of the same numbers:
//! `breadth` runs along the flow direction and `depth` along the direction
//! lines stack in. `Axis` converts between the two.

use serde::{Deserialize, Serialize};

/// A physical axis. For a flow layout it names the flow (breadth) direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Items flow left to right, lines stack top to bottom.
    #[default]
    Horizontal,
    /// Items flow top to bottom, lines stack left to right.
    Vertical,
}

impl Axis {
    /// The other axis.
    #[inline]
    pub fn perpendicular(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Build a physical point from (breadth, depth) coordinates.
    #[inline]
    pub fn from_flow(breadth: f32, depth: f32, axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self { x: breadth, y: depth },
            Axis::Vertical => Self { x: depth, y: breadth },
        }
    }

    /// Coordinate along `axis`.
    #[inline]
    pub fn value(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// A physical size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent along `axis`.
    #[inline]
    pub fn value(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// View this size relative to a flow axis.
    #[inline]
    pub fn flow(&self, axis: Axis) -> FlowSize {
        FlowSize {
            breadth: self.value(axis),
            depth: self.value(axis.perpendicular()),
        }
    }
}

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn origin(&self) -> Point {
        Point { x: self.x, y: self.y }
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Leading edge along `axis` (left or top).
    #[inline]
    pub fn min(&self, axis: Axis) -> f32 {
        self.origin().value(axis)
    }

    /// Trailing edge along `axis` (right or bottom).
    #[inline]
    pub fn max(&self, axis: Axis) -> f32 {
        self.origin().value(axis) + self.size().value(axis)
    }
}

/// An orientation-independent size: `breadth` along the flow, `depth` across it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowSize {
    pub breadth: f32,
    pub depth: f32,
}

impl FlowSize {
    pub const ZERO: Self = Self {
        breadth: 0.0,
        depth: 0.0,
    };

    #[inline]
    pub const fn new(breadth: f32, depth: f32) -> Self {
        Self { breadth, depth }
    }

    /// Convert back to a physical size for the given flow axis.
    #[inline]
    pub fn physical(&self, axis: Axis) -> Size {
        match axis {
            Axis::Horizontal => Size::new(self.breadth, self.depth),
            Axis::Vertical => Size::new(self.depth, self.breadth),
        }
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self {
            breadth: self.breadth.max(other.breadth),
            depth: self.depth.max(other.depth),
        }
    }
}
