//! Size proposals passed to items during measurement.
//!
//! A proposal offers an item a size per axis; `None` means "unspecified",
//! asking the item for its ideal size on that axis. Three canonical
//! proposals probe an item's sizing range:
//!
//! - `Proposal::ZERO` → minimum size
//! - `Proposal::UNSPECIFIED` → ideal size
//! - `Proposal::INFINITY` → maximum size

use crate::geometry::{Axis, FlowSize};

/// A proposed size. `None` on an axis means unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Proposal {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl Proposal {
    pub const ZERO: Self = Self {
        width: Some(0.0),
        height: Some(0.0),
    };

    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    pub const INFINITY: Self = Self {
        width: Some(f32::INFINITY),
        height: Some(f32::INFINITY),
    };

    #[inline]
    pub const fn new(width: Option<f32>, height: Option<f32>) -> Self {
        Self { width, height }
    }

    /// A fully specified proposal.
    #[inline]
    pub const fn exact(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Build a physical proposal from (breadth, depth) values.
    #[inline]
    pub fn from_flow(size: FlowSize, axis: Axis) -> Self {
        let physical = size.physical(axis);
        Self::exact(physical.width, physical.height)
    }

    /// The proposed value along `axis`, if specified.
    #[inline]
    pub fn value(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// The breadth available for wrapping along `axis`.
    ///
    /// Unspecified and NaN values are unbounded; negative values clamp to zero.
    #[inline]
    pub fn available(&self, axis: Axis) -> f32 {
        match self.value(axis) {
            Some(value) if value.is_nan() => f32::INFINITY,
            Some(value) => value.max(0.0),
            None => f32::INFINITY,
        }
    }
}
