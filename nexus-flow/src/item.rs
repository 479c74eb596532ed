//! The measurement contract a flow item must satisfy.
//!
//! Hosts implement [`FlowItem`] for whatever they lay out (views, text runs,
//! images). The engine only ever talks to items through this trait, and only
//! while building a [`FlowCache`](crate::FlowCache) or resolving alignment
//! guides during placement.

use serde::{Deserialize, Serialize};

use crate::geometry::{Axis, Size};
use crate::proposal::Proposal;

/// How far an item may grow past its ideal breadth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flexibility {
    /// Never grows; the item keeps its minimum breadth.
    Minimum,
    /// Shrinks toward its minimum when space is tight and grows toward its
    /// maximum only when the justification stretches items.
    #[default]
    Natural,
    /// Expands toward its maximum. An item whose maximum reaches the
    /// available breadth takes a whole line for itself.
    Maximum,
}

/// Manual line-breaking hints attached to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LineBreak {
    /// The item must be the first item of its line.
    pub should_start_new_line: bool,
    /// The item is a zero-size marker whose only purpose is to force a break.
    pub is_line_break_marker: bool,
}

impl LineBreak {
    pub const NONE: Self = Self {
        should_start_new_line: false,
        is_line_break_marker: false,
    };

    pub const START_NEW_LINE: Self = Self {
        should_start_new_line: true,
        is_line_break_marker: false,
    };

    pub const MARKER: Self = Self {
        should_start_new_line: false,
        is_line_break_marker: true,
    };
}

/// Alignment guides of an item, measured from its leading edges.
///
/// A guide is the offset within the item's own box that should line up with
/// the line's alignment reference (a baseline, for instance).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Guides {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Guides {
    #[inline]
    pub const fn new(horizontal: f32, vertical: f32) -> Self {
        Self { horizontal, vertical }
    }

    /// The guide measured along `axis`.
    #[inline]
    pub fn value(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }
}

/// An item's preference for the space around it.
///
/// `merge` must be commutative and associative so that folding the
/// preferences of a whole line does not depend on item order.
pub trait SpacingPreference: Clone + Default {
    /// Fold another preference into this one.
    fn merge(&mut self, other: &Self);

    /// Spacing between `self` and a following neighbour along `axis`.
    fn distance(&self, next: &Self, axis: Axis) -> f32;
}

/// Preferred spacing per physical edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeSpacing {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl EdgeSpacing {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Same preference on every edge.
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl SpacingPreference for EdgeSpacing {
    fn merge(&mut self, other: &Self) {
        self.top = self.top.max(other.top);
        self.right = self.right.max(other.right);
        self.bottom = self.bottom.max(other.bottom);
        self.left = self.left.max(other.left);
    }

    fn distance(&self, next: &Self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.right.max(next.left),
            Axis::Vertical => self.bottom.max(next.top),
        }
    }
}

/// Something the flow engine can measure and place.
pub trait FlowItem {
    /// Opaque spacing preference, combined pairwise with neighbours.
    type Spacing: SpacingPreference;

    /// The size the item picks for a proposal.
    ///
    /// For the canonical proposals this must return the minimum
    /// (`Proposal::ZERO`), ideal (`Proposal::UNSPECIFIED`) and maximum
    /// (`Proposal::INFINITY`) sizes.
    fn size_that_fits(&self, proposal: Proposal) -> Size;

    /// Alignment guides for the item at a resolved size.
    fn guides(&self, _size: Size) -> Guides {
        Guides::default()
    }

    /// Spacing preference used when no explicit spacing is configured.
    fn spacing(&self) -> Self::Spacing {
        Self::Spacing::default()
    }

    /// Growth priority; higher priorities are offered space first.
    fn priority(&self) -> f64 {
        0.0
    }

    /// Per-item flexibility override. `None` uses the layout default.
    fn flexibility(&self) -> Option<Flexibility> {
        None
    }

    /// Manual line-breaking hints.
    fn line_break(&self) -> LineBreak {
        LineBreak::NONE
    }
}

impl<T: FlowItem + ?Sized> FlowItem for &T {
    type Spacing = T::Spacing;

    fn size_that_fits(&self, proposal: Proposal) -> Size {
        (**self).size_that_fits(proposal)
    }

    fn guides(&self, size: Size) -> Guides {
        (**self).guides(size)
    }

    fn spacing(&self) -> Self::Spacing {
        (**self).spacing()
    }

    fn priority(&self) -> f64 {
        (**self).priority()
    }

    fn flexibility(&self) -> Option<Flexibility> {
        (**self).flexibility()
    }

    fn line_break(&self) -> LineBreak {
        (**self).line_break()
    }
}
