//! Cross-axis composition: turn wrapped lines into stacked, aligned lines.
//!
//! Line breaking only decides breadths. This module adds depth: every line is
//! as deep as its deepest item, lines are stacked with line spacing between
//! them, and each item is positioned inside its line by interpolating between
//! the line's leading and trailing depth edges.

use crate::cache::FlowCache;
use crate::config::{CrossAlignment, FlowConfig};
use crate::geometry::{Axis, FlowSize, Point, Rect, Size};
use crate::item::SpacingPreference;
use crate::line_break::{WrappedLine, FIT_TOLERANCE};
use crate::proposal::Proposal;

/// An item on a composed line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineItem {
    pub index: usize,
    /// Resolved breadth and cached ideal depth.
    pub size: FlowSize,
    pub leading_space: f32,
}

/// One row (or column) of items.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub items: Vec<LineItem>,
    /// Breadth including leading spaces; depth of the deepest item.
    pub size: FlowSize,
    /// Space before this line. Zero for the first line.
    pub spacing: f32,
    /// A single item wider than the available breadth.
    pub overflow: bool,
}

/// Lines plus the bounding size of all of them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutResult {
    pub lines: Vec<Line>,
    pub size: FlowSize,
}

impl LayoutResult {
    pub fn physical_size(&self, axis: Axis) -> Size {
        self.size.physical(axis)
    }

    /// Item indices per line.
    pub fn line_indices(&self) -> Vec<Vec<usize>> {
        self.lines
            .iter()
            .map(|line| line.items.iter().map(|item| item.index).collect())
            .collect()
    }
}

/// Where an item ends up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub index: usize,
    /// Top-left corner in the coordinates of the placement bounds.
    pub origin: Point,
    pub size: Size,
    /// Proposal to hand to the item when it lays out its own content.
    pub proposal: Proposal,
}

/// Attach depths and line spacing to wrapped lines.
pub fn compose_lines<S: SpacingPreference>(
    wrapped: Vec<WrappedLine>,
    cache: &FlowCache<S>,
    line_spacing: Option<f32>,
    available: f32,
) -> LayoutResult {
    let axis = cache.axis();
    let entries = cache.entries();

    let mut lines = Vec::with_capacity(wrapped.len());
    let mut previous: Option<S> = None;

    for wrapped_line in wrapped {
        let mut merged = S::default();
        let items: Vec<LineItem> = wrapped_line
            .iter()
            .map(|item| {
                let entry = &entries[item.index];
                merged.merge(&entry.spacing);
                LineItem {
                    index: item.index,
                    size: FlowSize::new(item.breadth, entry.ideal.depth),
                    leading_space: item.leading_space,
                }
            })
            .collect();

        let breadth: f32 = items
            .iter()
            .map(|item| item.leading_space + item.size.breadth)
            .sum();
        let depth = items.iter().map(|item| item.size.depth).fold(0.0, f32::max);
        let spacing = match &previous {
            None => 0.0,
            Some(before) => line_spacing
                .unwrap_or_else(|| before.distance(&merged, axis.perpendicular())),
        };
        let overflow = breadth > available + FIT_TOLERANCE;
        if overflow {
            tracing::debug!(breadth, available, "line overflows the available breadth");
        }

        lines.push(Line {
            items,
            size: FlowSize::new(breadth, depth),
            spacing,
            overflow,
        });
        previous = Some(merged);
    }

    let size = bounding_size(&lines);
    LayoutResult { lines, size }
}

/// `(max line breadth, Σ line depth + Σ line spacing)`.
pub fn bounding_size(lines: &[Line]) -> FlowSize {
    lines.iter().fold(FlowSize::ZERO, |size, line| FlowSize {
        breadth: size.breadth.max(line.size.breadth),
        depth: size.depth + line.spacing + line.size.depth,
    })
}

/// Position every item of `result` inside `bounds`.
///
/// `guide` returns an item's depth-axis guide for its resolved physical size;
/// it is only consulted for [`CrossAlignment::Guide`].
///
/// Each line is first laid out within its own breadth, reversed if needed,
/// and then shifted by the line alignment from the physical leading edge of
/// `bounds`.
pub fn place_lines<F>(
    result: &LayoutResult,
    bounds: Rect,
    config: &FlowConfig,
    guide: F,
) -> Vec<Placement>
where
    F: Fn(usize, Size) -> f32,
{
    let axis = config.axis;
    let depth_axis = axis.perpendicular();
    let bounds_breadth = bounds.size().value(axis);

    let mut placements = Vec::new();
    let mut depth_offset = 0.0;

    for (line_index, line) in result.lines.iter().enumerate() {
        depth_offset += line.spacing;
        let line_depth_origin = if config.reversed_depth {
            bounds.max(depth_axis) - depth_offset - line.size.depth
        } else {
            bounds.min(depth_axis) + depth_offset
        };
        depth_offset += line.size.depth;

        let odd_line = line_index % 2 == 1;
        let reversed = config.reversed_breadth ^ (config.alternating_reversed_breadth && odd_line);
        let free_breadth = (bounds_breadth - line.size.breadth).max(0.0);
        let line_origin = bounds.min(axis) + config.line_alignment.fraction() * free_breadth;

        let mut breadth_offset = 0.0;
        for item in &line.items {
            breadth_offset += item.leading_space;
            let within_line = if reversed {
                line.size.breadth - breadth_offset - item.size.breadth
            } else {
                breadth_offset
            };
            breadth_offset += item.size.breadth;

            let size = item.size.physical(axis);
            let free_depth = line.size.depth - item.size.depth;
            let fraction = guide_fraction(config.alignment, item, size, &guide);
            let depth_origin = line_depth_origin + fraction * free_depth;
            let proposed = FlowSize::new(item.size.breadth, line.size.depth);

            placements.push(Placement {
                index: item.index,
                origin: Point::from_flow(line_origin + within_line, depth_origin, axis),
                size,
                proposal: Proposal::from_flow(proposed, axis),
            });
        }
    }

    placements
}

/// `guide / item depth`: 0 aligns to the leading depth edge, 1 to the trailing one.
fn guide_fraction<F>(alignment: CrossAlignment, item: &LineItem, size: Size, guide: &F) -> f32
where
    F: Fn(usize, Size) -> f32,
{
    match alignment {
        CrossAlignment::Leading => 0.0,
        CrossAlignment::Center => 0.5,
        CrossAlignment::Trailing => 1.0,
        CrossAlignment::Fraction(fraction) => fraction,
        CrossAlignment::Guide if item.size.depth > 0.0 => {
            guide(item.index, size) / item.size.depth
        }
        CrossAlignment::Guide => 0.0,
    }
}
