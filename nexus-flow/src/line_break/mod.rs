//! Line breaking: partition an ordered item sequence into lines.
//!
//! Both strategies work on [`BreakItem`]s (breadth ranges plus hints) and
//! produce [`WrappedLine`]s. They share [`fit_span`], which decides whether a
//! run of consecutive items can form one line and, if so, how the line's
//! space is distributed between them.
//!
//! - [`GreedyBreaker`]: fill each line as far as it goes, O(n).
//! - [`OptimalBreaker`]: minimize total slack over all lines, O(n²).

mod greedy;
mod optimal;

pub use greedy::GreedyBreaker;
pub use optimal::OptimalBreaker;

use crate::distribute::{self, FlexSlot};
use crate::item::{Flexibility, LineBreak};

/// Slack allowed when comparing accumulated breadths against the available breadth.
pub(crate) const FIT_TOLERANCE: f32 = 1e-3;

/// One item as seen by the line breakers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakItem {
    /// Smallest breadth the item accepts.
    pub min: f32,
    /// Breadth the item would like.
    pub ideal: f32,
    /// Largest breadth the item may grow to in this pass.
    pub max: f32,
    /// Space before the item when it does not start a line.
    pub spacing: f32,
    pub priority: f64,
    pub flexibility: Flexibility,
    pub line_break: LineBreak,
}

impl BreakItem {
    /// A fixed-breadth item.
    pub fn rigid(breadth: f32, spacing: f32) -> Self {
        Self {
            min: breadth,
            ideal: breadth,
            max: breadth,
            spacing,
            priority: 0.0,
            flexibility: Flexibility::Natural,
            line_break: LineBreak::NONE,
        }
    }

    /// Whether this item must occupy a line without other content.
    #[inline]
    pub fn fills_line(&self, available: f32) -> bool {
        self.flexibility == Flexibility::Maximum && self.max >= available
    }

    #[inline]
    pub fn is_marker(&self) -> bool {
        self.line_break.is_line_break_marker
    }

    fn slot(&self) -> FlexSlot {
        FlexSlot {
            lower: self.min,
            upper: self.max,
            priority: self.priority,
        }
    }
}

/// An item placed on a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrappedItem {
    /// Index into the original item sequence.
    pub index: usize,
    /// Resolved breadth after flexible growth.
    pub breadth: f32,
    /// Space before the item on its line.
    pub leading_space: f32,
}

impl WrappedItem {
    pub fn new(index: usize, breadth: f32, leading_space: f32) -> Self {
        Self { index, breadth, leading_space }
    }
}

pub type WrappedLine = Vec<WrappedItem>;

/// A line-breaking strategy.
pub trait LineBreaker {
    /// Wrap `items` into lines of at most `available` breadth.
    ///
    /// Lines preserve item order and cover every item exactly once. A line
    /// only exceeds `available` when it holds a single oversized item.
    fn wrap(&self, items: &[BreakItem], available: f32) -> Vec<WrappedLine>;
}

/// A feasible line: resolved breadths and leading spaces for a span.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanFit {
    pub sizes: Vec<f32>,
    pub leading: Vec<f32>,
    /// `available` minus everything on the line. Negative on overflow.
    pub remaining: f32,
}

impl SpanFit {
    /// Lay a span out at minimum breadths without any feasibility checks.
    pub fn at_minimum(span: &[BreakItem], available: f32) -> Self {
        let leading = leading_spaces(span);
        let used: f32 = span.iter().map(|item| item.min).sum::<f32>() + leading.iter().sum::<f32>();
        Self {
            sizes: span.iter().map(|item| item.min).collect(),
            leading,
            remaining: available - used,
        }
    }

    /// Attach original indices, starting at `start`.
    pub fn into_line(self, start: usize) -> WrappedLine {
        self.sizes
            .into_iter()
            .zip(self.leading)
            .enumerate()
            .map(|(offset, (breadth, leading))| WrappedItem::new(start + offset, breadth, leading))
            .collect()
    }
}

/// Position of the first content item of a span: a leading marker is skipped.
#[inline]
pub(crate) fn first_content(span: &[BreakItem]) -> usize {
    match span.first() {
        Some(first) if first.is_marker() && span.len() > 1 => 1,
        _ => 0,
    }
}

/// Space before each item of a span; everything up to the first content item starts the line.
fn leading_spaces(span: &[BreakItem]) -> Vec<f32> {
    let first = first_content(span);
    span.iter()
        .enumerate()
        .map(|(position, item)| if position <= first { 0.0 } else { item.spacing })
        .collect()
}

/// Start index of every line followed by the total item count.
pub fn breakpoints(lines: &[WrappedLine]) -> Vec<usize> {
    let mut points: Vec<usize> = lines
        .iter()
        .filter_map(|line| line.first().map(|item| item.index))
        .collect();
    let end = lines
        .last()
        .and_then(|line| line.last())
        .map_or(0, |item| item.index + 1);
    points.push(end);
    points
}

/// Check whether `span` can form one line and resolve its sizes.
///
/// Returns `None` when a hint is violated (a marker that is not first, an
/// item that must start a line but does not), when a line-filling item
/// shares the line with other content, or when the minimum breadths do not
/// fit. A single item always fits, possibly overflowing.
pub fn fit_span(span: &[BreakItem], available: f32) -> Option<SpanFit> {
    if span.is_empty() {
        return None;
    }
    let first = first_content(span);

    for (position, item) in span.iter().enumerate() {
        if item.is_marker() && position > 0 {
            return None;
        }
        if item.line_break.should_start_new_line && position > first {
            return None;
        }
    }

    let content = &span[first..];
    if content.len() > 1 && content.iter().any(|item| item.fills_line(available)) {
        return None;
    }

    let leading = leading_spaces(span);
    let spacing: f32 = leading.iter().sum();
    let minimum: f32 = span.iter().map(|item| item.min).sum::<f32>() + spacing;
    if minimum > available + FIT_TOLERANCE && content.len() > 1 {
        return None;
    }

    let slots: Vec<FlexSlot> = span.iter().map(BreakItem::slot).collect();
    let growth = distribute::grow_items(&slots, available - minimum);
    let used: f32 = growth.sizes.iter().sum::<f32>() + spacing;

    Some(SpanFit {
        sizes: growth.sizes,
        leading,
        remaining: available - used,
    })
}
