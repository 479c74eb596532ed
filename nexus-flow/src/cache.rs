//! Per-pass measurement cache.
//!
//! Measuring an item can be expensive (text shaping, nested layout), and a
//! layout pass needs every item's sizing range twice: once to report a size
//! and once to place. `FlowCache` queries each item exactly once and is then
//! read by both calls, which is what keeps their line breaks identical.
//!
//! The cache is an immutable value. Build a new one whenever the items change;
//! nothing is carried over between passes.

use crate::geometry::{Axis, FlowSize};
use crate::item::{Flexibility, FlowItem, LineBreak, SpacingPreference};
use crate::proposal::Proposal;

/// Snapshot of one item's layout-relevant properties.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCacheEntry<S> {
    pub priority: f64,
    pub spacing: S,
    pub min: FlowSize,
    pub ideal: FlowSize,
    pub max: FlowSize,
    pub line_break: LineBreak,
    /// Resolved flexibility (item override or layout default).
    pub flexibility: Flexibility,
}

impl<S: SpacingPreference> ItemCacheEntry<S> {
    /// Measure an item at the three canonical proposals.
    pub fn measure<I>(item: &I, axis: Axis, default_flexibility: Flexibility) -> Self
    where
        I: FlowItem<Spacing = S>,
    {
        let line_break = item.line_break();
        let (min, ideal, max) = if line_break.is_line_break_marker {
            (FlowSize::ZERO, FlowSize::ZERO, FlowSize::ZERO)
        } else {
            let min = item.size_that_fits(Proposal::ZERO).flow(axis);
            let ideal = item.size_that_fits(Proposal::UNSPECIFIED).flow(axis).max(min);
            let max = item.size_that_fits(Proposal::INFINITY).flow(axis).max(ideal);
            (min, ideal, max)
        };

        Self {
            priority: item.priority(),
            spacing: item.spacing(),
            min,
            ideal,
            max,
            line_break,
            flexibility: item.flexibility().unwrap_or(default_flexibility),
        }
    }
}

/// Measurements for every item of one container, for one layout pass.
#[derive(Debug, Clone)]
pub struct FlowCache<S> {
    axis: Axis,
    entries: Vec<ItemCacheEntry<S>>,
}

impl<S: SpacingPreference> FlowCache<S> {
    /// Measure all items along `axis`.
    pub fn new<I>(items: &[I], axis: Axis, default_flexibility: Flexibility) -> Self
    where
        I: FlowItem<Spacing = S>,
    {
        let entries = items
            .iter()
            .map(|item| ItemCacheEntry::measure(item, axis, default_flexibility))
            .collect();
        Self { axis, entries }
    }

    /// The flow axis the sizes were measured along.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn entries(&self) -> &[ItemCacheEntry<S>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Spacing before each item along the flow; the first item gets zero.
    pub fn item_spacings(&self, explicit: Option<f32>) -> Vec<f32> {
        let mut spacings = Vec::with_capacity(self.entries.len());
        if self.entries.is_empty() {
            return spacings;
        }
        spacings.push(0.0);
        for pair in self.entries.windows(2) {
            let spacing = match explicit {
                Some(spacing) => spacing,
                None => pair[0].spacing.distance(&pair[1].spacing, self.axis),
            };
            spacings.push(spacing);
        }
        spacings
    }
}
