//! Flow Layout - wrap items into rows or columns.
//!
//! `FlowLayout` ties the pieces together. A layout pass is two calls against
//! one [`FlowCache`]: [`FlowLayout::measure`] reports the bounding size and
//! [`FlowLayout::place`] positions the items. Both run the same deterministic
//! computation on the same cache, so they always agree on line breaks.
//!
//! ```
//! use nexus_flow::{BoxItem, CrossAlignment, FlowLayout, Proposal, Rect, Size};
//!
//! let layout = FlowLayout::horizontal(CrossAlignment::Center, Some(10.0), Some(20.0));
//! let items = vec![BoxItem::rigid(50.0, 50.0); 3];
//! let cache = layout.make_cache(&items);
//!
//! let proposal = Proposal::exact(130.0, 130.0);
//! let size = layout.measure(proposal, &cache).unwrap();
//! assert_eq!(size, Size::new(110.0, 120.0));
//!
//! let bounds = Rect::new(0.0, 0.0, 130.0, 130.0);
//! let placements = layout.place(bounds, proposal, &items, &cache).unwrap();
//! assert_eq!(placements[2].origin.y, 70.0);
//! ```

use crate::cache::FlowCache;
use crate::compose::{self, LayoutResult, Placement};
use crate::config::{BreakerTuning, CrossAlignment, FlowConfig, Justification, LineAlignment};
use crate::distribute;
use crate::error::FlowError;
use crate::geometry::{Axis, Rect, Size};
use crate::item::{Flexibility, FlowItem, SpacingPreference};
use crate::line_break::{
    self, BreakItem, GreedyBreaker, LineBreaker, OptimalBreaker, WrappedLine,
};
use crate::proposal::Proposal;

// =========================================================================
// FlowLayout
// =========================================================================

/// A flow layout: items are placed along the axis until a line is full, then
/// wrap onto the next line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowLayout {
    config: FlowConfig,
}

impl FlowLayout {
    /// Horizontal flow with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a configuration, rejecting invalid values.
    pub fn from_config(config: FlowConfig) -> Result<Self, FlowError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Rows, wrapping downward.
    pub fn horizontal(
        alignment: CrossAlignment,
        item_spacing: Option<f32>,
        line_spacing: Option<f32>,
    ) -> Self {
        Self::with_axis(Axis::Horizontal, alignment, item_spacing, line_spacing)
    }

    /// Columns, wrapping rightward.
    pub fn vertical(
        alignment: CrossAlignment,
        item_spacing: Option<f32>,
        line_spacing: Option<f32>,
    ) -> Self {
        Self::with_axis(Axis::Vertical, alignment, item_spacing, line_spacing)
    }

    fn with_axis(
        axis: Axis,
        alignment: CrossAlignment,
        item_spacing: Option<f32>,
        line_spacing: Option<f32>,
    ) -> Self {
        Self {
            config: FlowConfig {
                axis,
                alignment,
                item_spacing,
                line_spacing,
                ..FlowConfig::default()
            },
        }
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    // ---- Builder setters ----

    /// Set the flow direction.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.config.axis = axis;
        self
    }

    /// Set spacing between items. `None` uses item preferences.
    pub fn item_spacing(mut self, spacing: Option<f32>) -> Self {
        self.config.item_spacing = spacing;
        self
    }

    /// Set spacing between lines. `None` uses item preferences.
    pub fn line_spacing(mut self, spacing: Option<f32>) -> Self {
        self.config.line_spacing = spacing;
        self
    }

    /// Set item alignment within a line.
    pub fn alignment(mut self, alignment: CrossAlignment) -> Self {
        self.config.alignment = alignment;
        self
    }

    /// Set line alignment within the bounds.
    pub fn line_alignment(mut self, alignment: LineAlignment) -> Self {
        self.config.line_alignment = alignment;
        self
    }

    pub fn justification(mut self, justification: Justification) -> Self {
        self.config.justification = justification;
        self
    }

    /// Balance lines with the optimal breaker.
    pub fn distribute_items_evenly(mut self, enabled: bool) -> Self {
        self.config.distribute_items_evenly = enabled;
        self
    }

    pub fn reversed_breadth(mut self, reversed: bool) -> Self {
        self.config.reversed_breadth = reversed;
        self
    }

    pub fn reversed_depth(mut self, reversed: bool) -> Self {
        self.config.reversed_depth = reversed;
        self
    }

    pub fn alternating_reversed_breadth(mut self, alternating: bool) -> Self {
        self.config.alternating_reversed_breadth = alternating;
        self
    }

    /// Set the flexibility of items that do not choose their own.
    pub fn default_flexibility(mut self, flexibility: Flexibility) -> Self {
        self.config.default_flexibility = flexibility;
        self
    }

    pub fn tuning(mut self, tuning: BreakerTuning) -> Self {
        self.config.tuning = tuning;
        self
    }

    // ---- Layout pass ----

    /// Measure `items` once for a layout pass.
    pub fn make_cache<I: FlowItem>(&self, items: &[I]) -> FlowCache<I::Spacing> {
        FlowCache::new(items, self.config.axis, self.config.default_flexibility)
    }

    /// Break, justify and compose lines for `proposal`.
    ///
    /// The configuration is validated first, so values set through the
    /// builder are held to the same rules as [`FlowLayout::from_config`].
    pub fn layout<S: SpacingPreference>(
        &self,
        proposal: Proposal,
        cache: &FlowCache<S>,
    ) -> Result<LayoutResult, FlowError> {
        self.config.validate()?;
        if cache.axis() != self.config.axis {
            return Err(FlowError::AxisMismatch {
                cache: cache.axis(),
                layout: self.config.axis,
            });
        }

        let available = proposal.available(self.config.axis);
        let items = self.break_items(cache, available);

        let optimal = self.config.distribute_items_evenly;
        let mut lines = if optimal {
            OptimalBreaker::new(self.config.tuning).wrap(&items, available)
        } else {
            GreedyBreaker.wrap(&items, available)
        };

        if self.config.justification.stretches_spaces() && available.is_finite() {
            for line in &mut lines {
                stretch_line_spaces(line, &items, available);
            }
        }

        let result = compose::compose_lines(lines, cache, self.config.line_spacing, available);
        tracing::debug!(
            items = items.len(),
            lines = result.lines.len(),
            optimal,
            available,
            breadth = result.size.breadth,
            depth = result.size.depth,
            "flow layout pass"
        );
        Ok(result)
    }

    /// Bounding size of the items for `proposal`.
    pub fn measure<S: SpacingPreference>(
        &self,
        proposal: Proposal,
        cache: &FlowCache<S>,
    ) -> Result<Size, FlowError> {
        let result = self.layout(proposal, cache)?;
        Ok(result.physical_size(self.config.axis))
    }

    /// Position `items` inside `bounds`.
    ///
    /// `items` must be the slice `cache` was built from; placements come back
    /// in item order.
    pub fn place<I: FlowItem>(
        &self,
        bounds: Rect,
        proposal: Proposal,
        items: &[I],
        cache: &FlowCache<I::Spacing>,
    ) -> Result<Vec<Placement>, FlowError> {
        if items.len() != cache.len() {
            return Err(FlowError::CacheMismatch {
                cached: cache.len(),
                items: items.len(),
            });
        }

        let result = self.layout(proposal, cache)?;
        let depth_axis = self.config.axis.perpendicular();
        Ok(compose::place_lines(&result, bounds, &self.config, |index, size| {
            items[index].guides(size).value(depth_axis)
        }))
    }

    /// Breadth ranges as seen by the line breakers.
    fn break_items<S: SpacingPreference>(
        &self,
        cache: &FlowCache<S>,
        available: f32,
    ) -> Vec<BreakItem> {
        let stretch_items = self.config.justification.stretches_items();
        let bounded = available.is_finite();
        let spacings = cache.item_spacings(self.config.item_spacing);

        cache
            .entries()
            .iter()
            .zip(spacings)
            .map(|(entry, spacing)| {
                let min = entry.min.breadth;
                let ideal = entry.ideal.breadth;
                let mut upper = match entry.flexibility {
                    Flexibility::Minimum => min,
                    Flexibility::Natural if stretch_items => entry.max.breadth,
                    Flexibility::Natural => ideal,
                    Flexibility::Maximum => entry.max.breadth,
                };
                if !bounded {
                    upper = upper.min(ideal);
                }
                BreakItem {
                    min,
                    ideal: ideal.min(upper),
                    max: upper,
                    spacing,
                    priority: entry.priority,
                    flexibility: entry.flexibility,
                    line_break: entry.line_break,
                }
            })
            .collect()
    }
}

/// Spread a line's slack over its gaps.
fn stretch_line_spaces(line: &mut WrappedLine, items: &[BreakItem], available: f32) {
    let (Some(first), Some(last)) = (line.first(), line.last()) else {
        return;
    };
    let first_content = line_break::first_content(&items[first.index..=last.index]);
    let used: f32 = line.iter().map(|item| item.leading_space + item.breadth).sum();

    let mut leading: Vec<f32> = line.iter().map(|item| item.leading_space).collect();
    distribute::stretch_spaces(&mut leading, first_content, available - used);
    for (item, space) in line.iter_mut().zip(leading) {
        item.leading_space = space;
    }
}
