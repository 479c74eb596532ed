//! Leaf flow items.
//!
//! `BoxItem` is a plain measurable box with a sizing range. It is the
//! reference [`FlowItem`] adapter: hosts with simple content use it
//! directly, and the crate's own tests lay out nothing else.

use crate::geometry::Size;
use crate::item::{EdgeSpacing, Flexibility, FlowItem, Guides, LineBreak};
use crate::proposal::Proposal;

/// A box with minimum, ideal and maximum sizes.
///
/// Proposals are clamped into `[min, max]`; unspecified dimensions pick the
/// ideal size.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxItem {
    pub min: Size,
    pub ideal: Size,
    pub max: Size,
    /// Growth priority.
    pub priority: f64,
    /// Flexibility override (`None` defers to the layout).
    pub flexibility: Option<Flexibility>,
    /// Manual line-breaking hints.
    pub line_break: LineBreak,
    /// Preferred spacing around the box.
    pub spacing: EdgeSpacing,
    /// Vertical guide offset (e.g. a text baseline). Defaults to the top edge.
    pub baseline: Option<f32>,
}

impl BoxItem {
    /// A box that is the same size at every proposal.
    pub fn rigid(width: f32, height: f32) -> Self {
        let size = Size::new(width, height);
        Self::flexible(size, size, size)
    }

    /// A box with an explicit sizing range.
    pub fn flexible(min: Size, ideal: Size, max: Size) -> Self {
        Self {
            min,
            ideal,
            max,
            priority: 0.0,
            flexibility: None,
            line_break: LineBreak::NONE,
            spacing: EdgeSpacing::default(),
            baseline: None,
        }
    }

    /// A zero-size marker that forces a line break.
    pub fn break_marker() -> Self {
        let mut item = Self::rigid(0.0, 0.0);
        item.line_break = LineBreak::MARKER;
        item
    }

    /// Set the growth priority.
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }

    /// Override the layout's default flexibility.
    pub fn with_flexibility(mut self, flexibility: Flexibility) -> Self {
        self.flexibility = Some(flexibility);
        self
    }

    /// Force the box to start a new line.
    pub fn start_new_line(mut self) -> Self {
        self.line_break.should_start_new_line = true;
        self
    }

    /// Set the preferred spacing around the box.
    pub fn with_spacing(mut self, spacing: EdgeSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set a vertical alignment guide.
    pub fn with_baseline(mut self, baseline: f32) -> Self {
        self.baseline = Some(baseline);
        self
    }
}

impl FlowItem for BoxItem {
    type Spacing = EdgeSpacing;

    fn size_that_fits(&self, proposal: Proposal) -> Size {
        let width = proposal.width.unwrap_or(self.ideal.width);
        let height = proposal.height.unwrap_or(self.ideal.height);
        Size::new(
            width.max(self.min.width).min(self.max.width),
            height.max(self.min.height).min(self.max.height),
        )
    }

    fn guides(&self, size: Size) -> Guides {
        Guides::new(0.0, self.baseline.unwrap_or(0.0).min(size.height))
    }

    fn spacing(&self) -> EdgeSpacing {
        self.spacing
    }

    fn priority(&self) -> f64 {
        self.priority
    }

    fn flexibility(&self) -> Option<Flexibility> {
        self.flexibility
    }

    fn line_break(&self) -> LineBreak {
        self.line_break
    }
}
