//! Nexus Flow: wrapping flow layout engine
//!
//! Nexus Flow takes an ordered sequence of measurable items and an available
//! breadth, and lays the items out in consecutive lines:
//! - Greedy or balanced (optimal) line breaking
//! - Priority-ordered growth of flexible items
//! - Justification by growing items, gaps, or both
//! - Cross-axis alignment with item-provided guides
//! - Manual line breaks
//!
//! # Architecture
//!
//! Everything is computed in (breadth, depth) space, so rows and columns share
//! one implementation. A `FlowCache` measures every item once per pass; both
//! the size query and the placement read the same cache, which keeps their
//! line breaks identical.
//!
//! # Usage
//!
//! ```
//! use nexus_flow::{BoxItem, CrossAlignment, FlowLayout, Proposal, Rect};
//!
//! let layout = FlowLayout::horizontal(CrossAlignment::Leading, Some(1.0), Some(1.0));
//! let items = vec![BoxItem::rigid(5.0, 1.0); 4];
//! let cache = layout.make_cache(&items);
//!
//! let proposal = Proposal::exact(12.0, 10.0);
//! let size = layout.measure(proposal, &cache)?;
//! let bounds = Rect::new(0.0, 0.0, size.width, size.height);
//! let placements = layout.place(bounds, proposal, &items, &cache)?;
//! assert_eq!(placements.len(), 4);
//! # Ok::<(), nexus_flow::FlowError>(())
//! ```

// Geometry and measurement
pub mod geometry;
pub mod proposal;
pub mod item;
pub mod elements;
pub mod cache;

// Configuration and errors
pub mod config;
pub mod error;

// Layout algorithm
pub mod distribute;
pub mod line_break;
pub mod compose;
pub mod flow;

pub use cache::{FlowCache, ItemCacheEntry};
pub use compose::{LayoutResult, Line, LineItem, Placement};
pub use config::{BreakerTuning, CrossAlignment, FlowConfig, Justification, LineAlignment};
pub use elements::BoxItem;
pub use error::FlowError;
pub use flow::FlowLayout;
pub use geometry::{Axis, FlowSize, Point, Rect, Size};
pub use item::{EdgeSpacing, Flexibility, FlowItem, Guides, LineBreak, SpacingPreference};
pub use line_break::{
    BreakItem, GreedyBreaker, LineBreaker, OptimalBreaker, WrappedItem, WrappedLine,
};
pub use proposal::Proposal;
