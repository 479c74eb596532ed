//! Flow layout error types.

use thiserror::Error;

use crate::geometry::Axis;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("invalid {field}: {value} (expected a finite, non-negative value)")]
    InvalidSpacing { field: &'static str, value: f32 },

    #[error("invalid alignment fraction: {0}")]
    InvalidAlignment(f32),

    #[error("invalid breaker tuning: {0}")]
    InvalidTuning(String),

    #[error("cache holds {cached} items but {items} were supplied")]
    CacheMismatch { cached: usize, items: usize },

    #[error("cache was built for the {cache:?} axis but the layout flows along {layout:?}")]
    AxisMismatch { cache: Axis, layout: Axis },

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
