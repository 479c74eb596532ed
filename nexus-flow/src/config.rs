//! Flow layout configuration.
//!
//! Every field is optional in serialized form and falls back to its default,
//! so hosts only spell out what they change:
//!
//! ```
//! use nexus_flow::{FlowConfig, Justification};
//!
//! let json = r#"{ "item_spacing": 8, "justification": "stretch_spaces" }"#;
//! let config = FlowConfig::from_json(json).unwrap();
//! assert_eq!(config.item_spacing, Some(8.0));
//! assert_eq!(config.justification, Justification::StretchSpaces);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::FlowError;
use crate::geometry::Axis;
use crate::item::Flexibility;

/// How leftover line space is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justification {
    /// Items keep their ideal breadth; lines may end short.
    #[default]
    None,
    /// Flexible items grow toward their maximum breadth.
    StretchItems,
    /// Gaps between items grow equally.
    StretchSpaces,
    /// Items grow first, whatever is left goes into the gaps.
    StretchItemsAndSpaces,
}

impl Justification {
    pub fn stretches_items(self) -> bool {
        matches!(self, Justification::StretchItems | Justification::StretchItemsAndSpaces)
    }

    pub fn stretches_spaces(self) -> bool {
        matches!(self, Justification::StretchSpaces | Justification::StretchItemsAndSpaces)
    }
}

/// Where an item sits inside its line along the depth axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossAlignment {
    /// Align to the leading depth edge of the line.
    Leading,
    /// Center within the line.
    #[default]
    Center,
    /// Align to the trailing depth edge of the line.
    Trailing,
    /// Guide at a fraction of the item's depth (0 = leading, 1 = trailing).
    Fraction(f32),
    /// Use the item's own depth-axis guide (e.g. a baseline).
    Guide,
}

/// Where a short line sits inside the placement bounds along the breadth axis.
///
/// Measured from the physical leading edge (left or top), so `Trailing`
/// means right or bottom even when the breadth direction is reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineAlignment {
    #[default]
    Leading,
    Center,
    Trailing,
}

impl LineAlignment {
    /// Fraction of the free breadth placed before the line.
    pub fn fraction(self) -> f32 {
        match self {
            LineAlignment::Leading => 0.0,
            LineAlignment::Center => 0.5,
            LineAlignment::Trailing => 1.0,
        }
    }
}

/// Tunable constants of the optimal line breaker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakerTuning {
    /// Weight of the squared deviation of items from their ideal breadth.
    pub stretch_weight: f32,
    /// Per-line bias that favors filling earlier lines.
    pub bias: f32,
    /// Item count above which the greedy breaker is used instead.
    pub max_optimal_items: usize,
}

impl Default for BreakerTuning {
    fn default() -> Self {
        Self {
            stretch_weight: 1.0,
            bias: 5.0,
            max_optimal_items: 1024,
        }
    }
}

/// Complete configuration of a flow layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Flow direction.
    pub axis: Axis,
    /// Spacing between items. `None` derives it from item preferences.
    pub item_spacing: Option<f32>,
    /// Spacing between lines. `None` derives it from item preferences.
    pub line_spacing: Option<f32>,
    /// Item alignment within a line (depth axis).
    pub alignment: CrossAlignment,
    /// Line alignment within the bounds (breadth axis).
    pub line_alignment: LineAlignment,
    pub justification: Justification,
    /// Use the optimal (balanced) breaker instead of the greedy one.
    pub distribute_items_evenly: bool,
    /// Place items from the trailing breadth edge.
    pub reversed_breadth: bool,
    /// Stack lines from the trailing depth edge.
    pub reversed_depth: bool,
    /// Flip the breadth direction after every line.
    pub alternating_reversed_breadth: bool,
    /// Flexibility for items that do not override it.
    pub default_flexibility: Flexibility,
    pub tuning: BreakerTuning,
}

impl FlowConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, FlowError> {
        let config: FlowConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the layout cannot work with.
    pub fn validate(&self) -> Result<(), FlowError> {
        check_spacing("item_spacing", self.item_spacing)?;
        check_spacing("line_spacing", self.line_spacing)?;

        if let CrossAlignment::Fraction(fraction) = self.alignment {
            if !fraction.is_finite() {
                return Err(FlowError::InvalidAlignment(fraction));
            }
        }

        let tuning = &self.tuning;
        if !(tuning.stretch_weight.is_finite() && tuning.stretch_weight >= 0.0) {
            return Err(FlowError::InvalidTuning(format!(
                "stretch_weight must be finite and non-negative, got {}",
                tuning.stretch_weight
            )));
        }
        if !(tuning.bias.is_finite() && tuning.bias >= 0.0) {
            return Err(FlowError::InvalidTuning(format!(
                "bias must be finite and non-negative, got {}",
                tuning.bias
            )));
        }
        Ok(())
    }
}

fn check_spacing(field: &'static str, value: Option<f32>) -> Result<(), FlowError> {
    match value {
        Some(value) if !value.is_finite() || value < 0.0 => {
            Err(FlowError::InvalidSpacing { field, value })
        }
        _ => Ok(()),
    }
}
