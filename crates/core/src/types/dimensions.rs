//! Physical dimensions of a piece of furniture.

use serde::{Deserialize, Serialize};

/// Width, height and depth in centimetres, each optional.
///
/// The shape is fixed: unknown keys are rejected when decoding, so free-form
/// JSON never makes it past the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
}

impl Dimensions {
    /// Build dimensions, returning `None` when no measurement is present.
    #[must_use]
    pub fn new(width: Option<f64>, height: Option<f64>, depth: Option<f64>) -> Option<Self> {
        let dims = Self {
            width,
            height,
            depth,
        };
        (!dims.is_empty()).then_some(dims)
    }

    /// True when no measurement is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none() && self.depth.is_none()
    }

    /// Format as `W cm × H cm × D cm`, missing measurements shown as 0.
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{}cm × {}cm × {}cm",
            self.width.unwrap_or(0.0),
            self.height.unwrap_or(0.0),
            self.depth.unwrap_or(0.0)
        )
    }
}
