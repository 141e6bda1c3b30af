use super::color::css_color;
use gpui::Hsla;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradePointConfig {
    #[serde(with = "css_color")]
    pub color: Hsla,
    /// Global alpha applied while drawing the markers.
    pub alpha: f32,
    /// Radius of a marker for a trade of volume 1.
    pub base_radius: f32,
    pub line_width: f32,
    /// Segments used to approximate each half-disc.
    pub arc_segments: usize,
}

impl Default for TradePointConfig {
    fn default() -> Self {
        Self {
            color: gpui::blue(),
            alpha: 0.7,
            base_radius: 3.0,
            line_width: 1.0,
            arc_segments: 16,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum StepMode {
    /// Step occurs before the point
    Pre,
    /// Step occurs after the point
    Post,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinePlotConfig {
    #[serde(with = "css_color")]
    pub color: Hsla,
    pub line_width: f32,
    pub step: Option<StepMode>,
}

impl Default for LinePlotConfig {
    fn default() -> Self {
        Self {
            color: gpui::blue(),
            line_width: 2.0,
            step: None,
        }
    }
}
