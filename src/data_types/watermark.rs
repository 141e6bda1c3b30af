// Watermark overlay configuration

use super::color::parse_color;
use crate::anchor::AnchorPosition;
use eyre::{eyre, Result, WrapErr};
use gpui::Hsla;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// Which render pass an overlay is attached to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderOrder {
    /// Painted before any series.
    Background,
    /// Painted after every series.
    #[default]
    Foreground,
}

impl FromStr for RenderOrder {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "background" => Ok(Self::Background),
            "foreground" => Ok(Self::Foreground),
            other => Err(eyre!("unknown render order {:?}", other)),
        }
    }
}

/// Distance kept between the watermark and the plot edges.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Margin {
    Uniform(f32),
    Pair([f32; 2]),
}

impl Margin {
    /// Horizontal and vertical margin.
    pub fn xy(&self) -> (f32, f32) {
        match *self {
            Self::Uniform(m) => (m, m),
            Self::Pair([x, y]) => (x, y),
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::Uniform(10.0)
    }
}

/// A CSS-like font shorthand such as `60px Arial` or `bold 30px "Roboto Mono"`.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub size: f32,
    pub family: String,
    pub bold: bool,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            size: 30.0,
            family: "Arial".to_string(),
            bold: false,
        }
    }
}

impl FromStr for FontSpec {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let size_idx = tokens
            .iter()
            .position(|t| t.ends_with("px"))
            .ok_or_else(|| eyre!("font {:?} has no pixel size", s))?;
        let size = tokens[size_idx]
            .trim_end_matches("px")
            .parse::<f32>()
            .wrap_err_with(|| format!("invalid font size in {:?}", s))?;
        let family = tokens[size_idx + 1..]
            .join(" ")
            .trim_matches(|c| c == '"' || c == '\'')
            .to_string();
        if family.is_empty() {
            return Err(eyre!("font {:?} has no family", s));
        }
        let bold = tokens[..size_idx].contains(&"bold");
        Ok(Self { size, family, bold })
    }
}

/// Raw watermark options, string-typed the way dashboards write them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatermarkOptions {
    pub mode: String,
    pub order: String,
    pub position: String,
    pub opacity: f32,
    pub margin: Margin,
    pub text: String,
    pub color: String,
    pub font: String,
    pub src: String,
    pub scaling: f32,
}

impl Default for WatermarkOptions {
    fn default() -> Self {
        Self {
            mode: "text".to_string(),
            order: "foreground".to_string(),
            position: "c".to_string(),
            opacity: 0.3,
            margin: Margin::default(),
            text: "COPYRIGHT".to_string(),
            color: "rgb(0, 0, 0)".to_string(),
            font: "30px Arial".to_string(),
            src: "watermark.png".to_string(),
            scaling: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum WatermarkContent {
    Text {
        text: String,
        color: Hsla,
        font: FontSpec,
    },
    Image {
        src: String,
        scaling: f32,
    },
}

/// Resolved watermark configuration.
///
/// `position` and `content` are `None` when the options named something
/// unknown; such a watermark draws nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct WatermarkConfig {
    pub order: RenderOrder,
    pub position: Option<AnchorPosition>,
    pub opacity: f32,
    pub margin: Margin,
    pub content: Option<WatermarkContent>,
}

impl WatermarkConfig {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            order: RenderOrder::Foreground,
            position: Some(AnchorPosition::Center),
            opacity: 0.3,
            margin: Margin::default(),
            content: Some(WatermarkContent::Text {
                text: text.into(),
                color: gpui::black(),
                font: FontSpec::default(),
            }),
        }
    }

    pub fn image(src: impl Into<String>, scaling: f32) -> Self {
        Self {
            content: Some(WatermarkContent::Image {
                src: src.into(),
                scaling,
            }),
            ..Self::text("")
        }
    }

    pub fn at(mut self, position: AnchorPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_order(mut self, order: RenderOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_font(mut self, font: FontSpec) -> Self {
        if let Some(WatermarkContent::Text { font: f, .. }) = &mut self.content {
            *f = font;
        }
        self
    }

    pub fn with_color(mut self, color: Hsla) -> Self {
        if let Some(WatermarkContent::Text { color: c, .. }) = &mut self.content {
            *c = color;
        }
        self
    }

    /// Parses JSON watermark options. Malformed JSON is an error; unknown
    /// option values only degrade the result (see [`Self::from_options`]).
    pub fn from_json(raw: &str) -> Result<Self> {
        let options: WatermarkOptions =
            serde_json::from_str(raw).wrap_err("failed to parse watermark options")?;
        Ok(Self::from_options(&options))
    }

    /// Resolves raw options. Problems are logged and never fatal: an unknown
    /// order falls back to foreground, an unknown position or mode leaves the
    /// watermark inert, and unparseable colors or fonts use the defaults.
    pub fn from_options(options: &WatermarkOptions) -> Self {
        let order = options.order.parse().unwrap_or_else(|err| {
            warn!("{}; using foreground", err);
            RenderOrder::Foreground
        });

        let position = match options.position.parse::<AnchorPosition>() {
            Ok(p) => Some(p),
            Err(err) => {
                warn!("{}; watermark will not be drawn", err);
                None
            }
        };

        let content = match options.mode.as_str() {
            "text" => Some(WatermarkContent::Text {
                text: options.text.clone(),
                color: parse_color(&options.color).unwrap_or_else(|err| {
                    warn!("watermark color: {:#}", err);
                    gpui::black()
                }),
                font: options.font.parse().unwrap_or_else(|err| {
                    warn!("watermark font: {:#}", err);
                    FontSpec::default()
                }),
            }),
            "image" => Some(WatermarkContent::Image {
                src: options.src.clone(),
                scaling: options.scaling,
            }),
            other => {
                warn!("unknown watermark mode {:?}; watermark will not be drawn", other);
                None
            }
        };

        Self {
            order,
            position,
            opacity: options.opacity.clamp(0.0, 1.0),
            margin: options.margin,
            content,
        }
    }
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self::from_options(&WatermarkOptions::default())
    }
}
