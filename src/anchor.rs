//! Watermark anchor positioning.
//!
//! Every compass position is described by one rule per axis. The plot edges
//! come from the chart transform applied to the axis extremes, so the anchor
//! follows the plot wherever the layout places it.

use crate::data_types::Margin;
use crate::transform::PlotTransform;
use crate::utils::PixelsExt;
use eyre::{eyre, Result};
use gpui::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placement along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// Left or top edge, margin applied inward.
    Start,
    /// Centered, no margin.
    Middle,
    /// Right or bottom edge, margin applied inward.
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorPosition {
    #[serde(rename = "nw")]
    NorthWest,
    #[serde(rename = "n")]
    North,
    #[serde(rename = "ne")]
    NorthEast,
    #[serde(rename = "e")]
    East,
    #[serde(rename = "se")]
    SouthEast,
    #[serde(rename = "s")]
    South,
    #[serde(rename = "sw")]
    SouthWest,
    #[serde(rename = "w")]
    West,
    #[serde(rename = "c")]
    Center,
}

impl AnchorPosition {
    pub const ALL: [AnchorPosition; 9] = [
        Self::NorthWest,
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::Center,
    ];

    pub fn horizontal(self) -> Edge {
        match self {
            Self::NorthWest | Self::West | Self::SouthWest => Edge::Start,
            Self::North | Self::Center | Self::South => Edge::Middle,
            Self::NorthEast | Self::East | Self::SouthEast => Edge::End,
        }
    }

    pub fn vertical(self) -> Edge {
        match self {
            Self::NorthWest | Self::North | Self::NorthEast => Edge::Start,
            Self::West | Self::Center | Self::East => Edge::Middle,
            Self::SouthWest | Self::South | Self::SouthEast => Edge::End,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::NorthWest => "nw",
            Self::North => "n",
            Self::NorthEast => "ne",
            Self::East => "e",
            Self::SouthEast => "se",
            Self::South => "s",
            Self::SouthWest => "sw",
            Self::West => "w",
            Self::Center => "c",
        }
    }
}

impl FromStr for AnchorPosition {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.code() == s)
            .ok_or_else(|| eyre!("unknown watermark position {:?}", s))
    }
}

impl fmt::Display for AnchorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlignment {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
}

/// Where a text watermark is drawn and which side of the point it sits on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextAnchor {
    pub point: Point<Pixels>,
    pub align: TextAlignment,
    pub baseline: TextBaseline,
}

/// Pixel edges of the plot area, taken from the axis extremes.
#[derive(Clone, Copy, Debug)]
struct PlotEdges {
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    width: f32,
    height: f32,
}

impl PlotEdges {
    fn of(transform: &PlotTransform) -> Self {
        let domain = transform.axis_domain();
        let top_left = transform.point_offset(domain.x_min, domain.y_max);
        let bottom_right = transform.point_offset(domain.x_max, domain.y_min);
        Self {
            left: top_left.x.as_f32(),
            top: top_left.y.as_f32(),
            right: bottom_right.x.as_f32(),
            bottom: bottom_right.y.as_f32(),
            width: transform.plot_width(),
            height: transform.plot_height(),
        }
    }
}

/// Anchor for a text watermark. The margin moves the anchor inward from the
/// edges it touches; centered axes ignore it.
pub fn text_anchor(
    transform: &PlotTransform,
    position: AnchorPosition,
    margin: Margin,
) -> TextAnchor {
    let edges = PlotEdges::of(transform);
    let (mx, my) = margin.xy();

    let (x, align) = match position.horizontal() {
        Edge::Start => (edges.left + mx, TextAlignment::Left),
        Edge::Middle => (edges.left + edges.width / 2.0, TextAlignment::Center),
        Edge::End => (edges.right - mx, TextAlignment::Right),
    };
    let (y, baseline) = match position.vertical() {
        Edge::Start => (edges.top + my, TextBaseline::Top),
        Edge::Middle => (edges.top + edges.height / 2.0, TextBaseline::Middle),
        Edge::End => (edges.bottom - my, TextBaseline::Bottom),
    };

    TextAnchor {
        point: Point::new(px(x), px(y)),
        align,
        baseline,
    }
}

/// Drawing rectangle for an image watermark. The origin is always the
/// image's top-left corner, whatever the position.
pub fn image_anchor(
    transform: &PlotTransform,
    position: AnchorPosition,
    margin: Margin,
    natural_size: Size<f32>,
    scaling: f32,
) -> Bounds<Pixels> {
    let edges = PlotEdges::of(transform);
    let (mx, my) = margin.xy();
    let w = natural_size.width * scaling;
    let h = natural_size.height * scaling;

    let x = match position.horizontal() {
        Edge::Start => edges.left + mx,
        Edge::Middle => edges.left + edges.width / 2.0 - w / 2.0,
        Edge::End => edges.right - w - mx,
    };
    let y = match position.vertical() {
        Edge::Start => edges.top + my,
        Edge::Middle => edges.top + edges.height / 2.0 - h / 2.0,
        Edge::End => edges.bottom - h - my,
    };

    Bounds::new(Point::new(px(x), px(y)), Size::new(px(w), px(h)))
}
