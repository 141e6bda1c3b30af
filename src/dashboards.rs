//! Chart presets for the trading dashboard: the trade scatter (bids and asks
//! sized by volume) and the revenue/position chart.

use crate::anchor::AnchorPosition;
use crate::chart::{Series, TradeChart};
use crate::data_types::{
    parse_color, AxisRange, FontSpec, LinePlotConfig, Margin, StepMode, TradeBook,
    TradePointConfig, TradeSide, WatermarkConfig,
};
use crate::plot_types::{LinePlot, TradePointPlot, WatermarkPlot};
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeDashboardOptions {
    /// Trade tag whose bids and asks are plotted.
    pub tag: String,
    pub base_point_radius: f32,
    pub point_alpha: f32,
}

impl Default for TradeDashboardOptions {
    fn default() -> Self {
        Self {
            tag: "core".to_string(),
            base_point_radius: 3.0,
            point_alpha: 0.7,
        }
    }
}

impl TradeDashboardOptions {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).wrap_err("failed to parse dashboard options")
    }
}

fn dashboard_watermark(text: &str) -> Result<WatermarkConfig> {
    Ok(WatermarkConfig::text(text)
        .at(AnchorPosition::SouthWest)
        .with_opacity(0.1)
        .with_margin(Margin::Pair([50.0, 0.0]))
        .with_font("60px Arial".parse::<FontSpec>()?))
}

/// Bids and asks of one trade tag over `[start, end]`.
pub fn trades_chart(
    book: &TradeBook,
    start: f64,
    end: f64,
    options: &TradeDashboardOptions,
) -> Result<TradeChart> {
    let mut chart = TradeChart::new("trades", AxisRange::new(start, end));

    let sides = [
        (TradeSide::Bids, "Bids", "#6CB885"),
        (TradeSide::Asks, "Asks", "blue"),
    ];
    for (side, label, color) in sides {
        let series = book.series(&options.tag, side)?;
        let config = TradePointConfig {
            color: parse_color(color)?,
            alpha: options.point_alpha,
            base_radius: options.base_point_radius,
            ..TradePointConfig::default()
        };
        let id = series.key.to_string();
        let plot = TradePointPlot::new(series).with_config(config);
        chart.add_series(Series::new(id, plot).with_label(label));
    }

    chart.add_overlay(WatermarkPlot::new(dashboard_watermark("BTC-USD TRADES")?));
    Ok(chart)
}

/// Revenue on the primary axis and position as steps on a secondary axis
/// with a fixed range.
pub fn revenue_position_chart(
    revenue: Vec<(f64, f64)>,
    position: Vec<(f64, f64)>,
    start: f64,
    end: f64,
    position_range: AxisRange,
) -> Result<TradeChart> {
    let mut chart =
        TradeChart::new("revenue", AxisRange::new(start, end)).with_y_range(1, position_range);

    let revenue_config = LinePlotConfig {
        color: parse_color("green")?,
        line_width: 5.0,
        step: None,
    };
    let revenue_plot = LinePlot::new(revenue).with_config(revenue_config);
    chart.add_series(Series::new("revenue", revenue_plot).with_label("Revenue"));

    let position_config = LinePlotConfig {
        color: parse_color("#ED9121")?,
        line_width: 2.0,
        step: Some(StepMode::Post),
    };
    chart.add_series(
        Series::new("position", LinePlot::new(position).with_config(position_config))
            .with_label("Position")
            .on_axis(1),
    );

    chart.add_overlay(WatermarkPlot::new(dashboard_watermark("POSITION/P&L")?));
    Ok(chart)
}
