//! Trade markers and watermark overlays for GPUI charts

pub mod anchor;
pub mod canvas;
pub mod chart;
pub mod dashboards;
pub mod data_types;
pub mod images;
pub mod plot_types;
pub mod radius_cache;
pub mod rendering;
pub mod scales;
pub mod transform;
pub mod utils;

pub use anchor::AnchorPosition;
pub use canvas::{Canvas, RecordingCanvas};
pub use chart::{HoverItem, Series, TradeChart};
pub use data_types::{TradeSeries, TradeSide, WatermarkConfig};
pub use plot_types::{ChartOverlay, LinePlot, PlotRenderer, TradePointPlot, WatermarkPlot};
pub use radius_cache::SeriesCursor;
