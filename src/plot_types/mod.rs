// Plot types module

pub mod line;
pub mod trade_points;
pub mod watermark;

pub use line::LinePlot;
pub use trade_points::TradePointPlot;
pub use watermark::WatermarkPlot;

use crate::canvas::Canvas;
use crate::data_types::RenderOrder;
use crate::transform::PlotTransform;
use gpui::{Pixels, Point};

/// Trait for rendering plot types
pub trait PlotRenderer: Send + Sync {
    fn render(&self, canvas: &mut dyn Canvas, transform: &PlotTransform, series_id: &str);

    /// Get min/max bounds for auto-fitting (x_min, x_max, y_min, y_max)
    fn get_min_max(&self) -> Option<(f64, f64, f64, f64)>;

    /// Index of the item drawn under `position`, if any.
    fn hit_test(
        &self,
        _transform: &PlotTransform,
        _position: Point<Pixels>,
        _tolerance: f32,
    ) -> Option<usize> {
        None
    }

    /// Redraws a single item as a hover highlight.
    fn render_highlight(
        &self,
        _canvas: &mut dyn Canvas,
        _transform: &PlotTransform,
        _index: usize,
    ) {
    }

    /// Hover text for an item.
    fn describe(&self, _index: usize) -> Vec<String> {
        Vec::new()
    }
}

/// Something painted once per render pass, before or after the series.
pub trait ChartOverlay: Send + Sync {
    fn order(&self) -> RenderOrder;

    fn paint(&self, canvas: &mut dyn Canvas, transform: &PlotTransform);
}
