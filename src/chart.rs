//! Chart Model
//!
//! A `TradeChart` owns its series and overlays and drives one render pass:
//! background overlays first, then every series in order, then foreground
//! overlays. Each series owns its own render state (for trade markers, the
//! radius cursor), so nothing is shared between series.

use crate::canvas::Canvas;
use crate::data_types::{AxisId, AxisRange, RenderOrder};
use crate::plot_types::{ChartOverlay, PlotRenderer};
use crate::transform::PlotTransform;
use gpui::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct Series {
    pub id: String,
    pub label: String,
    pub plot: Arc<dyn PlotRenderer>,
    pub y_axis_id: AxisId,
}

impl Series {
    pub fn new(id: impl Into<String>, plot: impl PlotRenderer + 'static) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            plot: Arc::new(plot),
            y_axis_id: AxisId(0),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn on_axis(mut self, y_axis_id: usize) -> Self {
        self.y_axis_id = AxisId(y_axis_id);
        self
    }
}

/// The item under the pointer after a hover.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverItem {
    pub series_id: String,
    pub index: usize,
    pub lines: Vec<String>,
}

pub struct TradeChart {
    pub id: String,
    pub x_range: AxisRange,
    /// Fixed y ranges by axis. Axes without one fit their series.
    pub y_ranges: Vec<Option<AxisRange>>,
    pub series: Vec<Series>,
    pub overlays: Vec<Arc<dyn ChartOverlay>>,
    /// Extra pixels around a marker that still count as hovering it.
    pub hover_tolerance: f32,
}

impl TradeChart {
    pub fn new(id: impl Into<String>, x_range: AxisRange) -> Self {
        Self {
            id: id.into(),
            x_range,
            y_ranges: Vec::new(),
            series: Vec::new(),
            overlays: Vec::new(),
            hover_tolerance: 2.0,
        }
    }

    pub fn with_y_range(mut self, axis: usize, range: AxisRange) -> Self {
        if self.y_ranges.len() <= axis {
            self.y_ranges.resize(axis + 1, None);
        }
        self.y_ranges[axis] = Some(range);
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn add_overlay(&mut self, overlay: impl ChartOverlay + 'static) {
        self.overlays.push(Arc::new(overlay));
    }

    /// Y range of an axis: the configured one, else the extent of its series.
    pub fn y_range(&self, axis: AxisId) -> AxisRange {
        if let Some(Some(range)) = self.y_ranges.get(axis.0) {
            return *range;
        }
        let extents = self
            .series
            .iter()
            .filter(|s| s.y_axis_id == axis)
            .filter_map(|s| s.plot.get_min_max())
            .flat_map(|(_, _, y_min, y_max)| [y_min, y_max]);
        AxisRange::covering(extents).unwrap_or(AxisRange::new(0.0, 1.0))
    }

    pub fn transform(&self, axis: AxisId, bounds: Bounds<Pixels>) -> PlotTransform {
        PlotTransform::for_domains(self.x_range.bounds(), self.y_range(axis).bounds(), bounds)
    }

    /// Runs one full render pass.
    pub fn paint(&self, canvas: &mut dyn Canvas, bounds: Bounds<Pixels>) {
        let primary = self.transform(AxisId(0), bounds);

        self.paint_overlays(canvas, &primary, RenderOrder::Background);
        for series in &self.series {
            let transform = self.transform(series.y_axis_id, bounds);
            series.plot.render(canvas, &transform, &series.id);
        }
        self.paint_overlays(canvas, &primary, RenderOrder::Foreground);
    }

    fn paint_overlays(
        &self,
        canvas: &mut dyn Canvas,
        transform: &PlotTransform,
        order: RenderOrder,
    ) {
        for overlay in self.overlays.iter().filter(|o| o.order() == order) {
            overlay.paint(canvas, transform);
        }
    }

    /// Finds the topmost item under `position`, draws its highlight and
    /// returns what was hit.
    pub fn hover(
        &self,
        canvas: &mut dyn Canvas,
        bounds: Bounds<Pixels>,
        position: Point<Pixels>,
    ) -> Option<HoverItem> {
        if !bounds.contains(&position) {
            return None;
        }
        self.series.iter().rev().find_map(|series| {
            let transform = self.transform(series.y_axis_id, bounds);
            let index = series.plot.hit_test(&transform, position, self.hover_tolerance)?;
            series.plot.render_highlight(canvas, &transform, index);
            Some(HoverItem {
                series_id: series.id.clone(),
                index,
                lines: series.plot.describe(index),
            })
        })
    }
}
