use super::PlotRenderer;
use crate::canvas::Canvas;
use crate::data_types::{LinePlotConfig, StepMode};
use crate::transform::PlotTransform;
use crate::utils::PixelsExt;
use gpui::*;

/// Line plot type, optionally drawn as steps.
pub struct LinePlot {
    pub data: Vec<Point<f64>>,
    pub config: LinePlotConfig,
}

impl LinePlot {
    pub fn new(data: Vec<(f64, f64)>) -> Self {
        Self {
            data: data.into_iter().map(|(x, y)| Point::new(x, y)).collect(),
            config: LinePlotConfig::default(),
        }
    }

    pub fn with_config(mut self, config: LinePlotConfig) -> Self {
        self.config = config;
        self
    }

    /// Screen-space vertices, with the intermediate corners of step mode.
    pub fn screen_path(&self, transform: &PlotTransform) -> Vec<Point<Pixels>> {
        let mut path: Vec<Point<Pixels>> = Vec::with_capacity(self.data.len() * 2);
        let mut last_px_x = f32::MIN;
        let mut last_px_y = f32::MIN;

        for (i, p) in self.data.iter().enumerate() {
            let s_curr = transform.data_to_screen(*p);
            let is_last = i + 1 == self.data.len();

            // Points landing on the same pixel add nothing visible.
            let (px_x, px_y) = (s_curr.x.as_f32(), s_curr.y.as_f32());
            if !path.is_empty()
                && !is_last
                && (px_x - last_px_x).abs() < 0.5
                && (px_y - last_px_y).abs() < 1.0
            {
                continue;
            }

            if let Some(s_prev) = path.last().copied() {
                match self.config.step {
                    Some(StepMode::Post) => path.push(Point::new(s_curr.x, s_prev.y)),
                    Some(StepMode::Pre) => path.push(Point::new(s_prev.x, s_curr.y)),
                    None => {}
                }
            }
            path.push(s_curr);
            last_px_x = px_x;
            last_px_y = px_y;
        }
        path
    }
}

impl PlotRenderer for LinePlot {
    fn render(&self, canvas: &mut dyn Canvas, transform: &PlotTransform, _series_id: &str) {
        let path = self.screen_path(transform);
        canvas.stroke_polyline(&path, self.config.line_width, self.config.color);
    }

    fn get_min_max(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.data.first()?;
        let init = (first.x, first.x, first.y, first.y);
        Some(self.data.iter().fold(init, |(x0, x1, y0, y1), p| {
            (x0.min(p.x), x1.max(p.x), y0.min(p.y), y1.max(p.y))
        }))
    }
}
