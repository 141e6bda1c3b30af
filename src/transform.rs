//! Transform helper for coordinate projection

use crate::data_types::AxisDomain;
use crate::scales::ChartScale;
use crate::utils::PixelsExt;
use gpui::*;

#[derive(Clone)]
pub struct PlotTransform {
    pub x_scale: ChartScale,
    pub y_scale: ChartScale,
    pub bounds: Bounds<Pixels>,
}

impl PlotTransform {
    pub fn new(x_scale: ChartScale, y_scale: ChartScale, bounds: Bounds<Pixels>) -> Self {
        Self {
            x_scale,
            y_scale,
            bounds,
        }
    }

    /// Builds the usual chart transform: x grows to the right across the
    /// plot width, y grows upwards from the bottom edge.
    pub fn for_domains(x_domain: (f64, f64), y_domain: (f64, f64), bounds: Bounds<Pixels>) -> Self {
        let width = bounds.size.width.as_f32();
        let height = bounds.size.height.as_f32();
        Self::new(
            ChartScale::new_linear(x_domain, (0.0, width)),
            ChartScale::new_linear(y_domain, (height, 0.0)),
            bounds,
        )
    }

    /// Pixel position of an axis-space point.
    pub fn point_offset(&self, x: f64, y: f64) -> Point<Pixels> {
        Point::new(
            self.bounds.origin.x + px(self.x_scale.map(x)),
            self.bounds.origin.y + px(self.y_scale.map(y)),
        )
    }

    pub fn data_to_screen(&self, point: Point<f64>) -> Point<Pixels> {
        self.point_offset(point.x, point.y)
    }

    pub fn screen_to_data(&self, point: Point<Pixels>) -> Point<f64> {
        Point::new(
            self.x_scale
                .invert((point.x - self.bounds.origin.x).as_f32()),
            self.y_scale
                .invert((point.y - self.bounds.origin.y).as_f32()),
        )
    }

    pub fn plot_width(&self) -> f32 {
        self.bounds.size.width.as_f32()
    }

    pub fn plot_height(&self) -> f32 {
        self.bounds.size.height.as_f32()
    }

    pub fn axis_domain(&self) -> AxisDomain {
        let (x_min, x_max) = self.x_scale.domain();
        let (y_min, y_max) = self.y_scale.domain();
        AxisDomain {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Changes whenever the plot is resized, panned or zoomed, i.e. whenever
    /// previously drawn pixel coordinates stop being valid.
    pub fn geometry_key(&self) -> GeometryKey {
        let (x_min, x_max) = self.x_scale.domain();
        let (y_min, y_max) = self.y_scale.domain();
        GeometryKey([
            self.bounds.origin.x.as_f64().to_bits(),
            self.bounds.origin.y.as_f64().to_bits(),
            self.bounds.size.width.as_f64().to_bits(),
            self.bounds.size.height.as_f64().to_bits(),
            x_min.to_bits(),
            x_max.to_bits(),
            y_min.to_bits(),
            y_max.to_bits(),
        ])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeometryKey([u64; 8]);
