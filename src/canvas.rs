//! Drawing surface used by the plot renderers and overlays.

pub mod gpui_canvas;

use crate::anchor::{TextAlignment, TextBaseline};
use crate::data_types::FontSpec;
use crate::images::{ImageHandle, ImageLoader};
use gpui::{Bounds, Hsla, Pixels, Point};
use std::sync::Arc;

pub use gpui_canvas::GpuiCanvas;

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font: FontSpec,
    pub color: Hsla,
    pub align: TextAlignment,
    pub baseline: TextBaseline,
}

/// A 2D canvas with a save/restore state stack. The only state is the
/// global alpha, which multiplies every subsequent draw.
pub trait Canvas {
    fn save(&mut self);
    fn restore(&mut self);
    fn set_global_alpha(&mut self, alpha: f32);
    fn global_alpha(&self) -> f32;

    fn fill_polygon(&mut self, points: &[Point<Pixels>], color: Hsla);
    fn stroke_polyline(&mut self, points: &[Point<Pixels>], width: f32, color: Hsla);
    fn fill_text(&mut self, text: &str, at: Point<Pixels>, style: &TextStyle);
    fn draw_image(&mut self, image: &Arc<dyn ImageHandle>, bounds: Bounds<Pixels>);

    /// Loader used for image sources when the overlay has none of its own.
    fn image_loader(&self) -> Option<Arc<dyn ImageLoader>> {
        None
    }

    /// Asks for another frame, e.g. while an image is still loading.
    fn request_redraw(&mut self) {}
}

/// Alpha stack shared by canvas implementations.
#[derive(Clone, Debug)]
pub(crate) struct AlphaStack {
    current: f32,
    saved: Vec<f32>,
}

impl Default for AlphaStack {
    fn default() -> Self {
        Self {
            current: 1.0,
            saved: Vec::new(),
        }
    }
}

impl AlphaStack {
    pub(crate) fn save(&mut self) {
        self.saved.push(self.current);
    }

    pub(crate) fn restore(&mut self) {
        if let Some(alpha) = self.saved.pop() {
            self.current = alpha;
        }
    }

    pub(crate) fn set(&mut self, alpha: f32) {
        self.current = alpha.clamp(0.0, 1.0);
    }

    pub(crate) fn get(&self) -> f32 {
        self.current
    }

    pub(crate) fn depth(&self) -> usize {
        self.saved.len()
    }
}

/// One recorded canvas operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    SetAlpha(f32),
    FillPolygon {
        points: Vec<Point<Pixels>>,
        color: Hsla,
        alpha: f32,
    },
    StrokePolyline {
        points: Vec<Point<Pixels>>,
        width: f32,
        color: Hsla,
        alpha: f32,
    },
    FillText {
        text: String,
        at: Point<Pixels>,
        style: TextStyle,
        alpha: f32,
    },
    DrawImage {
        bounds: Bounds<Pixels>,
        alpha: f32,
    },
}

/// Canvas that records draw calls instead of painting them.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
    pub redraw_requests: usize,
    alpha: AlphaStack,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save calls not yet matched by a restore.
    pub fn open_saves(&self) -> usize {
        self.alpha.depth()
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Point<Pixels>, &TextStyle, f32)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillText {
                text,
                at,
                style,
                alpha,
            } => Some((text.as_str(), *at, style, *alpha)),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = (Bounds<Pixels>, f32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::DrawImage { bounds, alpha } => Some((*bounds, *alpha)),
            _ => None,
        })
    }

    pub fn polygons(&self) -> impl Iterator<Item = (&[Point<Pixels>], f32)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillPolygon { points, alpha, .. } => Some((points.as_slice(), *alpha)),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.redraw_requests = 0;
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) {
        self.alpha.save();
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.alpha.restore();
        self.commands.push(DrawCommand::Restore);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.alpha.set(alpha);
        self.commands.push(DrawCommand::SetAlpha(self.alpha.get()));
    }

    fn global_alpha(&self) -> f32 {
        self.alpha.get()
    }

    fn fill_polygon(&mut self, points: &[Point<Pixels>], color: Hsla) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
            alpha: self.alpha.get(),
        });
    }

    fn stroke_polyline(&mut self, points: &[Point<Pixels>], width: f32, color: Hsla) {
        self.commands.push(DrawCommand::StrokePolyline {
            points: points.to_vec(),
            width,
            color,
            alpha: self.alpha.get(),
        });
    }

    fn fill_text(&mut self, text: &str, at: Point<Pixels>, style: &TextStyle) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            at,
            style: style.clone(),
            alpha: self.alpha.get(),
        });
    }

    fn draw_image(&mut self, _image: &Arc<dyn ImageHandle>, bounds: Bounds<Pixels>) {
        self.commands.push(DrawCommand::DrawImage {
            bounds,
            alpha: self.alpha.get(),
        });
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }
}
