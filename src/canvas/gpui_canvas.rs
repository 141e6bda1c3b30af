// Canvas backed by a gpui window during paint

use super::{AlphaStack, Canvas, TextStyle};
use crate::anchor::{TextAlignment, TextBaseline};
use crate::images::{GpuiImageLoader, ImageHandle, ImageLoader};
use gpui::*;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct GpuiCanvas<'a> {
    window: &'a mut Window,
    cx: &'a mut App,
    alpha: AlphaStack,
}

impl<'a> GpuiCanvas<'a> {
    pub fn new(window: &'a mut Window, cx: &'a mut App) -> Self {
        Self {
            window,
            cx,
            alpha: AlphaStack::default(),
        }
    }

    fn path(&mut self, mut builder: PathBuilder, points: &[Point<Pixels>], color: Hsla) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        builder.move_to(*first);
        for p in rest {
            builder.line_to(*p);
        }
        if let Ok(path) = builder.build() {
            self.window.paint_path(path, color.opacity(self.alpha.get()));
        }
    }
}

impl Canvas for GpuiCanvas<'_> {
    fn save(&mut self) {
        self.alpha.save();
    }

    fn restore(&mut self) {
        self.alpha.restore();
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.alpha.set(alpha);
    }

    fn global_alpha(&self) -> f32 {
        self.alpha.get()
    }

    fn fill_polygon(&mut self, points: &[Point<Pixels>], color: Hsla) {
        if points.len() < 3 {
            return;
        }
        self.path(PathBuilder::fill(), points, color);
    }

    fn stroke_polyline(&mut self, points: &[Point<Pixels>], width: f32, color: Hsla) {
        if points.len() < 2 {
            return;
        }
        self.path(PathBuilder::stroke(px(width)), points, color);
    }

    fn fill_text(&mut self, text: &str, at: Point<Pixels>, style: &TextStyle) {
        let font_size = px(style.font.size);
        let mut font = gpui::font(style.font.family.clone());
        if style.font.bold {
            font.weight = FontWeight::BOLD;
        }
        let run = TextRun {
            len: text.len(),
            font,
            color: style.color.opacity(self.alpha.get()),
            background_color: None,
            underline: None,
            strikethrough: None,
        };
        let Ok(lines) = self.window.text_system().shape_text(
            text.to_string().into(),
            font_size,
            &[run],
            None,
            None,
        ) else {
            debug!(text, "failed to shape watermark text");
            return;
        };

        for line in lines {
            let size = line.size(font_size);
            let x_shift = match style.align {
                TextAlignment::Left => px(0.0),
                TextAlignment::Center => size.width / 2.0,
                TextAlignment::Right => size.width,
            };
            let y_shift = match style.baseline {
                TextBaseline::Top => px(0.0),
                TextBaseline::Middle => size.height / 2.0,
                TextBaseline::Bottom => size.height,
            };
            let origin = point(at.x - x_shift, at.y - y_shift);
            let _ = line.paint(origin, font_size, TextAlign::Left, None, self.window, self.cx);
        }
    }

    fn draw_image(&mut self, image: &Arc<dyn ImageHandle>, bounds: Bounds<Pixels>) {
        let Some(render_image) = image.clone().render_image() else {
            debug!("image handle has no gpui image, skipping");
            return;
        };
        let alpha = self.alpha.get();
        self.window.with_element_opacity(Some(alpha), |window| {
            let corners = Corners::default();
            if let Err(err) = window.paint_image(bounds, corners, render_image, 0, false) {
                warn!("failed to paint watermark image: {:#}", err);
            }
        });
    }

    fn image_loader(&self) -> Option<Arc<dyn ImageLoader>> {
        Some(Arc::new(GpuiImageLoader::new(self.cx)))
    }

    fn request_redraw(&mut self) {
        self.window.request_animation_frame();
    }
}
