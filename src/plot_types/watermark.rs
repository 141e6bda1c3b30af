use super::ChartOverlay;
use crate::anchor::{image_anchor, text_anchor};
use crate::canvas::{Canvas, TextStyle};
use crate::data_types::{RenderOrder, WatermarkConfig, WatermarkContent};
use crate::images::{ImageCache, ImageLoader};
use crate::transform::PlotTransform;
use std::sync::Arc;
use tracing::debug;

/// Semi-transparent text or image drawn once per render pass.
pub struct WatermarkPlot {
    pub config: WatermarkConfig,
    images: ImageCache,
    loader: Option<Arc<dyn ImageLoader>>,
}

impl WatermarkPlot {
    pub fn new(config: WatermarkConfig) -> Self {
        Self {
            config,
            images: ImageCache::new(),
            loader: None,
        }
    }

    /// Overrides the loader the canvas would otherwise supply.
    pub fn with_loader(mut self, loader: Arc<dyn ImageLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    pub fn images(&self) -> &ImageCache {
        &self.images
    }
}

impl ChartOverlay for WatermarkPlot {
    fn order(&self) -> RenderOrder {
        self.config.order
    }

    fn paint(&self, canvas: &mut dyn Canvas, transform: &PlotTransform) {
        let (Some(position), Some(content)) = (self.config.position, &self.config.content) else {
            return;
        };

        match content {
            WatermarkContent::Text { text, color, font } => {
                let anchor = text_anchor(transform, position, self.config.margin);
                let style = TextStyle {
                    font: font.clone(),
                    color: *color,
                    align: anchor.align,
                    baseline: anchor.baseline,
                };
                canvas.save();
                canvas.set_global_alpha(self.config.opacity);
                canvas.fill_text(text, anchor.point, &style);
                canvas.restore();
            }
            WatermarkContent::Image { src, scaling } => {
                let Some(loader) = self.loader.clone().or_else(|| canvas.image_loader()) else {
                    debug!(src = %src, "no image loader available, skipping watermark");
                    return;
                };
                let Some(image) = self.images.get_or_request(src, loader.as_ref()) else {
                    if self.images.is_pending(src) {
                        canvas.request_redraw();
                    }
                    return;
                };
                let bounds = image_anchor(
                    transform,
                    position,
                    self.config.margin,
                    image.natural_size(),
                    *scaling,
                );
                canvas.save();
                canvas.set_global_alpha(self.config.opacity);
                canvas.draw_image(&image, bounds);
                canvas.restore();
            }
        }
    }
}
