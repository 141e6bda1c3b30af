//! Watermark image loading.
//!
//! Images load asynchronously through an [`ImageLoader`]. The cache keeps one
//! slot per source so each source is requested exactly once, and a frame
//! drawn before the load completes simply has no image yet.

use eyre::{eyre, Result, WrapErr};
use gpui::{App, BackgroundExecutor, Image, ImageFormat, RenderImage, Size, SvgRenderer};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// A decoded image that can be drawn on a canvas.
pub trait ImageHandle: Send + Sync {
    /// Size in pixels before scaling.
    fn natural_size(&self) -> Size<f32>;

    /// The gpui image behind this handle, if there is one.
    fn render_image(self: Arc<Self>) -> Option<Arc<RenderImage>> {
        None
    }
}

impl ImageHandle for RenderImage {
    fn natural_size(&self) -> Size<f32> {
        let size = self.size(0);
        Size::new(size.width.0 as f32, size.height.0 as f32)
    }

    fn render_image(self: Arc<Self>) -> Option<Arc<RenderImage>> {
        Some(self)
    }
}

pub type LoadCallback = Box<dyn FnOnce(Result<Arc<dyn ImageHandle>>) + Send>;

/// Starts loading an image source. `on_done` must be called at most once,
/// from any thread, when loading finishes or fails.
pub trait ImageLoader: Send + Sync {
    fn load(&self, source: &str, on_done: LoadCallback);
}

/// Loader running a synchronous closure and completing immediately.
pub struct FnImageLoader<F>(pub F);

impl<F> ImageLoader for FnImageLoader<F>
where
    F: Fn(&str) -> Result<Arc<dyn ImageHandle>> + Send + Sync,
{
    fn load(&self, source: &str, on_done: LoadCallback) {
        on_done((self.0)(source));
    }
}

/// Loads image files from disk and decodes them on gpui's background
/// executor. Sources are file paths, optionally prefixed with `file://`.
#[derive(Clone)]
pub struct GpuiImageLoader {
    executor: BackgroundExecutor,
    svg_renderer: SvgRenderer,
}

impl GpuiImageLoader {
    pub fn new(cx: &App) -> Self {
        Self {
            executor: cx.background_executor().clone(),
            svg_renderer: cx.svg_renderer(),
        }
    }
}

impl ImageLoader for GpuiImageLoader {
    fn load(&self, source: &str, on_done: LoadCallback) {
        let path = PathBuf::from(source.strip_prefix("file://").unwrap_or(source));
        let svg_renderer = self.svg_renderer.clone();
        self.executor
            .spawn(async move {
                let result = decode_image_file(&path, svg_renderer)
                    .map(|image| image as Arc<dyn ImageHandle>);
                on_done(result);
            })
            .detach();
    }
}

fn image_format(path: &Path) -> Option<ImageFormat> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some(ImageFormat::Png),
        "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
        "webp" => Some(ImageFormat::Webp),
        "gif" => Some(ImageFormat::Gif),
        "svg" => Some(ImageFormat::Svg),
        "bmp" => Some(ImageFormat::Bmp),
        "tif" | "tiff" => Some(ImageFormat::Tiff),
        _ => None,
    }
}

/// Reads and decodes one image file into a gpui image.
pub fn decode_image_file(path: &Path, svg_renderer: SvgRenderer) -> Result<Arc<RenderImage>> {
    let format = image_format(path)
        .ok_or_else(|| eyre!("unsupported image format: {}", path.display()))?;
    let bytes =
        std::fs::read(path).wrap_err_with(|| format!("failed to read {}", path.display()))?;
    Image::from_bytes(format, bytes)
        .to_image_data(svg_renderer)
        .map_err(|err| eyre!("failed to decode {}: {:#}", path.display(), err))
}

#[derive(Clone)]
enum ImageSlot {
    Pending,
    Ready(Arc<dyn ImageHandle>),
    Failed,
}

/// Loaded images by source.
#[derive(Clone, Default)]
pub struct ImageCache {
    slots: Arc<Mutex<HashMap<String, ImageSlot>>>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the image if it is loaded. Otherwise requests it once and
    /// returns `None` until the loader reports back. Failed sources are not
    /// retried.
    pub fn get_or_request(
        &self,
        source: &str,
        loader: &dyn ImageLoader,
    ) -> Option<Arc<dyn ImageHandle>> {
        {
            let mut slots = self.slots.lock();
            match slots.get(source) {
                Some(ImageSlot::Ready(image)) => return Some(image.clone()),
                Some(ImageSlot::Pending) | Some(ImageSlot::Failed) => return None,
                None => {
                    slots.insert(source.to_string(), ImageSlot::Pending);
                }
            }
        }

        debug!(source, "requesting watermark image");
        let slots = self.slots.clone();
        let key = source.to_string();
        // The lock is released above: loaders may complete synchronously.
        loader.load(
            source,
            Box::new(move |result| {
                let slot = match result {
                    Ok(image) => ImageSlot::Ready(image),
                    Err(err) => {
                        warn!(source = %key, "failed to load watermark image: {:#}", err);
                        ImageSlot::Failed
                    }
                };
                slots.lock().insert(key, slot);
            }),
        );

        match self.slots.lock().get(source) {
            Some(ImageSlot::Ready(image)) => Some(image.clone()),
            _ => None,
        }
    }

    pub fn is_pending(&self, source: &str) -> bool {
        matches!(self.slots.lock().get(source), Some(ImageSlot::Pending))
    }

    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }
}
