use gpui::{px, Bounds, Point, Size};
use gpui_trade_overlay::anchor::{AnchorPosition, TextAlignment, TextBaseline};
use gpui_trade_overlay::canvas::{Canvas, DrawCommand, RecordingCanvas};
use gpui_trade_overlay::data_types::{
    Margin, RenderOrder, WatermarkConfig, WatermarkContent, WatermarkOptions,
};
use gpui_trade_overlay::images::{FnImageLoader, ImageHandle, ImageLoader, LoadCallback};
use gpui_trade_overlay::plot_types::{ChartOverlay, WatermarkPlot};
use gpui_trade_overlay::transform::PlotTransform;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn transform() -> PlotTransform {
    let bounds = Bounds::new(Point::new(px(0.0), px(0.0)), Size::new(px(400.0), px(200.0)));
    PlotTransform::for_domains((0.0, 10.0), (0.0, 10.0), bounds)
}

struct FixedImage(Size<f32>);

impl ImageHandle for FixedImage {
    fn natural_size(&self) -> Size<f32> {
        self.0
    }
}

/// Loader that completes only when the test says so.
#[derive(Default)]
struct DeferredLoader {
    pending: Mutex<Vec<(String, LoadCallback)>>,
    calls: AtomicUsize,
}

impl DeferredLoader {
    fn complete_all(&self, size: Size<f32>) {
        for (_, done) in self.pending.lock().drain(..) {
            done(Ok(Arc::new(FixedImage(size)) as Arc<dyn ImageHandle>));
        }
    }

    fn fail_all(&self) {
        for (source, done) in self.pending.lock().drain(..) {
            done(Err(eyre::eyre!("404 for {}", source)));
        }
    }
}

impl ImageLoader for DeferredLoader {
    fn load(&self, source: &str, on_done: LoadCallback) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pending.lock().push((source.to_string(), on_done));
    }
}

#[test]
fn test_text_watermark_restores_state() {
    let config = WatermarkConfig::text("BTC-USD TRADES")
        .at(AnchorPosition::NorthEast)
        .with_opacity(0.1)
        .with_margin(Margin::Uniform(10.0));
    let plot = WatermarkPlot::new(config);
    let mut canvas = RecordingCanvas::new();

    plot.paint(&mut canvas, &transform());

    assert_eq!(canvas.commands.len(), 4);
    assert_eq!(canvas.commands[0], DrawCommand::Save);
    assert_eq!(canvas.commands[1], DrawCommand::SetAlpha(0.1));
    assert_eq!(canvas.commands[3], DrawCommand::Restore);
    assert_eq!(canvas.open_saves(), 0);
    assert_eq!(canvas.global_alpha(), 1.0);

    let (text, at, style, alpha) = canvas.texts().next().unwrap();
    assert_eq!(text, "BTC-USD TRADES");
    assert!((f32::from(at.x) - 390.0).abs() < 1e-3);
    assert!((f32::from(at.y) - 10.0).abs() < 1e-3);
    assert_eq!(style.align, TextAlignment::Right);
    assert_eq!(style.baseline, TextBaseline::Top);
    assert_eq!(alpha, 0.1);
}

#[test]
fn test_unknown_position_is_inert() {
    let options = WatermarkOptions {
        position: "middle".to_string(),
        ..WatermarkOptions::default()
    };
    let config = WatermarkConfig::from_options(&options);
    assert_eq!(config.position, None);

    let mut canvas = RecordingCanvas::new();
    WatermarkPlot::new(config).paint(&mut canvas, &transform());
    assert!(canvas.commands.is_empty());
}

#[test]
fn test_unknown_mode_is_inert() {
    let config = WatermarkConfig::from_json(r#"{"mode": "video"}"#).unwrap();
    assert_eq!(config.content, None);

    let mut canvas = RecordingCanvas::new();
    WatermarkPlot::new(config).paint(&mut canvas, &transform());
    assert!(canvas.commands.is_empty());
}

#[test]
fn test_options_fallbacks() {
    let config = WatermarkConfig::from_json(
        r#"{"order": "sideways", "color": "not-a-color", "font": "huge", "opacity": 3.0}"#,
    )
    .unwrap();
    assert_eq!(config.order, RenderOrder::Foreground);
    assert_eq!(config.opacity, 1.0);
    match config.content {
        Some(WatermarkContent::Text { text, color, font }) => {
            assert_eq!(text, "COPYRIGHT");
            assert_eq!(color, gpui::black());
            assert_eq!(font.size, 30.0);
            assert_eq!(font.family, "Arial");
        }
        other => panic!("unexpected content {:?}", other),
    }
}

#[test]
fn test_dashboard_options_parse() {
    let config = WatermarkConfig::from_json(
        r#"{"opacity": 0.1, "mode": "text", "position": "sw", "text": "POSITION/P&L",
            "font": "60px Arial", "margin": [50, 0], "order": "background"}"#,
    )
    .unwrap();
    assert_eq!(config.order, RenderOrder::Background);
    assert_eq!(config.position, Some(AnchorPosition::SouthWest));
    assert_eq!(config.margin.xy(), (50.0, 0.0));
    match config.content {
        Some(WatermarkContent::Text { font, .. }) => assert_eq!(font.size, 60.0),
        other => panic!("unexpected content {:?}", other),
    }

    assert!(WatermarkConfig::from_json("{not json").is_err());
}

#[test]
fn test_image_skipped_until_loaded() {
    let loader = Arc::new(DeferredLoader::default());
    let config = WatermarkConfig::image("logo.png", 0.5).at(AnchorPosition::Center);
    let plot = WatermarkPlot::new(config).with_loader(loader.clone());
    let t = transform();

    let mut canvas = RecordingCanvas::new();
    plot.paint(&mut canvas, &t);
    plot.paint(&mut canvas, &t);
    assert!(canvas.commands.is_empty());
    assert!(plot.images().is_pending("logo.png"));
    assert_eq!(loader.calls.load(Ordering::SeqCst), 1);
    assert_eq!(canvas.redraw_requests, 2);

    loader.complete_all(Size::new(100.0, 40.0));
    plot.paint(&mut canvas, &t);
    plot.paint(&mut canvas, &t);
    assert_eq!(loader.calls.load(Ordering::SeqCst), 1);

    let images: Vec<_> = canvas.images().collect();
    assert_eq!(images.len(), 2);
    let (bounds, alpha) = images[0];
    assert_eq!(bounds.origin, Point::new(px(175.0), px(90.0)));
    assert_eq!(bounds.size, Size::new(px(50.0), px(20.0)));
    assert_eq!(alpha, 0.3);
    assert_eq!(canvas.open_saves(), 0);
}

#[test]
fn test_failed_image_is_not_retried() {
    let loader = Arc::new(DeferredLoader::default());
    let plot =
        WatermarkPlot::new(WatermarkConfig::image("missing.png", 1.0)).with_loader(loader.clone());
    let t = transform();
    let mut canvas = RecordingCanvas::new();

    plot.paint(&mut canvas, &t);
    loader.fail_all();
    plot.paint(&mut canvas, &t);
    plot.paint(&mut canvas, &t);

    assert!(canvas.commands.is_empty());
    assert_eq!(loader.calls.load(Ordering::SeqCst), 1);
    // Only the pending pass asks for another frame.
    assert_eq!(canvas.redraw_requests, 1);
}

#[test]
fn test_images_cached_per_source() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let loader = Arc::new(FnImageLoader(move |_src: &str| -> eyre::Result<Arc<dyn ImageHandle>> {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(FixedImage(Size::new(10.0, 10.0))) as Arc<dyn ImageHandle>)
    }));

    let first =
        WatermarkPlot::new(WatermarkConfig::image("a.png", 1.0)).with_loader(loader.clone());
    let t = transform();
    let mut canvas = RecordingCanvas::new();

    // A loader that completes immediately draws on the first pass.
    first.paint(&mut canvas, &t);
    first.paint(&mut canvas, &t);
    assert_eq!(canvas.images().count(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let second = WatermarkPlot::new(WatermarkConfig::image("b.png", 1.0)).with_loader(loader);
    second.paint(&mut canvas, &t);
    first.paint(&mut canvas, &t);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(first.images().len(), 1);
}
