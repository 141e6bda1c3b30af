use gpui::{px, Bounds, Point, Size, TestAppContext};
use gpui_trade_overlay::anchor::AnchorPosition;
use gpui_trade_overlay::canvas::RecordingCanvas;
use gpui_trade_overlay::data_types::WatermarkConfig;
use gpui_trade_overlay::images::{decode_image_file, GpuiImageLoader, ImageHandle, ImageLoader};
use gpui_trade_overlay::plot_types::{ChartOverlay, WatermarkPlot};
use gpui_trade_overlay::transform::PlotTransform;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn transform() -> PlotTransform {
    let bounds = Bounds::new(Point::new(px(0.0), px(0.0)), Size::new(px(400.0), px(200.0)));
    PlotTransform::for_domains((0.0, 10.0), (0.0, 10.0), bounds)
}

#[gpui::test]
fn test_decode_png_fixture(cx: &mut TestAppContext) {
    let svg_renderer = cx.update(|cx| cx.svg_renderer());
    let image = decode_image_file(&fixture("red_3x2.png"), svg_renderer.clone()).unwrap();
    assert_eq!(image.natural_size(), Size::new(3.0, 2.0));

    assert!(decode_image_file(&fixture("notes.txt"), svg_renderer.clone()).is_err());
    assert!(decode_image_file(&fixture("absent.png"), svg_renderer).is_err());
}

#[gpui::test]
fn test_loader_completes_on_background_executor(cx: &mut TestAppContext) {
    let loader = cx.update(|cx| GpuiImageLoader::new(cx));
    let results = Arc::new(Mutex::new(Vec::new()));

    for source in [
        format!("file://{}", fixture("red_3x2.png").display()),
        fixture("absent.png").display().to_string(),
    ] {
        let results = results.clone();
        loader.load(
            &source,
            Box::new(move |result| {
                let size = result.map(|image| image.natural_size()).ok();
                results.lock().push(size);
            }),
        );
    }
    assert!(results.lock().is_empty());

    cx.run_until_parked();
    let mut sizes = results.lock().clone();
    sizes.sort_by_key(|s| s.is_some());
    assert_eq!(sizes, vec![None, Some(Size::new(3.0, 2.0))]);
}

#[gpui::test]
fn test_watermark_image_drawn_once_loaded(cx: &mut TestAppContext) {
    let loader = Arc::new(cx.update(|cx| GpuiImageLoader::new(cx)));
    let source = fixture("red_3x2.png").display().to_string();
    let config = WatermarkConfig::image(source.as_str(), 10.0).at(AnchorPosition::NorthWest);
    let plot = WatermarkPlot::new(config).with_loader(loader);
    let t = transform();

    let mut canvas = RecordingCanvas::new();
    plot.paint(&mut canvas, &t);
    assert_eq!(canvas.images().count(), 0);
    assert!(plot.images().is_pending(&source));
    assert_eq!(canvas.redraw_requests, 1);

    cx.run_until_parked();
    plot.paint(&mut canvas, &t);
    let (bounds, _) = canvas.images().next().unwrap();
    assert_eq!(bounds.size, Size::new(px(30.0), px(20.0)));
    assert_eq!(canvas.redraw_requests, 1);
    assert_eq!(canvas.open_saves(), 0);
}
