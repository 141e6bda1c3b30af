use gpui::{px, Bounds, Point, Size};
use gpui_trade_overlay::scales::ChartScale;
use gpui_trade_overlay::transform::PlotTransform;

#[test]
fn test_chart_scale_linear() {
    let scale = ChartScale::new_linear((0.0, 100.0), (0.0, 500.0));

    assert_eq!(scale.map(0.0), 0.0);
    assert_eq!(scale.map(50.0), 250.0);
    assert_eq!(scale.map(100.0), 500.0);
    assert_eq!(scale.invert(250.0), 50.0);
}

#[test]
fn test_degenerate_domain_is_widened() {
    let scale = ChartScale::new_linear((5.0, 5.0), (0.0, 100.0));
    assert_eq!(scale.domain(), (4.5, 5.5));
    assert_eq!(scale.map(5.0), 50.0);
}

#[test]
fn test_point_offset_includes_origin() {
    let bounds = Bounds::new(Point::new(px(10.0), px(20.0)), Size::new(px(200.0), px(100.0)));
    let transform = PlotTransform::for_domains((0.0, 100.0), (0.0, 50.0), bounds);

    let top_left = transform.point_offset(0.0, 50.0);
    assert_eq!(top_left, Point::new(px(10.0), px(20.0)));
    let bottom_right = transform.point_offset(100.0, 0.0);
    assert_eq!(bottom_right, Point::new(px(210.0), px(120.0)));

    let restored = transform.screen_to_data(Point::new(px(110.0), px(70.0)));
    assert!((restored.x - 50.0).abs() < 0.001);
    assert!((restored.y - 25.0).abs() < 0.001);

    let domain = transform.axis_domain();
    assert_eq!(domain.width(), 100.0);
    assert_eq!(domain.height(), 50.0);
}

#[test]
fn test_geometry_key_tracks_resize_and_zoom() {
    let bounds = Bounds::new(Point::new(px(0.0), px(0.0)), Size::new(px(200.0), px(100.0)));
    let base = PlotTransform::for_domains((0.0, 10.0), (0.0, 10.0), bounds);
    let same = PlotTransform::for_domains((0.0, 10.0), (0.0, 10.0), bounds);
    assert_eq!(base.geometry_key(), same.geometry_key());

    let resized = Bounds::new(Point::new(px(0.0), px(0.0)), Size::new(px(300.0), px(100.0)));
    let wider = PlotTransform::for_domains((0.0, 10.0), (0.0, 10.0), resized);
    assert_ne!(base.geometry_key(), wider.geometry_key());

    let zoomed = PlotTransform::for_domains((2.0, 8.0), (0.0, 10.0), bounds);
    assert_ne!(base.geometry_key(), zoomed.geometry_key());
}
