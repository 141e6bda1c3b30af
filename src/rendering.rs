// Rendering entry points for gpui paint callbacks

use crate::canvas::GpuiCanvas;
use crate::chart::{HoverItem, TradeChart};
use gpui::*;
use std::sync::Arc;

/// Paints a full render pass of `chart` into `bounds`.
pub fn paint_trade_chart(
    window: &mut Window,
    cx: &mut App,
    bounds: Bounds<Pixels>,
    chart: &TradeChart,
) {
    let mut canvas = GpuiCanvas::new(window, cx);
    chart.paint(&mut canvas, bounds);
}

/// Paints the render pass followed by the highlight of the hovered item.
pub fn paint_trade_chart_hovered(
    window: &mut Window,
    cx: &mut App,
    bounds: Bounds<Pixels>,
    chart: &TradeChart,
    mouse: Point<Pixels>,
) -> Option<HoverItem> {
    let mut canvas = GpuiCanvas::new(window, cx);
    chart.paint(&mut canvas, bounds);
    chart.hover(&mut canvas, bounds, mouse)
}

/// A gpui element filling its parent with the chart.
pub fn trade_chart_element(chart: Arc<TradeChart>) -> impl IntoElement {
    canvas(
        |_bounds, _window, _cx| {},
        move |bounds, _, window, cx| paint_trade_chart(window, cx, bounds, &chart),
    )
    .size_full()
}
