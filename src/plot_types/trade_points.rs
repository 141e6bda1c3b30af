use super::PlotRenderer;
use crate::canvas::Canvas;
use crate::data_types::{Trade, TradePointConfig, TradeSeries};
use crate::radius_cache::{half_disc_outline, SeriesCursor};
use crate::transform::{GeometryKey, PlotTransform};
use crate::utils::PixelsExt;
use gpui::*;
use parking_lot::Mutex;
use tracing::debug;

#[derive(Default)]
struct PointState {
    cursor: SeriesCursor,
    geometry: Option<GeometryKey>,
}

/// Trade markers sized by volume: one half-disc per trade, lower half for
/// bids and upper half for asks.
pub struct TradePointPlot {
    pub series: TradeSeries,
    pub config: TradePointConfig,
    state: Mutex<PointState>,
}

impl TradePointPlot {
    pub fn new(series: TradeSeries) -> Self {
        Self {
            series,
            config: TradePointConfig::default(),
            state: Mutex::new(PointState::default()),
        }
    }

    pub fn with_config(mut self, config: TradePointConfig) -> Self {
        self.config = config;
        self
    }

    /// Drops every cached radius, e.g. after the host resized the chart.
    pub fn invalidate(&self) {
        let mut state = self.state.lock();
        state.cursor.invalidate();
        state.geometry = None;
    }

    /// Radius currently cached for a trade, if it has been drawn.
    pub fn cached_radius(&self, transform: &PlotTransform, index: usize) -> Option<f32> {
        let trade = self.series.trades.get(index)?;
        let center = trade_center(transform, trade);
        self.state.lock().cursor.cached(center.x.as_f32(), center.y.as_f32())
    }

    fn draw_marker(&self, canvas: &mut dyn Canvas, center: Point<Pixels>, radius: f32) {
        let side = self.series.key.side;
        let outline = half_disc_outline(center, radius, side, self.config.arc_segments);
        canvas.fill_polygon(&outline, self.config.color);
        let mut closed = outline;
        if let Some(first) = closed.first().copied() {
            closed.push(first);
        }
        canvas.stroke_polyline(&closed, self.config.line_width, self.config.color);
    }
}

fn trade_center(transform: &PlotTransform, trade: &Trade) -> Point<Pixels> {
    transform.point_offset(trade.time, trade.price)
}

impl PlotRenderer for TradePointPlot {
    fn render(&self, canvas: &mut dyn Canvas, transform: &PlotTransform, series_id: &str) {
        let mut state = self.state.lock();
        let geometry = transform.geometry_key();
        if state.geometry.is_some_and(|g| g != geometry) {
            debug!(series_id, key = %self.series.key, "plot geometry changed");
        }
        // Every render is a full pass and consumes the volume list from the start.
        state.cursor.invalidate();
        state.geometry = Some(geometry);

        canvas.save();
        canvas.set_global_alpha(self.config.alpha);
        for trade in &self.series.trades {
            let center = trade_center(transform, trade);
            let radius = state.cursor.resolve_radius(
                center.x.as_f32(),
                center.y.as_f32(),
                &self.series.volumes,
                self.config.base_radius,
            );
            match radius {
                Some(r) => self.draw_marker(canvas, center, r),
                None => debug!(series_id, "no volume for trade marker, skipped"),
            }
        }
        canvas.restore();
    }

    fn get_min_max(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.series.trades.first()?;
        let init = (first.time, first.time, first.price, first.price);
        Some(self.series.trades.iter().fold(init, |(x0, x1, y0, y1), t| {
            (x0.min(t.time), x1.max(t.time), y0.min(t.price), y1.max(t.price))
        }))
    }

    fn hit_test(
        &self,
        transform: &PlotTransform,
        position: Point<Pixels>,
        tolerance: f32,
    ) -> Option<usize> {
        let state = self.state.lock();
        let (mx, my) = (position.x.as_f32(), position.y.as_f32());

        self.series
            .trades
            .iter()
            .enumerate()
            .filter_map(|(i, trade)| {
                let center = trade_center(transform, trade);
                let (cx, cy) = (center.x.as_f32(), center.y.as_f32());
                let radius = state
                    .cursor
                    .cached(cx, cy)
                    .unwrap_or(self.config.base_radius);
                let dist = ((mx - cx).powi(2) + (my - cy).powi(2)).sqrt();
                (dist <= radius + tolerance).then_some((i, dist))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    fn render_highlight(&self, canvas: &mut dyn Canvas, transform: &PlotTransform, index: usize) {
        let Some(trade) = self.series.trades.get(index) else {
            return;
        };
        let mut state = self.state.lock();
        // A highlight against stale geometry would look like a resize to the
        // cursor and wipe the cache; wait for the next full render instead.
        if state.geometry != Some(transform.geometry_key()) {
            return;
        }

        let center = trade_center(transform, trade);
        let (x, y) = (center.x.as_f32(), center.y.as_f32());
        let radius = state.cursor.cached(x, y).or_else(|| {
            state
                .cursor
                .resolve_radius(x, y, &self.series.volumes, self.config.base_radius)
        });
        let Some(radius) = radius else {
            return;
        };
        drop(state);

        canvas.save();
        canvas.set_global_alpha(self.config.alpha);
        let halo = half_disc_outline(
            center,
            radius + self.config.line_width,
            self.series.key.side,
            self.config.arc_segments,
        );
        let halo_color = self.config.color.opacity(0.5);
        canvas.stroke_polyline(&halo, self.config.line_width * 2.0, halo_color);
        self.draw_marker(canvas, center, radius);
        canvas.restore();
    }

    fn describe(&self, index: usize) -> Vec<String> {
        self.series
            .trades
            .get(index)
            .map(Trade::summary_lines)
            .unwrap_or_default()
    }
}
