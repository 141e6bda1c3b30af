//! Volume-scaled marker radii, remembered by pixel coordinate.
//!
//! A marker series is drawn once per full pass, in order, so the n-th draw
//! call belongs to the n-th volume. Later draws at an already known pixel
//! (hover highlights) must reuse the radius assigned on the full pass rather
//! than read whatever volume the cursor points at by then.

use crate::data_types::TradeSide;
use crate::utils::pixel_point;
use gpui::{Pixels, Point};
use std::collections::HashMap;
use std::f32::consts::PI;
use tracing::debug;

/// Hash key for a pixel coordinate. `-0.0` and `0.0` map to the same key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelKey(u32, u32);

impl PixelKey {
    pub fn new(x: f32, y: f32) -> Self {
        Self((x + 0.0).to_bits(), (y + 0.0).to_bits())
    }
}

/// Draw cursor and radius cache of one marker series.
#[derive(Clone, Debug, Default)]
pub struct SeriesCursor {
    count: usize,
    radii: HashMap<PixelKey, f32>,
}

impl SeriesCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points assigned since the last reset.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn cached(&self, x: f32, y: f32) -> Option<f32> {
        self.radii.get(&PixelKey::new(x, y)).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// Forgets every assignment. The next draw is treated as the first point
    /// of a new full pass.
    pub fn invalidate(&mut self) {
        self.count = 0;
        self.radii.clear();
    }

    /// Radius for a marker drawn at `(x, y)`.
    ///
    /// While the full pass is in progress every call consumes the next
    /// volume. Once all volumes are consumed, a known coordinate returns its
    /// cached radius and a new coordinate starts a fresh pass.
    ///
    /// Returns `None` when there are no volumes to size the marker from.
    pub fn resolve_radius(
        &mut self,
        x: f32,
        y: f32,
        volumes: &[f64],
        base_radius: f32,
    ) -> Option<f32> {
        let key = PixelKey::new(x, y);

        if self.count >= volumes.len() {
            if let Some(radius) = self.radii.get(&key) {
                return Some(*radius);
            }
            if self.count > 0 {
                debug!(
                    count = self.count,
                    x,
                    y,
                    "unseen coordinate after full pass, resetting cursor"
                );
            }
            self.invalidate();
        }

        let volume = *volumes.get(self.count)?;
        let radius = base_radius * (volume as f32).sqrt();
        self.radii.insert(key, radius);
        self.count += 1;
        Some(radius)
    }
}

/// Outline of a half-disc marker. Bids cover the lower half and asks the
/// upper half, so both sides stay distinguishable when they overlap.
pub fn half_disc_outline(
    center: Point<Pixels>,
    radius: f32,
    side: TradeSide,
    segments: usize,
) -> Vec<Point<Pixels>> {
    let segments = segments.max(2);
    let cx = f32::from(center.x);
    let cy = f32::from(center.y);
    // Screen y grows downwards: positive angles sweep through the bottom.
    let direction = match side {
        TradeSide::Bids => 1.0,
        TradeSide::Asks => -1.0,
    };

    let mut outline = Vec::with_capacity(segments + 2);
    for i in 0..=segments {
        let angle = direction * PI * i as f32 / segments as f32;
        outline.push(pixel_point(cx + radius * angle.cos(), cy + radius * angle.sin()));
    }
    outline.push(center);
    outline
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::px;

    #[test]
    fn negative_zero_shares_key() {
        assert_eq!(PixelKey::new(-0.0, 1.0), PixelKey::new(0.0, 1.0));
    }

    #[test]
    fn empty_volumes_yield_nothing() {
        let mut cursor = SeriesCursor::new();
        assert_eq!(cursor.resolve_radius(1.0, 1.0, &[], 3.0), None);
        assert_eq!(cursor.count(), 0);
    }

    #[test]
    fn bids_hang_below_center() {
        let center = Point::new(px(10.0), px(10.0));
        let outline = half_disc_outline(center, 4.0, TradeSide::Bids, 8);
        assert!(outline.iter().all(|p| f32::from(p.y) >= 10.0 - 1e-4));
        let outline = half_disc_outline(center, 4.0, TradeSide::Asks, 8);
        assert!(outline.iter().all(|p| f32::from(p.y) <= 10.0 + 1e-4));
    }
}
