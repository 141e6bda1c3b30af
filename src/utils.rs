use gpui::{px, Pixels, Point};

pub trait PixelsExt {
    fn as_f32(&self) -> f32;
    fn as_f64(&self) -> f64;
}

impl PixelsExt for Pixels {
    fn as_f32(&self) -> f32 {
        f32::from(*self)
    }

    fn as_f64(&self) -> f64 {
        f32::from(*self) as f64
    }
}

/// Builds a pixel point from raw f32 coordinates.
pub fn pixel_point(x: f32, y: f32) -> Point<Pixels> {
    Point::new(px(x), px(y))
}
