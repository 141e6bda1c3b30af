use d3rs::scale::{LinearScale, Scale as D3Scale};

/// Axis-space to pixel-space mapping for one axis.
#[derive(Clone)]
pub enum ChartScale {
    Linear(LinearScale),
}

impl ChartScale {
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        let (d_min, d_max) = widen_degenerate(domain.0, domain.1);
        let scale = LinearScale::new()
            .domain(d_min, d_max)
            .range(range.0 as f64, range.1 as f64);
        Self::Linear(scale)
    }

    pub fn map(&self, value: f64) -> f32 {
        let res = match self {
            Self::Linear(s) => s.scale(value) as f32,
        };
        if res.is_finite() {
            res
        } else {
            0.0
        }
    }

    pub fn invert(&self, pixel: f32) -> f64 {
        match self {
            Self::Linear(s) => s.invert(pixel as f64).unwrap_or(0.0),
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        match self {
            Self::Linear(s) => (s.domain().0, s.domain().1),
        }
    }

    pub fn range(&self) -> (f32, f32) {
        match self {
            Self::Linear(s) => (s.range().0 as f32, s.range().1 as f32),
        }
    }
}

/// A zero-width domain cannot be mapped, so it is opened by half a unit
/// on each side.
fn widen_degenerate(min: f64, max: f64) -> (f64, f64) {
    if (max - min).abs() < f64::EPSILON {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}
