pub mod axis;
pub mod color;
pub mod plot_configs;
pub mod trades;
pub mod watermark;

pub use axis::*;
pub use color::*;
pub use plot_configs::*;
pub use trades::*;
pub use watermark::*;
