pub mod complex;
pub mod config;
pub mod coordinate_window;
pub mod pixel_mapping;
pub mod pixel_rect;
pub mod plane;
pub mod vector4;

pub use complex::Complex;
pub use config::{
    get_preset, ConfigError, PlaneSpec, Preset, RenderConfig, StepRule, WindowSpec, PRESETS,
};
pub use coordinate_window::CoordinateWindow;
pub use pixel_mapping::PixelMapping;
pub use pixel_rect::PixelRect;
pub use plane::Plane;
pub use vector4::Vector4;
