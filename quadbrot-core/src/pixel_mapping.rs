use crate::{CoordinateWindow, PixelRect, Plane, Vector4};

/// Binds a [`CoordinateWindow`] on a [`Plane`] to a pixel grid.
///
/// Pixels are square: the step between neighbouring pixels is `xside / width`
/// on both axes, so the visible y extent is `xside * height / width`.
///
/// Pixel `(width / 2, height / 2)` (integer halving) sits on the window
/// center. Pixel y grows with plane y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelMapping {
    plane: Plane,
    width: u32,
    height: u32,
    pixel_size: f64,
    x_origin: f64,
    y_origin: f64,
}

impl PixelMapping {
    /// A zero `width` makes the pixel size infinite and every mapped point NaN.
    pub fn new(plane: Plane, window: &CoordinateWindow, width: u32, height: u32) -> Self {
        let pixel_size = window.xside / width as f64;
        Self {
            plane,
            width,
            height,
            pixel_size,
            x_origin: window.xcenter - (width / 2) as f64 * pixel_size,
            y_origin: window.ycenter - (height / 2) as f64 * pixel_size,
        }
    }

    /// 4D point sampled by pixel `(px, py)`. Coordinates outside the grid are
    /// extrapolated along the plane.
    #[inline]
    pub fn at(&self, px: i64, py: i64) -> Vector4 {
        self.plane.at(
            self.x_origin + px as f64 * self.pixel_size,
            self.y_origin + py as f64 * self.pixel_size,
        )
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// Local plane coordinates of pixel (0, 0).
    pub fn origin(&self) -> (f64, f64) {
        (self.x_origin, self.y_origin)
    }

    pub fn bounds(&self) -> PixelRect {
        PixelRect::full(self.width, self.height)
    }
}
