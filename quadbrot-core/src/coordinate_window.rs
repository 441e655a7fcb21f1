use serde::{Deserialize, Serialize};

/// Rectangular region of a plane's local 2D coordinates, independent of
/// image resolution.
///
/// Only the horizontal extent is stored. The vertical extent follows from the
/// image aspect ratio once the window is bound to a pixel grid.
///
/// A non-positive `xside` is accepted and gives a collapsed or mirrored image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoordinateWindow {
    pub xcenter: f64,
    pub ycenter: f64,
    pub xside: f64,
}

impl CoordinateWindow {
    pub fn new(xcenter: f64, ycenter: f64, xside: f64) -> Self {
        Self {
            xcenter,
            ycenter,
            xside,
        }
    }

    /// Window spanned by a top-left and a bottom-right corner.
    ///
    /// The y center is `(ytopleft - ybottomright) / 2`, a half-difference and
    /// not the midpoint.
    pub fn from_corners(
        xtopleft: f64,
        ytopleft: f64,
        xbottomright: f64,
        ybottomright: f64,
    ) -> Self {
        Self {
            xcenter: (xtopleft + xbottomright) / 2.0,
            ycenter: (ytopleft - ybottomright) / 2.0,
            xside: xbottomright - xtopleft,
        }
    }

    /// Plane-space height of the window once bound to a `width` x `height` grid.
    pub fn yside_for(&self, width: u32, height: u32) -> f64 {
        self.xside * height as f64 / width as f64
    }
}
