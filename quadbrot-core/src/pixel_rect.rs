use serde::{Deserialize, Serialize};

/// Rectangle in pixel space (always u32 coordinates)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// Create new pixel rectangle
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering a whole `width` x `height` grid
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Calculate area in pixels
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if point is inside rectangle
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x
            && px < self.x.saturating_add(self.width)
            && py >= self.y
            && py < self.y.saturating_add(self.height)
    }

    /// Split into horizontal bands of at most `band_height` rows, top to bottom.
    ///
    /// Bands are disjoint and together cover the rectangle exactly.
    pub fn rows(&self, band_height: u32) -> Vec<PixelRect> {
        let band_height = band_height.max(1);
        let bottom = self.y.saturating_add(self.height);
        (self.y..bottom)
            .step_by(band_height as usize)
            .map(|y_start| {
                let h = band_height.min(bottom - y_start);
                PixelRect::new(self.x, y_start, self.width, h)
            })
            .collect()
    }
}
