use crate::escape_time::DID_NOT_ESCAPE;
use serde::{Deserialize, Serialize};

/// Iteration counts for a whole image, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationGrid {
    pub width: u32,
    pub height: u32,
    pub counts: Vec<i32>,
}

impl IterationGrid {
    /// Grid with every pixel set to [`DID_NOT_ESCAPE`].
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            counts: vec![DID_NOT_ESCAPE; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, x: u32, y: u32) -> i32 {
        self.counts[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, count: i32) {
        let i = self.index(x, y);
        self.counts[i] = count;
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        self.counts.chunks(self.width.max(1) as usize)
    }

    /// Share of pixels whose orbit escaped within the bound.
    pub fn escaped_fraction(&self) -> f64 {
        if self.counts.is_empty() {
            return 0.0;
        }
        let escaped = self.counts.iter().filter(|&&c| c >= 0).count();
        escaped as f64 / self.counts.len() as f64
    }

    /// Largest escape count in the grid, if any pixel escaped.
    pub fn max_count(&self) -> Option<i32> {
        self.counts.iter().copied().filter(|&c| c >= 0).max()
    }
}
