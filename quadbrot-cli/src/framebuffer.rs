use image::{ImageFormat, Rgb, RgbImage};
use quadbrot_compute::IterationGrid;
use std::path::Path;

/// Fixed-size RGB image that rendered pixels are written into.
pub struct Framebuffer {
    image: RgbImage,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::new(width, height),
        }
    }

    /// Colorize every count of a grid.
    pub fn from_grid(grid: &IterationGrid, colorize: impl Fn(i32) -> [u8; 3]) -> Self {
        let mut fb = Self::new(grid.width, grid.height);
        for (y, row) in grid.rows().enumerate() {
            for (x, &it) in row.iter().enumerate() {
                fb.set_pixel(x as u32, y as u32, colorize(it));
            }
        }
        fb
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        self.image.put_pixel(x, y, Rgb(rgb));
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.image.get_pixel(x, y).0
    }

    pub fn write_png(&self, path: &Path) -> Result<(), image::ImageError> {
        self.image.save_with_format(path, ImageFormat::Png)
    }
}
