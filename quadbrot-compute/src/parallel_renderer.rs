//! Multi-threaded rendering over horizontal pixel bands.
//!
//! Each band owns a disjoint slice of the output grid, so workers never
//! share mutable state. The result is identical to [`Renderer::render_grid`].

use crate::iteration_grid::IterationGrid;
use crate::renderer::Renderer;
use crate::step_rule::IterationStep;
use quadbrot_core::PixelMapping;
use rayon::prelude::*;

/// Rows per band when none is given.
pub const DEFAULT_BAND_HEIGHT: u32 = 16;

#[derive(Clone, Debug)]
pub struct ParallelRenderer<S> {
    renderer: Renderer<S>,
    band_height: u32,
}

impl<S: IterationStep> ParallelRenderer<S> {
    pub fn new(renderer: Renderer<S>) -> Self {
        Self::with_band_height(renderer, DEFAULT_BAND_HEIGHT)
    }

    pub fn with_band_height(renderer: Renderer<S>, band_height: u32) -> Self {
        Self {
            renderer,
            band_height: band_height.max(1),
        }
    }

    pub fn band_height(&self) -> u32 {
        self.band_height
    }

    /// Render on the current rayon pool.
    pub fn render_grid(&self, mapping: &PixelMapping) -> IterationGrid {
        let mut grid = IterationGrid::new(mapping.width(), mapping.height());
        let width = mapping.width() as usize;
        if width == 0 || mapping.height() == 0 {
            return grid;
        }

        let bands = mapping.bounds().rows(self.band_height);
        log::debug!(
            "rendering {}x{} in {} bands of {} rows",
            mapping.width(),
            mapping.height(),
            bands.len(),
            self.band_height
        );

        grid.counts
            .par_chunks_mut(width * self.band_height as usize)
            .zip(bands.into_par_iter())
            .for_each(|(chunk, band)| {
                self.renderer.render_rect(mapping, band, |x, y, it| {
                    chunk[(y - band.y) as usize * width + x as usize] = it;
                });
            });

        grid
    }
}
