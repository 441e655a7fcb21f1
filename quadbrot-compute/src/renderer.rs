use crate::escape_time::EscapeTimeEngine;
use crate::iteration_grid::IterationGrid;
use crate::step_rule::{IterationStep, Quadratic};
use quadbrot_core::{PixelMapping, PixelRect};

/// Sequential escape-time renderer.
///
/// Visits every pixel of a [`PixelMapping`], counts iterations for the
/// sampled 4D point and hands `(x, y, count)` to a sink. Pixels are visited
/// column by column (x outer, y inner); no pixel depends on another.
#[derive(Clone, Debug)]
pub struct Renderer<S = Quadratic> {
    engine: EscapeTimeEngine<S>,
}

impl Renderer<Quadratic> {
    pub fn new(max_iterations: u32) -> Self {
        Self::with_engine(EscapeTimeEngine::new(max_iterations))
    }
}

impl<S: IterationStep> Renderer<S> {
    pub fn with_engine(engine: EscapeTimeEngine<S>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &EscapeTimeEngine<S> {
        &self.engine
    }

    /// Call `sink` exactly once for each pixel of the mapping.
    pub fn render<F>(&self, mapping: &PixelMapping, sink: F)
    where
        F: FnMut(u32, u32, i32),
    {
        self.render_rect(mapping, mapping.bounds(), sink);
    }

    /// Render a sub-rectangle; the sink receives absolute pixel coordinates.
    pub fn render_rect<F>(&self, mapping: &PixelMapping, rect: PixelRect, mut sink: F)
    where
        F: FnMut(u32, u32, i32),
    {
        for x in rect.x..rect.x + rect.width {
            for y in rect.y..rect.y + rect.height {
                let point = mapping.at(x as i64, y as i64);
                sink(x, y, self.engine.count_iterations(&point));
            }
        }
    }

    /// Collect all counts into a grid.
    pub fn render_grid(&self, mapping: &PixelMapping) -> IterationGrid {
        let mut grid = IterationGrid::new(mapping.width(), mapping.height());
        self.render(mapping, |x, y, it| grid.set(x, y, it));
        grid
    }
}
