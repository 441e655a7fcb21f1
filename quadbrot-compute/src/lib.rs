pub mod escape_time;
pub mod iteration_grid;
pub mod parallel_renderer;
pub mod renderer;
pub mod step_rule;

pub use escape_time::{EscapeTimeEngine, DID_NOT_ESCAPE, ESCAPE_RADIUS};
pub use iteration_grid::IterationGrid;
pub use parallel_renderer::{ParallelRenderer, DEFAULT_BAND_HEIGHT};
pub use renderer::Renderer;
pub use step_rule::{build_rule, Cubic, FnStep, IterationStep, Quadratic};

// Re-export core types for convenience
pub use quadbrot_core::*;
