//! `quadbrot` command line front end: configuration, colorization and PNG output.

pub mod args;
pub mod colorize;
pub mod error;
pub mod framebuffer;

pub use args::Cli;
pub use colorize::colorize;
pub use error::CliError;
pub use framebuffer::Framebuffer;

use quadbrot_compute::{
    build_rule, EscapeTimeEngine, IterationGrid, IterationStep, ParallelRenderer, RenderConfig,
    Renderer,
};
use std::time::Instant;

/// Render a validated configuration into a framebuffer.
///
/// `threads` of `None` uses the global rayon pool; `sequential` bypasses
/// rayon and writes each pixel straight from the renderer's sink.
pub fn render(
    config: &RenderConfig,
    sequential: bool,
    threads: Option<usize>,
) -> Result<(Framebuffer, IterationGrid), CliError> {
    config.validate()?;

    let mapping = config.pixel_mapping();
    let engine = EscapeTimeEngine::with_rule(config.max_iterations, build_rule(config.rule));
    log::info!(
        "rendering {}x{} with rule {} and max {} iterations",
        config.width,
        config.height,
        engine.rule().name(),
        config.max_iterations
    );
    let renderer = Renderer::with_engine(engine);

    let start = Instant::now();
    let result = if sequential {
        let mut fb = Framebuffer::new(config.width, config.height);
        let mut grid = IterationGrid::new(config.width, config.height);
        renderer.render(&mapping, |x, y, it| {
            fb.set_pixel(x, y, colorize(it));
            grid.set(x, y, it);
        });
        (fb, grid)
    } else {
        let parallel = ParallelRenderer::new(renderer);
        let grid = match threads {
            Some(n) => rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()?
                .install(|| parallel.render_grid(&mapping)),
            None => parallel.render_grid(&mapping),
        };
        (Framebuffer::from_grid(&grid, colorize), grid)
    };
    log::info!("rendered in {:.1} ms", start.elapsed().as_secs_f64() * 1000.0);

    let (_, grid) = &result;
    if grid.max_count().is_none() {
        log::warn!("no pixel escaped; the image is entirely black");
    } else {
        log::debug!(
            "{:.1}% of pixels escaped, slowest after {:?} iterations",
            grid.escaped_fraction() * 100.0,
            grid.max_count()
        );
    }

    Ok(result)
}

/// Entry point behind `main`.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let config = cli.resolve_config()?;
    log::debug!("resolved configuration: {:?}", config);

    if cli.dump_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let (fb, _) = render(&config, cli.sequential, cli.threads)?;
    fb.write_png(&cli.output)?;
    log::info!("wrote {}", cli.output.display());
    Ok(())
}
