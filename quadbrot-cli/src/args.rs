//! Command line arguments and their resolution into a [`RenderConfig`].

use crate::error::CliError;
use clap::{Parser, ValueEnum, ValueHint};
use quadbrot_core::{get_preset, PlaneSpec, RenderConfig, StepRule, WindowSpec};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "quadbrot",
    author,
    version,
    about = "Render escape-time fractals sampled on planes through 4-space"
)]
pub struct Cli {
    /// Load the render configuration from a JSON file
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "preset")]
    pub config: Option<PathBuf>,

    /// Start from a named preset (mandelbrot, julia, tilted)
    #[arg(long)]
    pub preset: Option<String>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Iteration bound per pixel
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Window center on the plane, as `x,y`
    #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
    pub center: Option<Pair>,

    /// Window width on the plane
    #[arg(long)]
    pub span: Option<f64>,

    /// Window corners, as `x_top_left,y_top_left,x_bottom_right,y_bottom_right`
    #[arg(
        long,
        value_parser = parse_corners,
        allow_hyphen_values = true,
        conflicts_with_all = ["center", "span"]
    )]
    pub corners: Option<Corners>,

    /// Render the Julia plane of the constant `re,im`
    #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
    pub julia: Option<Pair>,

    /// Iteration rule
    #[arg(long, value_enum)]
    pub rule: Option<RuleArg>,

    /// Worker threads for parallel rendering (default: one per core)
    #[arg(long, conflicts_with = "sequential")]
    pub threads: Option<usize>,

    /// Render on the calling thread, pixel by pixel
    #[arg(long)]
    pub sequential: bool,

    /// Output PNG path
    #[arg(short, long, value_hint = ValueHint::FilePath, default_value = "fractal.png")]
    pub output: PathBuf,

    /// Print the resolved configuration as JSON and exit
    #[arg(long)]
    pub dump_config: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pair(pub f64, pub f64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corners(pub [f64; 4]);

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RuleArg {
    Quadratic,
    Cubic,
}

impl From<RuleArg> for StepRule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::Quadratic => StepRule::Quadratic,
            RuleArg::Cubic => StepRule::Cubic,
        }
    }
}

fn parse_floats<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {} comma-separated numbers, got '{}'", N, s));
    }
    let mut values = [0.0; N];
    for (value, part) in values.iter_mut().zip(parts) {
        *value = part
            .parse()
            .map_err(|e| format!("invalid number '{}': {}", part, e))?;
    }
    Ok(values)
}

fn parse_pair(s: &str) -> Result<Pair, String> {
    let [a, b] = parse_floats::<2>(s)?;
    Ok(Pair(a, b))
}

fn parse_corners(s: &str) -> Result<Corners, String> {
    parse_floats::<4>(s).map(Corners)
}

impl Cli {
    /// Base configuration (file, preset or default) with command line overrides applied.
    pub fn resolve_config(&self) -> Result<RenderConfig, CliError> {
        let mut config = if let Some(path) = &self.config {
            let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&text)?
        } else if let Some(id) = &self.preset {
            let base = RenderConfig::default();
            get_preset(id)?.config(base.width, base.height)
        } else {
            RenderConfig::default()
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }
        if let Some(rule) = self.rule {
            config.rule = rule.into();
        }
        if let Some(Pair(c_re, c_im)) = self.julia {
            config.plane = PlaneSpec::Julia { c_re, c_im };
        }

        if let Some(Corners([x_top_left, y_top_left, x_bottom_right, y_bottom_right])) =
            self.corners
        {
            config.window = WindowSpec::Corners {
                x_top_left,
                y_top_left,
                x_bottom_right,
                y_bottom_right,
            };
        } else if self.center.is_some() || self.span.is_some() {
            let current = config.window.build();
            let Pair(x, y) = self
                .center
                .unwrap_or(Pair(current.xcenter, current.ycenter));
            config.window = WindowSpec::Center {
                x,
                y,
                width: self.span.unwrap_or(current.xside),
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadbrot_core::ConfigError;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["quadbrot"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn no_arguments_gives_default_config() {
        let cli = parse(&[]);
        assert_eq!(cli.resolve_config().unwrap(), RenderConfig::default());
        assert_eq!(cli.output, PathBuf::from("fractal.png"));
        assert!(!cli.sequential);
    }

    #[test]
    fn preset_keeps_default_size() {
        let config = parse(&["--preset", "mandelbrot"]).resolve_config().unwrap();
        assert_eq!(config.plane, PlaneSpec::Mandelbrot);
        assert_eq!((config.width, config.height), (800, 600));
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let err = parse(&["--preset", "nope"]).resolve_config().unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::UnknownPreset(ref id)) if id == "nope"
        ));
    }

    #[test]
    fn overrides_apply_on_top_of_preset() {
        let config = parse(&[
            "--preset",
            "mandelbrot",
            "--width",
            "64",
            "--height",
            "48",
            "--max-iterations",
            "99",
            "--rule",
            "cubic",
        ])
        .resolve_config()
        .unwrap();
        assert_eq!((config.width, config.height), (64, 48));
        assert_eq!(config.max_iterations, 99);
        assert_eq!(config.rule, StepRule::Cubic);
    }

    #[test]
    fn negative_center_and_julia_constant_parse() {
        let config = parse(&["--center", "-0.75,0.1", "--julia", "-0.8,0.156"])
            .resolve_config()
            .unwrap();
        assert_eq!(
            config.window,
            WindowSpec::Center {
                x: -0.75,
                y: 0.1,
                width: 4.0
            }
        );
        assert_eq!(
            config.plane,
            PlaneSpec::Julia {
                c_re: -0.8,
                c_im: 0.156
            }
        );
    }

    #[test]
    fn span_alone_keeps_center() {
        let config = parse(&["--span", "0.5"]).resolve_config().unwrap();
        assert_eq!(
            config.window,
            WindowSpec::Center {
                x: -0.5,
                y: 0.0,
                width: 0.5
            }
        );
    }

    #[test]
    fn corners_replace_window() {
        let config = parse(&["--corners", "-2,1,1,-1"]).resolve_config().unwrap();
        assert_eq!(config.window.build().ycenter, 1.0);
        assert_eq!(config.window.build().xside, 3.0);
    }

    #[test]
    fn corners_conflict_with_center() {
        let result = Cli::try_parse_from(["quadbrot", "--corners", "0,0,1,1", "--center", "0,0"]);
        assert!(result.is_err());
    }

    #[test]
    fn malformed_pair_is_rejected() {
        assert!(Cli::try_parse_from(["quadbrot", "--center", "1"]).is_err());
        assert!(Cli::try_parse_from(["quadbrot", "--julia", "a,b"]).is_err());
    }

    #[test]
    fn config_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let stored = RenderConfig {
            width: 32,
            height: 16,
            plane: PlaneSpec::Mandelbrot,
            ..RenderConfig::default()
        };
        write!(file, "{}", serde_json::to_string(&stored).unwrap()).unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let config = parse(&["--config", path.as_str(), "--max-iterations", "12"])
            .resolve_config()
            .unwrap();
        assert_eq!(
            config,
            RenderConfig {
                max_iterations: 12,
                ..stored
            }
        );
    }

    #[test]
    fn missing_config_file_reports_path() {
        let err = parse(&["--config", "/definitely/not/here.json"])
            .resolve_config()
            .unwrap_err();
        assert!(matches!(err, CliError::ReadConfig { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn parse_floats_trims_whitespace() {
        assert_eq!(parse_floats::<2>(" 1.5 , -2 "), Ok([1.5, -2.0]));
        assert!(parse_floats::<4>("1,2,3").is_err());
    }
}
