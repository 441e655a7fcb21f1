//! Render configuration, presets and validation.
//!
//! The geometric core never validates its inputs; degenerate planes and
//! windows simply produce NaN points. Callers that want to reject such input
//! before spending a render on it use [`RenderConfig::validate`].

use crate::{Complex, CoordinateWindow, PixelMapping, Plane, Vector4};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Below this length the orthogonal part of the unit y seed counts as zero.
const PARALLEL_EPS: f64 = 1e-12;

fn has_unit_length(v: &Vector4) -> bool {
    (v.magnitude() - 1.0).abs() <= 1e-9
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("image dimensions must be positive, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("max_iterations must be at least 1")]
    ZeroIterations,

    #[error("max_iterations {0} exceeds the largest representable count {max}", max = i32::MAX)]
    TooManyIterations(u32),

    #[error("window width must be positive and finite, got {0}")]
    InvalidWindowWidth(f64),

    #[error("{0} must be finite")]
    NonFinite(&'static str),

    #[error("plane x axis seed is the zero vector")]
    ZeroAxis,

    #[error("plane y axis seed is parallel to the x axis seed")]
    ParallelAxes,

    #[error("{0} is too large or too small to normalize")]
    Unnormalizable(&'static str),

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
}

/// Single-step iteration rule, selected by name in configuration files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepRule {
    /// z² + c
    #[default]
    Quadratic,
    /// z³ + c
    Cubic,
}

/// How the sampling plane is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlaneSpec {
    Mandelbrot,
    Julia {
        c_re: f64,
        c_im: f64,
    },
    Custom {
        origin: Vector4,
        x_axis: Vector4,
        y_axis: Vector4,
    },
}

impl PlaneSpec {
    pub fn build(&self) -> Plane {
        match *self {
            Self::Mandelbrot => Plane::mandelbrot(),
            Self::Julia { c_re, c_im } => Plane::julia(Complex::new(c_re, c_im)),
            Self::Custom {
                origin,
                x_axis,
                y_axis,
            } => Plane::new(origin, x_axis, y_axis),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::Mandelbrot => Ok(()),
            Self::Julia { c_re, c_im } => {
                if c_re.is_finite() && c_im.is_finite() {
                    Ok(())
                } else {
                    Err(ConfigError::NonFinite("julia constant"))
                }
            }
            Self::Custom {
                origin,
                x_axis,
                y_axis,
            } => {
                if !origin.is_finite() {
                    return Err(ConfigError::NonFinite("plane origin"));
                }
                if !x_axis.is_finite() || !y_axis.is_finite() {
                    return Err(ConfigError::NonFinite("plane axis seed"));
                }
                if x_axis == Vector4::ZERO {
                    return Err(ConfigError::ZeroAxis);
                }
                let plane = self.build();
                if !has_unit_length(&plane.x_unit()) {
                    return Err(ConfigError::Unnormalizable("plane x axis seed"));
                }
                if y_axis == Vector4::ZERO {
                    return Err(ConfigError::ParallelAxes);
                }
                let y_direction = y_axis.normalized();
                if !has_unit_length(&y_direction) {
                    return Err(ConfigError::Unnormalizable("plane y axis seed"));
                }
                // Only directions matter; compare at unit scale
                let remainder = y_direction.rejection_from(&plane.x_unit());
                if remainder.magnitude() <= PARALLEL_EPS || plane.is_degenerate() {
                    return Err(ConfigError::ParallelAxes);
                }
                Ok(())
            }
        }
    }
}

/// Visible region of the plane, in either of the two accepted forms.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WindowSpec {
    Center {
        x: f64,
        y: f64,
        width: f64,
    },
    Corners {
        x_top_left: f64,
        y_top_left: f64,
        x_bottom_right: f64,
        y_bottom_right: f64,
    },
}

impl WindowSpec {
    pub fn build(&self) -> CoordinateWindow {
        match *self {
            Self::Center { x, y, width } => CoordinateWindow::new(x, y, width),
            Self::Corners {
                x_top_left,
                y_top_left,
                x_bottom_right,
                y_bottom_right,
            } => CoordinateWindow::from_corners(
                x_top_left,
                y_top_left,
                x_bottom_right,
                y_bottom_right,
            ),
        }
    }
}

/// Everything needed to produce one image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub max_iterations: u32,
    #[serde(default)]
    pub rule: StepRule,
    pub plane: PlaneSpec,
    pub window: WindowSpec,
    pub width: u32,
    pub height: u32,
}

impl Default for RenderConfig {
    /// Julia set of 0.282 + 0.01i, x from -2.5 to 1.5, 800x600, 250 iterations.
    fn default() -> Self {
        Self {
            max_iterations: 250,
            rule: StepRule::Quadratic,
            plane: PlaneSpec::Julia {
                c_re: 0.282,
                c_im: 0.01,
            },
            window: WindowSpec::Center {
                x: -0.5,
                y: 0.0,
                width: 4.0,
            },
            width: 800,
            height: 600,
        }
    }
}

impl RenderConfig {
    /// Reject inputs the core would turn into NaN or empty images.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if self.max_iterations > i32::MAX as u32 {
            return Err(ConfigError::TooManyIterations(self.max_iterations));
        }

        let window = self.window.build();
        if !window.xcenter.is_finite() || !window.ycenter.is_finite() {
            return Err(ConfigError::NonFinite("window center"));
        }
        if !(window.xside.is_finite() && window.xside > 0.0) {
            return Err(ConfigError::InvalidWindowWidth(window.xside));
        }

        self.plane.validate()
    }

    pub fn plane(&self) -> Plane {
        self.plane.build()
    }

    pub fn window(&self) -> CoordinateWindow {
        self.window.build()
    }

    pub fn pixel_mapping(&self) -> PixelMapping {
        PixelMapping::new(self.plane(), &self.window(), self.width, self.height)
    }
}

/// Named starting point for a render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    pub id: &'static str,
    pub display_name: &'static str,
    pub plane: PlaneSpec,
    pub window: WindowSpec,
    pub max_iterations: u32,
}

impl Preset {
    /// Full configuration for this preset at the given image size.
    pub fn config(&self, width: u32, height: u32) -> RenderConfig {
        RenderConfig {
            max_iterations: self.max_iterations,
            rule: StepRule::Quadratic,
            plane: self.plane,
            window: self.window,
            width,
            height,
        }
    }
}

pub static PRESETS: &[Preset] = &[
    Preset {
        id: "mandelbrot",
        display_name: "Mandelbrot Set",
        plane: PlaneSpec::Mandelbrot,
        window: WindowSpec::Center {
            x: -0.5,
            y: 0.0,
            width: 4.0,
        },
        max_iterations: 250,
    },
    Preset {
        id: "julia",
        display_name: "Julia Set (0.282 + 0.01i)",
        plane: PlaneSpec::Julia {
            c_re: 0.282,
            c_im: 0.01,
        },
        window: WindowSpec::Center {
            x: -0.5,
            y: 0.0,
            width: 4.0,
        },
        max_iterations: 250,
    },
    Preset {
        id: "tilted",
        display_name: "Tilted (c and z0 mixed)",
        plane: PlaneSpec::Custom {
            origin: Vector4::new(0.0, 0.0, 0.0, 0.0),
            x_axis: Vector4::new(1.0, 0.0, 0.5, 0.0),
            y_axis: Vector4::new(0.0, 1.0, 0.0, 0.5),
        },
        window: WindowSpec::Center {
            x: -0.5,
            y: 0.0,
            width: 4.0,
        },
        max_iterations: 250,
    },
];

/// Look up a preset by ID.
pub fn get_preset(id: &str) -> Result<&'static Preset, ConfigError> {
    PRESETS
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ConfigError::UnknownPreset(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(origin: Vector4, x_axis: Vector4, y_axis: Vector4) -> RenderConfig {
        RenderConfig {
            plane: PlaneSpec::Custom {
                origin,
                x_axis,
                y_axis,
            },
            ..RenderConfig::default()
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(RenderConfig::default().validate(), Ok(()));
    }

    #[test]
    fn all_presets_are_valid() {
        for preset in PRESETS {
            assert_eq!(preset.config(320, 240).validate(), Ok(()), "{}", preset.id);
        }
    }

    #[test]
    fn zero_dimensions_rejected() {
        let config = RenderConfig {
            width: 0,
            ..RenderConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyImage {
                width: 0,
                height: 600
            })
        );
    }

    #[test]
    fn iteration_bounds_rejected() {
        let zero = RenderConfig {
            max_iterations: 0,
            ..RenderConfig::default()
        };
        assert_eq!(zero.validate(), Err(ConfigError::ZeroIterations));

        let huge = RenderConfig {
            max_iterations: u32::MAX,
            ..RenderConfig::default()
        };
        assert_eq!(
            huge.validate(),
            Err(ConfigError::TooManyIterations(u32::MAX))
        );
    }

    #[test]
    fn non_positive_window_rejected() {
        let config = RenderConfig {
            window: WindowSpec::Corners {
                x_top_left: 1.0,
                y_top_left: 1.0,
                x_bottom_right: -1.0,
                y_bottom_right: -1.0,
            },
            ..RenderConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidWindowWidth(-2.0)));
    }

    #[test]
    fn degenerate_planes_rejected() {
        let zero = custom(Vector4::ZERO, Vector4::ZERO, Vector4::basis(1));
        assert_eq!(zero.validate(), Err(ConfigError::ZeroAxis));

        let parallel = custom(
            Vector4::ZERO,
            Vector4::new(1.0, 2.0, 0.0, 0.0),
            Vector4::new(-2.0, -4.0, 0.0, 0.0),
        );
        assert_eq!(parallel.validate(), Err(ConfigError::ParallelAxes));

        let zero_y = custom(Vector4::ZERO, Vector4::basis(0), Vector4::ZERO);
        assert_eq!(zero_y.validate(), Err(ConfigError::ParallelAxes));

        let nan = custom(
            Vector4::new(f64::NAN, 0.0, 0.0, 0.0),
            Vector4::basis(0),
            Vector4::basis(1),
        );
        assert_eq!(nan.validate(), Err(ConfigError::NonFinite("plane origin")));
    }

    #[test]
    fn seeds_that_overflow_when_squared_are_rejected() {
        let config = custom(
            Vector4::ZERO,
            Vector4::new(1e160, 0.0, 0.0, 0.0),
            Vector4::basis(1),
        );
        assert!(config.plane.build().is_degenerate());
        assert_eq!(
            config.validate(),
            Err(ConfigError::Unnormalizable("plane x axis seed"))
        );

        let huge_y = custom(
            Vector4::ZERO,
            Vector4::basis(0),
            Vector4::new(0.0, 1e160, 0.0, 0.0),
        );
        assert_eq!(
            huge_y.validate(),
            Err(ConfigError::Unnormalizable("plane y axis seed"))
        );
    }

    #[test]
    fn tiny_seeds_are_accepted() {
        let config = custom(
            Vector4::ZERO,
            Vector4::new(1e-13, 0.0, 0.0, 0.0),
            Vector4::new(0.0, 1e-13, 0.0, 0.0),
        );
        let plane = config.plane.build();
        assert_eq!(plane.x_unit(), Vector4::basis(0));
        assert_eq!(plane.y_unit(), Vector4::basis(1));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn tiny_parallel_seeds_are_rejected() {
        let config = custom(
            Vector4::ZERO,
            Vector4::new(1e-13, 1e-13, 0.0, 0.0),
            Vector4::new(3e-13, 3e-13, 0.0, 0.0),
        );
        assert_eq!(config.validate(), Err(ConfigError::ParallelAxes));
    }

    #[test]
    fn corner_window_builds_half_difference_center() {
        let spec = WindowSpec::Corners {
            x_top_left: -2.0,
            y_top_left: 1.0,
            x_bottom_right: 1.0,
            y_bottom_right: -1.0,
        };
        assert_eq!(spec.build(), CoordinateWindow::new(-0.5, 1.0, 3.0));
    }

    #[test]
    fn get_preset_finds_known_ids() {
        assert_eq!(get_preset("mandelbrot").unwrap().plane, PlaneSpec::Mandelbrot);
        assert!(get_preset("julia").is_ok());
        assert_eq!(
            get_preset("nope"),
            Err(ConfigError::UnknownPreset("nope".to_string()))
        );
    }

    #[test]
    fn config_json_roundtrip() {
        let config = custom(
            Vector4::new(0.1, 0.2, 0.0, 0.0),
            Vector4::basis(0),
            Vector4::new(0.0, 1.0, 1.0, 0.0),
        );
        let json = serde_json::to_string(&config).unwrap();
        let restored: RenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn config_parses_handwritten_json() {
        let json = r#"{
            "max_iterations": 100,
            "plane": { "kind": "julia", "c_re": -0.8, "c_im": 0.156 },
            "window": { "kind": "center", "x": 0.0, "y": 0.0, "width": 3.0 },
            "width": 64,
            "height": 48
        }"#;
        let config: RenderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.rule, StepRule::Quadratic);
        assert_eq!(
            config.plane,
            PlaneSpec::Julia {
                c_re: -0.8,
                c_im: 0.156
            }
        );
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn step_rule_names() {
        let rule: StepRule = serde_json::from_str("\"cubic\"").unwrap();
        assert_eq!(rule, StepRule::Cubic);
        assert_eq!(serde_json::to_string(&StepRule::Quadratic).unwrap(), "\"quadratic\"");
    }

    #[test]
    fn pixel_mapping_uses_config_dimensions() {
        let mapping = get_preset("mandelbrot").unwrap().config(8, 6).pixel_mapping();
        assert_eq!(mapping.width(), 8);
        assert_eq!(mapping.height(), 6);
        assert_eq!(mapping.pixel_size(), 0.5);
    }
}
