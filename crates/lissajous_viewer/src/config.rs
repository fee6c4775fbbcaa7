//! Runtime configuration for `lissajous-viewer`.
//!
//! [`Config`] is the resolved form of the command line: initial oscillator
//! inputs, animation timing and terminal/logging toggles. It is validated
//! before the terminal is touched so that bad launch options produce a plain
//! error message instead of a garbled screen.

use std::path::PathBuf;

use lissajous::{Lissajous, MAX_TRAJECTORY_SAMPLES, Oscillator, phase_from_sixths};
use serde::Serialize;

use crate::cli::{Cli, LogLevel};

/// Initial values of the five parameter inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Inputs {
    /// A₁
    pub amplitude_x: f64,
    /// A₂
    pub amplitude_y: f64,
    /// ω₁
    pub omega_x: f64,
    /// ω₂
    pub omega_y: f64,
    /// Δφ in multiples of π/6, applied to the vertical oscillation.
    pub phase_sixths: f64,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            amplitude_x: 1.0,
            amplitude_y: 1.0,
            omega_x: 1.0,
            omega_y: 1.0,
            phase_sixths: 3.0,
        }
    }
}

impl Inputs {
    /// Builds the kinematic system. The horizontal oscillation has zero phase.
    pub fn to_system(&self, mass: f64) -> Lissajous {
        Lissajous::new(
            Oscillator::new(self.amplitude_x, self.omega_x, 0.0),
            Oscillator::new(
                self.amplitude_y,
                self.omega_y,
                phase_from_sixths(self.phase_sixths),
            ),
            mass,
        )
    }
}

/// Runtime configuration for the viewer.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Initial parameter inputs.
    pub inputs: Inputs,
    /// Mass of the moving point.
    pub mass: f64,
    /// Animation frame rate.
    pub fps: u32,
    /// Simulated seconds per animation frame.
    pub time_step: f64,
    /// Time span of the static trajectory.
    pub duration: f64,
    /// Sampling step of the static trajectory.
    pub sample_step: f64,
    /// Grid spacing of the potential surface.
    pub surface_step: f64,
    /// Whether to use alternate screen mode.
    pub alt_screen: bool,
    /// Optional log destination.
    pub log_file: Option<PathBuf>,
    /// Log level.
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: Inputs::default(),
            mass: 1.0,
            fps: 33,
            time_step: 0.01,
            duration: 100.0,
            sample_step: 0.01,
            surface_step: lissajous::SURFACE_STEP,
            alt_screen: true,
            log_file: None,
            log_level: LogLevel::Warn,
        }
    }
}

/// Highest accepted frame rate.
pub const MAX_FPS: u32 = 240;

/// Largest accepted amplitude or angular frequency.
pub const MAX_PARAMETER: f64 = 1e6;

impl Config {
    /// Create config from CLI arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            inputs: Inputs {
                amplitude_x: cli.amplitude_x,
                amplitude_y: cli.amplitude_y,
                omega_x: cli.omega_x,
                omega_y: cli.omega_y,
                phase_sixths: cli.phase,
            },
            mass: cli.mass,
            fps: cli.fps,
            time_step: cli.time_step,
            duration: cli.duration,
            alt_screen: !cli.no_alt_screen,
            log_file: cli.log_file.clone(),
            log_level: cli.log_level(),
            ..Self::default()
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first offending option.
    #[allow(clippy::cast_precision_loss)]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("amplitude A₁", self.inputs.amplitude_x),
            ("amplitude A₂", self.inputs.amplitude_y),
            ("angular frequency ω₁", self.inputs.omega_x),
            ("angular frequency ω₂", self.inputs.omega_y),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
            if value > MAX_PARAMETER {
                return Err(ConfigError::TooLarge { name, value });
            }
        }

        if !self.inputs.phase_sixths.is_finite() {
            return Err(ConfigError::NotFinite {
                name: "phase",
                value: self.inputs.phase_sixths,
            });
        }

        let positive = [
            ("mass", self.mass),
            ("time step", self.time_step),
            ("duration", self.duration),
            ("sample step", self.sample_step),
            ("surface step", self.surface_step),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        if self.duration / self.sample_step > MAX_TRAJECTORY_SAMPLES as f64 {
            return Err(ConfigError::TooManySamples {
                duration: self.duration,
                step: self.sample_step,
            });
        }

        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(ConfigError::FpsOutOfRange(self.fps));
        }

        if let Some(ref path) = self.log_file
            && let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.is_dir()
        {
            return Err(ConfigError::LogDirectoryNotFound(parent.to_path_buf()));
        }

        Ok(())
    }

    /// Kinematic system for the initial inputs.
    pub fn system(&self) -> Lissajous {
        self.inputs.to_system(self.mass)
    }
}

/// Configuration error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Amplitude or frequency below zero.
    #[error("{name} must be non-negative, got {value}")]
    Negative {
        /// Option name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// NaN or infinite input.
    #[error("{name} must be a finite number, got {value}")]
    NotFinite {
        /// Option name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Amplitude or frequency above [`MAX_PARAMETER`].
    #[error("{name} must be at most 1000000, got {value}")]
    TooLarge {
        /// Option name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Trajectory span needs more than `MAX_TRAJECTORY_SAMPLES` points.
    #[error(
        "duration {duration} s at a sample step of {step} s needs more than 1000000 trajectory samples"
    )]
    TooManySamples {
        /// Requested span.
        duration: f64,
        /// Sampling step.
        step: f64,
    },

    /// Zero, negative or non-finite value where a positive one is needed.
    #[error("{name} must be positive, got {value}")]
    NotPositive {
        /// Option name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Frame rate outside `1..=MAX_FPS`.
    #[error("fps must be between 1 and 240, got {0}")]
    FpsOutOfRange(u32),

    /// Log file parent directory does not exist.
    #[error("log directory not found: {0}")]
    LogDirectoryNotFound(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn from_cli_copies_inputs() {
        let cli = Cli::try_parse_from([
            "lissajous-viewer",
            "--amplitude-x",
            "2",
            "--omega-y",
            "3",
            "--phase",
            "1",
            "--no-alt-screen",
            "-v",
        ])
        .unwrap();
        let config = Config::from_cli(&cli);

        assert_eq!(config.inputs.amplitude_x, 2.0);
        assert_eq!(config.inputs.omega_y, 3.0);
        assert_eq!(config.inputs.phase_sixths, 1.0);
        assert!(!config.alt_screen);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.sample_step, 0.01);
    }

    #[test]
    fn negative_amplitude_rejected() {
        let config = Config {
            inputs: Inputs {
                amplitude_y: -0.5,
                ..Inputs::default()
            },
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::Negative {
                name: "amplitude A₂",
                value: -0.5
            }
        );
        assert_eq!(err.to_string(), "amplitude A₂ must be non-negative, got -0.5");
    }

    #[test]
    fn nan_frequency_rejected() {
        let config = Config {
            inputs: Inputs {
                omega_x: f64::NAN,
                ..Inputs::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite { name: "angular frequency ω₁", .. })
        ));
    }

    #[test]
    fn non_positive_timing_rejected() {
        let config = Config {
            time_step: 0.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { name: "time step", .. })
        ));

        let config = Config {
            mass: -1.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { name: "mass", .. })
        ));
    }

    #[test]
    fn oversized_parameters_rejected() {
        let config = Config {
            inputs: Inputs {
                amplitude_x: 1e300,
                ..Inputs::default()
            },
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooLarge {
                name: "amplitude A₁",
                value: 1e300
            })
        );

        let config = Config {
            inputs: Inputs {
                omega_y: MAX_PARAMETER,
                ..Inputs::default()
            },
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn trajectory_sample_budget() {
        let config = Config {
            duration: 1e12,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::TooManySamples {
                duration: 1e12,
                step: 0.01
            }
        );
        assert!(err.to_string().contains("needs more than 1000000 trajectory samples"));

        // 10 000 s at 0.01 s is exactly the budget.
        let config = Config {
            duration: 10_000.0,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn fps_range() {
        for fps in [0, MAX_FPS + 1] {
            let config = Config {
                fps,
                ..Config::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::FpsOutOfRange(fps)));
        }
    }

    #[test]
    fn log_file_in_missing_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            log_file: Some(dir.path().join("missing").join("viewer.log")),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::LogDirectoryNotFound(_))
        ));

        let config = Config {
            log_file: Some(dir.path().join("viewer.log")),
            ..Config::default()
        };
        assert!(config.validate().is_ok());

        let config = Config {
            log_file: Some(PathBuf::from("viewer.log")),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn system_applies_phase_to_vertical_axis() {
        let system = Config::default().system();
        assert_eq!(system.x.phase, 0.0);
        assert!((system.y.phase - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(json["inputs"]["phase_sixths"], 3.0);
        assert_eq!(json["log_level"], "warn");
        assert_eq!(json["fps"], 33);
    }
}
