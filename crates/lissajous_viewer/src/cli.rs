//! Command-line interface for `lissajous-viewer`.
//!
//! Every option can also be given through an environment variable, which is
//! handy for launching the viewer from a desktop shortcut.
//!
//! # Examples
//!
//! ```bash
//! # Default circle-like figure (equal frequencies, quarter-period offset)
//! lissajous-viewer
//!
//! # 3:2 figure with a π/3 phase offset
//! lissajous-viewer --omega-x 3 --omega-y 2 --phase 2
//!
//! # Keep a debug log while exploring
//! lissajous-viewer -vv --log-file viewer.log
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Perpendicular oscillation explorer.
///
/// Plots the Lissajous trajectory of two perpendicular harmonic
/// oscillations, the potential-energy surface, and a live animation with a
/// table of the current kinematic quantities.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "lissajous-viewer",
    author,
    version,
    about = "Lissajous explorer: trajectory, potential surface and live kinematics",
    long_about = None
)]
pub struct Cli {
    /// Amplitude of the horizontal oscillation (A₁)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true, env = "LISSAJOUS_AMPLITUDE_X")]
    pub amplitude_x: f64,

    /// Amplitude of the vertical oscillation (A₂)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true, env = "LISSAJOUS_AMPLITUDE_Y")]
    pub amplitude_y: f64,

    /// Angular frequency of the horizontal oscillation (ω₁, rad/s)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true, env = "LISSAJOUS_OMEGA_X")]
    pub omega_x: f64,

    /// Angular frequency of the vertical oscillation (ω₂, rad/s)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true, env = "LISSAJOUS_OMEGA_Y")]
    pub omega_y: f64,

    /// Phase offset of the vertical oscillation, in multiples of π/6
    #[arg(long, default_value_t = 3.0, allow_negative_numbers = true, env = "LISSAJOUS_PHASE")]
    pub phase: f64,

    /// Mass of the moving point (kg)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true, env = "LISSAJOUS_MASS")]
    pub mass: f64,

    /// Animation frame rate
    #[arg(long, default_value_t = 33, env = "LISSAJOUS_FPS")]
    pub fps: u32,

    /// Simulated time advanced per animation frame (s)
    #[arg(long, default_value_t = 0.01, allow_negative_numbers = true, env = "LISSAJOUS_TIME_STEP")]
    pub time_step: f64,

    /// Time span of the static trajectory plot (s)
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true, env = "LISSAJOUS_DURATION")]
    pub duration: f64,

    /// Disable alternate screen mode
    #[arg(long, env = "LISSAJOUS_NO_ALT_SCREEN")]
    pub no_alt_screen: bool,

    /// Write logs to this file (the terminal is owned by the viewer)
    #[arg(long, env = "LISSAJOUS_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Get log level based on verbosity.
    #[must_use]
    pub const fn log_level(&self) -> LogLevel {
        LogLevel::from_verbosity(self.verbose)
    }
}

/// Log level for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only show warnings and errors
    Warn,
    /// Show info messages
    Info,
    /// Show debug messages
    Debug,
    /// Show all messages including trace
    Trace,
}

impl LogLevel {
    /// Maps a `-v` count to a level.
    #[must_use]
    pub const fn from_verbosity(verbose: u8) -> Self {
        match verbose {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`.
    #[must_use]
    pub const fn as_filter(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}
