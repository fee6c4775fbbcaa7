#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::float_cmp, clippy::unwrap_used))]

//! # Lissajous Viewer Library
//!
//! Terminal front end for the [`lissajous`] kinematics crate.
//!
//! The binary and the integration tests share everything through this
//! library: the event loop, the app model and the text renderers.
//!
//! ## Public Modules
//!
//! - [`app`] - Parameter inputs, redraw pass and animation state
//! - [`canvas`] - Braille plotting surface
//! - [`heatmap`] - Potential surface as a character ramp
//! - [`table`] - Live table of kinematic quantities
//! - [`program`] - Terminal event loop and the [`Model`] trait
//! - [`simulator`] - Headless driver for tests
//! - [`cli`], [`config`], [`logging`] - Launch options

pub mod app;
pub mod canvas;
pub mod cli;
pub mod config;
pub mod heatmap;
pub mod key;
pub mod logging;
pub mod program;
pub mod simulator;
pub mod table;

pub use app::{App, Field, InputError};
pub use canvas::Canvas;
pub use cli::{Cli, LogLevel};
pub use config::{Config, ConfigError, Inputs};
pub use key::Key;
pub use program::{Cmd, Error, Model, Msg, Program, ProgramOptions, Result};
pub use simulator::ProgramSimulator;
