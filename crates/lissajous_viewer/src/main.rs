#![forbid(unsafe_code)]

//! # Lissajous Viewer
//!
//! Interactive explorer for two perpendicular harmonic oscillations.
//!
//! ## Usage
//!
//! ```bash
//! lissajous-viewer                                  # Default figure
//! lissajous-viewer --omega-x 3 --omega-y 2 --phase 2
//! lissajous-viewer -vv --log-file viewer.log        # With debug log
//! ```

use anyhow::Context;
use lissajous_viewer::{App, Cli, Config, Program, logging};
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let config = Config::from_cli(&cli);
    config.validate().context("invalid configuration")?;

    let logging_enabled = logging::init(&config).context("failed to initialise logging")?;
    if logging_enabled {
        info!(version = env!("CARGO_PKG_VERSION"), "starting lissajous-viewer");
        if let Ok(json) = serde_json::to_string(&config) {
            debug!(config = %json, "resolved configuration");
        }
    }

    let app = Program::new(App::new(&config))
        .with_alt_screen(config.alt_screen)
        .with_fps(config.fps)
        .run()
        .context("viewer terminated with an error")?;

    info!(
        time = app.time(),
        inputs = ?app.inputs(),
        "viewer exited"
    );
    Ok(())
}
