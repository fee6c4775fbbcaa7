//! Program lifecycle and event loop.
//!
//! [`Program`] owns a [`Model`] and the terminal. It turns key presses,
//! resizes and a fixed-rate frame clock into [`Msg`]s, feeds them to
//! [`Model::update`] one at a time, and repaints [`Model::view`] whenever the
//! output changed.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyEventKind},
    execute, queue,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use tracing::{debug, trace};

use crate::key::Key;

/// Errors that can occur while running the viewer.
///
/// Every variant is raised after the terminal may have been modified; the
/// program restores the terminal before returning any of them.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O error during terminal operations.
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),

    /// Failed to enable or disable raw mode.
    ///
    /// Usually means stdin is not an interactive terminal.
    #[error("failed to {action} raw mode: {source}")]
    RawModeFailure {
        /// Whether we were trying to enable or disable raw mode.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to enter or exit the alternate screen.
    #[error("failed to {action} alternate screen: {source}")]
    AltScreenFailure {
        /// Whether we were trying to enter or exit the alt screen.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to poll for terminal events.
    #[error("failed to poll terminal events: {0}")]
    EventPoll(io::Error),

    /// Failed to write the view to the terminal.
    #[error("failed to render view: {0}")]
    Render(io::Error),
}

/// A specialized [`Result`] type for program operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Messages delivered to [`Model::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// A key was pressed.
    Key(Key),
    /// One frame interval elapsed.
    Tick,
    /// The terminal was resized (or its initial size is known).
    Resize {
        /// Columns.
        width: u16,
        /// Rows.
        height: u16,
    },
}

/// Commands a model can hand back to the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Leave the event loop and restore the terminal.
    Quit,
}

/// The Elm-architecture contract between the event loop and the app.
pub trait Model {
    /// Called once before the first frame.
    fn init(&mut self) -> Option<Cmd>;

    /// Processes one message. Must not block.
    fn update(&mut self, msg: Msg) -> Option<Cmd>;

    /// Renders the model; lines are separated by `\n`.
    fn view(&self) -> String;
}

/// Program options.
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Use the alternate screen buffer.
    pub alt_screen: bool,
    /// Frame rate of the tick clock.
    pub fps: u32,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            alt_screen: true,
            fps: 33,
        }
    }
}

impl ProgramOptions {
    /// Duration of one tick.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }
}

/// Runs a [`Model`] against the real terminal.
pub struct Program<M: Model> {
    model: M,
    options: ProgramOptions,
}

impl<M: Model> Program<M> {
    /// Creates a program with default options.
    pub fn new(model: M) -> Self {
        Self {
            model,
            options: ProgramOptions::default(),
        }
    }

    /// Toggles the alternate screen buffer.
    #[must_use]
    pub fn with_alt_screen(mut self, enabled: bool) -> Self {
        self.options.alt_screen = enabled;
        self
    }

    /// Sets the tick rate.
    #[must_use]
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.options.fps = fps.max(1);
        self
    }

    /// Returns the configured options.
    pub fn options(&self) -> &ProgramOptions {
        &self.options
    }

    /// Runs on stdout and returns the final model.
    pub fn run(self) -> Result<M> {
        self.run_with_writer(io::stdout())
    }

    /// Runs the program with a custom writer.
    pub fn run_with_writer<W: Write>(self, mut writer: W) -> Result<M> {
        let options = self.options.clone();

        enable_raw_mode().map_err(|source| Error::RawModeFailure {
            action: "enable",
            source,
        })?;

        if options.alt_screen
            && let Err(source) = execute!(writer, EnterAlternateScreen)
        {
            let _ = disable_raw_mode();
            return Err(Error::AltScreenFailure {
                action: "enter",
                source,
            });
        }

        let _ = execute!(writer, Hide);
        debug!(fps = options.fps, alt_screen = options.alt_screen, "terminal ready");

        let result = self.event_loop(&mut writer);

        // Cleanup terminal
        let _ = execute!(writer, Show);
        if options.alt_screen {
            let _ = execute!(writer, LeaveAlternateScreen);
        }
        let _ = disable_raw_mode();
        debug!(ok = result.is_ok(), "terminal restored");

        result
    }

    fn event_loop<W: Write>(mut self, writer: &mut W) -> Result<M> {
        if let Ok((width, height)) = terminal::size() {
            self.model.update(Msg::Resize { width, height });
        }

        if let Some(Cmd::Quit) = self.model.init() {
            return Ok(self.model);
        }

        let mut last_view = String::new();
        self.render(writer, &mut last_view)?;

        let frame_duration = self.options.frame_duration();
        let mut next_tick = Instant::now() + frame_duration;

        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());

            if event::poll(timeout).map_err(Error::EventPoll)? {
                let msg = match event::read().map_err(Error::EventPoll)? {
                    // Only handle key press events, not release
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        Some(Msg::Key(Key::from_crossterm(key.code, key.modifiers)))
                    }
                    Event::Resize(width, height) => {
                        // Force a full repaint on the new geometry.
                        last_view.clear();
                        Some(Msg::Resize { width, height })
                    }
                    _ => None,
                };

                if let Some(msg) = msg {
                    trace!(?msg, "event");
                    if msg == Msg::Key(Key::CtrlC) {
                        debug!("interrupted");
                        return Ok(self.model);
                    }
                    if let Some(Cmd::Quit) = self.model.update(msg) {
                        return Ok(self.model);
                    }
                }
            }

            let now = Instant::now();
            if now >= next_tick {
                next_tick += frame_duration;
                // Skip ticks we could not keep up with instead of bursting.
                if next_tick < now {
                    next_tick = now + frame_duration;
                }
                if let Some(Cmd::Quit) = self.model.update(Msg::Tick) {
                    return Ok(self.model);
                }
            }

            self.render(writer, &mut last_view)?;
        }
    }

    fn render<W: Write>(&self, writer: &mut W, last_view: &mut String) -> Result<()> {
        let view = self.model.view();

        // Skip if view hasn't changed
        if view == *last_view {
            return Ok(());
        }

        // Raw mode does not translate '\n', so position every line.
        queue!(writer, MoveTo(0, 0), Clear(ClearType::All)).map_err(Error::Render)?;
        for (row, line) in view.lines().enumerate() {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(writer, MoveTo(0, row)).map_err(Error::Render)?;
            writer.write_all(line.as_bytes()).map_err(Error::Render)?;
        }
        writer.flush().map_err(Error::Render)?;

        *last_view = view;
        Ok(())
    }
}
