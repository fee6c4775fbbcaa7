//! The viewer model: parameter inputs, static plots and the live animation.
//!
//! Every accepted parameter change runs one redraw pass ([`App::rebuild`]):
//! the trajectory and potential surface are re-sampled and the animation
//! restarts from `t = 0`. Every [`Msg::Tick`] advances the animation by one
//! time step and refreshes the table from [`Lissajous::frame`].

use std::collections::VecDeque;
use std::fmt;

use lissajous::{Bounds, Frame, Lissajous, Point, PotentialSurface};
use tracing::{debug, info, warn};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::canvas::Canvas;
use crate::config::{Config, Inputs, MAX_PARAMETER};
use crate::heatmap;
use crate::key::Key;
use crate::program::{Cmd, Model, Msg};
use crate::table;

/// Oldest trace points are dropped past this length.
pub const MAX_TRACE: usize = 20_000;

/// Width of the right-hand column (surface, table, inputs).
const SIDE_WIDTH: usize = 26;

/// Smallest terminal the layout fits in.
pub const MIN_WIDTH: u16 = 60;
/// Smallest terminal the layout fits in.
pub const MIN_HEIGHT: u16 = 20;

const POINT_MARKER: char = '●';
const FOCUS_MARKER: char = '▸';

const HELP: &str = "Tab/↑↓ field  ←→/+ adjust  Enter edit  Space pause  r restart  q quit";

/// One of the five parameter inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// A₁
    AmplitudeX,
    /// A₂
    AmplitudeY,
    /// ω₁
    OmegaX,
    /// ω₂
    OmegaY,
    /// Δφ in multiples of π/6
    Phase,
}

impl Field {
    /// Display and focus order.
    pub const ALL: [Self; 5] = [
        Self::AmplitudeX,
        Self::AmplitudeY,
        Self::OmegaX,
        Self::OmegaY,
        Self::Phase,
    ];

    /// Short label shown next to the input.
    pub const fn label(self) -> &'static str {
        match self {
            Self::AmplitudeX => "A₁",
            Self::AmplitudeY => "A₂",
            Self::OmegaX => "ω₁",
            Self::OmegaY => "ω₂",
            Self::Phase => "Δφ (×π/6)",
        }
    }

    /// Amplitudes and frequencies cannot go below zero.
    pub const fn allows_negative(self) -> bool {
        matches!(self, Self::Phase)
    }

    /// Increment used by the arrow keys.
    pub const fn nudge_step(self) -> f64 {
        match self {
            Self::Phase => 1.0,
            _ => 0.1,
        }
    }

    fn get(self, inputs: &Inputs) -> f64 {
        match self {
            Self::AmplitudeX => inputs.amplitude_x,
            Self::AmplitudeY => inputs.amplitude_y,
            Self::OmegaX => inputs.omega_x,
            Self::OmegaY => inputs.omega_y,
            Self::Phase => inputs.phase_sixths,
        }
    }

    fn set(self, inputs: &mut Inputs, value: f64) {
        let slot = match self {
            Self::AmplitudeX => &mut inputs.amplitude_x,
            Self::AmplitudeY => &mut inputs.amplitude_y,
            Self::OmegaX => &mut inputs.omega_x,
            Self::OmegaY => &mut inputs.omega_y,
            Self::Phase => &mut inputs.phase_sixths,
        };
        *slot = value;
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Why an entered value was not applied.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    /// The text is not a number.
    #[error("{field}: '{text}' is not a number")]
    NotANumber {
        /// Target input.
        field: Field,
        /// Entered text.
        text: String,
    },

    /// NaN or infinity.
    #[error("{field}: value must be finite")]
    NotFinite {
        /// Target input.
        field: Field,
    },

    /// Negative amplitude or frequency.
    #[error("{field}: must be non-negative, got {value}")]
    Negative {
        /// Target input.
        field: Field,
        /// Rejected value.
        value: f64,
    },

    /// Amplitude or frequency above [`MAX_PARAMETER`].
    #[error("{field}: must be at most 1000000, got {value}")]
    TooLarge {
        /// Target input.
        field: Field,
        /// Rejected value.
        value: f64,
    },
}

/// Numeric settings that stay fixed for the session.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Settings {
    mass: f64,
    time_step: f64,
    duration: f64,
    sample_step: f64,
    surface_step: f64,
}

/// The viewer state.
#[derive(Debug, Clone)]
pub struct App {
    settings: Settings,
    inputs: Inputs,
    focus: usize,
    editing: Option<String>,
    system: Lissajous,
    trajectory: Vec<Point>,
    trajectory_bounds: Bounds,
    surface: PotentialSurface,
    step: u64,
    frame: Frame,
    trace: VecDeque<Point>,
    paused: bool,
    status: Option<String>,
    width: u16,
    height: u16,
}

impl App {
    /// Creates the app and runs the first redraw pass.
    pub fn new(config: &Config) -> Self {
        let system = config.system();
        let mut app = Self {
            settings: Settings {
                mass: config.mass,
                time_step: config.time_step,
                duration: config.duration,
                sample_step: config.sample_step,
                surface_step: config.surface_step,
            },
            inputs: config.inputs,
            focus: 0,
            editing: None,
            system,
            trajectory: Vec::new(),
            trajectory_bounds: Bounds::symmetric(1.0),
            surface: PotentialSurface::sample(&system, config.surface_step),
            step: 0,
            frame: system.frame(0.0),
            trace: VecDeque::new(),
            paused: false,
            status: None,
            width: 80,
            height: 24,
        };
        app.rebuild();
        app
    }

    /// Current parameter inputs.
    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    /// Kinematic system built from the inputs.
    pub fn system(&self) -> &Lissajous {
        &self.system
    }

    /// Quantities at the current animation instant.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Current animation time.
    pub fn time(&self) -> f64 {
        self.frame.time
    }

    /// Sampled static trajectory.
    pub fn trajectory(&self) -> &[Point] {
        &self.trajectory
    }

    /// Sampled potential surface.
    pub fn surface(&self) -> &PotentialSurface {
        &self.surface
    }

    /// Points visited by the animation so far.
    pub fn trace(&self) -> impl ExactSizeIterator<Item = &Point> {
        self.trace.iter()
    }

    /// Focused input.
    pub fn focused(&self) -> Field {
        Field::ALL[self.focus]
    }

    /// Text being typed into the focused input, if any.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Whether the animation is paused.
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Last status message.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Re-samples the static plots and restarts the animation.
    pub fn rebuild(&mut self) {
        self.system = self.inputs.to_system(self.settings.mass);
        self.trajectory = self
            .system
            .trajectory(self.settings.duration, self.settings.sample_step);
        self.trajectory_bounds = Bounds::of(self.trajectory.iter().copied())
            .unwrap_or_else(|| Bounds::symmetric(self.system.max_amplitude().max(1.0)));
        self.surface = PotentialSurface::sample(&self.system, self.settings.surface_step);
        debug!(
            samples = self.trajectory.len(),
            surface = self.surface.size(),
            "redraw pass"
        );
        self.restart();
    }

    /// Clears the trace and goes back to `t = 0`.
    pub fn restart(&mut self) {
        self.step = 0;
        self.frame = self.system.frame(0.0);
        self.trace.clear();
        self.trace.push_back(self.frame.position);
    }

    /// Advances the animation by one time step unless paused.
    #[allow(clippy::cast_precision_loss)]
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        self.step += 1;
        let time = self.step as f64 * self.settings.time_step;
        self.frame = self.system.frame(time);
        if self.trace.len() >= MAX_TRACE {
            self.trace.pop_front();
        }
        self.trace.push_back(self.frame.position);
    }

    /// Validates and applies a new value for `field`.
    ///
    /// # Errors
    ///
    /// Returns the reason when the value is rejected; the previous value is
    /// kept in that case.
    pub fn set_input(&mut self, field: Field, value: f64) -> Result<(), InputError> {
        if !value.is_finite() {
            return Err(InputError::NotFinite { field });
        }
        if !field.allows_negative() {
            if value < 0.0 {
                return Err(InputError::Negative { field, value });
            }
            if value > MAX_PARAMETER {
                return Err(InputError::TooLarge { field, value });
            }
        }

        field.set(&mut self.inputs, value);
        info!(field = field.label(), value, "parameter updated");
        self.rebuild();
        Ok(())
    }

    fn commit_edit(&mut self) {
        let Some(text) = self.editing.take() else {
            return;
        };
        let field = self.focused();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }

        let result = trimmed
            .parse::<f64>()
            .map_err(|_| InputError::NotANumber {
                field,
                text: trimmed.to_string(),
            })
            .and_then(|value| self.set_input(field, value));

        self.status = Some(match result {
            Ok(()) => format!("{field} = {}", Field::get(field, &self.inputs)),
            Err(err) => {
                warn!(%err, "input rejected");
                err.to_string()
            }
        });
    }

    fn nudge(&mut self, direction: f64) {
        let field = self.focused();
        let current = field.get(&self.inputs);
        let mut value = current + direction * field.nudge_step();
        // Keep decimal steps tidy (0.1 + 0.2 style drift)
        value = round_display(value);
        if !field.allows_negative() {
            value = value.max(0.0);
        }
        if value == current {
            return;
        }
        match self.set_input(field, value) {
            Ok(()) => self.status = Some(format!("{field} = {value}")),
            Err(err) => self.status = Some(err.to_string()),
        }
    }

    fn move_focus(&mut self, forward: bool) {
        self.commit_edit();
        let n = Field::ALL.len();
        self.focus = if forward {
            (self.focus + 1) % n
        } else {
            (self.focus + n - 1) % n
        };
    }

    fn handle_key(&mut self, key: Key) -> Option<Cmd> {
        if self.editing.is_some() {
            match key {
                Key::Char(c) if is_number_char(c) => {
                    if let Some(buffer) = self.editing.as_mut() {
                        buffer.push(c);
                    }
                }
                Key::Backspace => {
                    if let Some(buffer) = self.editing.as_mut() {
                        buffer.pop();
                    }
                }
                Key::Enter => self.commit_edit(),
                Key::Esc => {
                    self.editing = None;
                    self.status = Some("edit cancelled".to_string());
                }
                Key::Tab | Key::Down => self.move_focus(true),
                Key::BackTab | Key::Up => self.move_focus(false),
                _ => {}
            }
            return None;
        }

        match key {
            Key::Char('q') | Key::Esc => return Some(Cmd::Quit),
            Key::Char(' ') => {
                self.paused = !self.paused;
                self.status = Some(if self.paused { "paused" } else { "running" }.to_string());
            }
            Key::Char('r') => {
                self.restart();
                self.status = Some("animation restarted".to_string());
            }
            Key::Char('+') | Key::Right => self.nudge(1.0),
            Key::Char(c) if is_number_char(c) => self.editing = Some(c.to_string()),
            Key::Enter => {
                self.editing = Some(self.focused().get(&self.inputs).to_string());
            }
            Key::Backspace => self.editing = Some(String::new()),
            Key::Tab | Key::Down => self.move_focus(true),
            Key::BackTab | Key::Up => self.move_focus(false),
            Key::Left => self.nudge(-1.0),
            _ => {}
        }
        None
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    fn plot_bounds(&self, cols: usize, rows: usize) -> Bounds {
        let b = self.trajectory_bounds;
        let margin = 0.05 * b.width().max(b.height());
        b.padded(margin).equalized(Canvas::dot_aspect(cols, rows))
    }

    fn trajectory_panel(&self, cols: usize, rows: usize) -> Vec<String> {
        let mut canvas = Canvas::new(cols, rows, self.plot_bounds(cols, rows));
        canvas.plot_curve(self.trajectory.iter().copied());
        canvas.mark(self.frame.position, POINT_MARKER);
        canvas.render()
    }

    fn animation_panel(&self, cols: usize, rows: usize) -> Vec<String> {
        let mut canvas = Canvas::new(cols, rows, self.plot_bounds(cols, rows));
        canvas.plot_curve(self.trace.iter().copied());
        canvas.mark(self.frame.position, POINT_MARKER);
        canvas.render()
    }

    fn input_lines(&self) -> Vec<String> {
        Field::ALL
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let focused = i == self.focus;
                let marker = if focused { FOCUS_MARKER } else { ' ' };
                let value = match (&self.editing, focused) {
                    (Some(buffer), true) => format!("[{buffer}_]"),
                    _ => round_display(field.get(&self.inputs)).to_string(),
                };
                format!("{marker} {:<10} {value}", field.label())
            })
            .collect()
    }

    fn side_column(&self, height: usize) -> Vec<String> {
        let table = table::render(&self.frame);
        let inputs = self.input_lines();
        // headers: potential, table, inputs
        let fixed = table.len() + inputs.len() + 3;
        let surface_rows = height.saturating_sub(fixed);

        let mut lines = Vec::with_capacity(height);
        lines.push("Potential".to_string());
        lines.extend(heatmap::render(&self.surface, SIDE_WIDTH, surface_rows));
        while lines.len() < surface_rows + 1 {
            lines.push(String::new());
        }
        lines.push("Kinematics".to_string());
        lines.extend(table);
        lines.push("Parameters".to_string());
        lines.extend(inputs);
        lines
    }

    fn main_column(&self, cols: usize, height: usize) -> Vec<String> {
        let top = height / 2;
        let bottom = height - top;
        let mut lines = Vec::with_capacity(height);
        lines.push("Trajectory".to_string());
        lines.extend(self.trajectory_panel(cols, top.saturating_sub(1)));
        lines.push("Animation".to_string());
        lines.extend(self.animation_panel(cols, bottom.saturating_sub(1)));
        lines
    }
}

fn round_display(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// Cuts `line` to at most `width` terminal cells.
fn clip(line: &str, width: usize) -> String {
    let mut used = 0;
    line.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect()
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

/// Places `right` next to `left`, padding `left` lines to `left_width` cells.
fn side_by_side(left: &[String], left_width: usize, right: &[String]) -> Vec<String> {
    let rows = left.len().max(right.len());
    (0..rows)
        .map(|i| {
            let l = left.get(i).map_or("", String::as_str);
            let r = right.get(i).map_or("", String::as_str);
            let pad = left_width.saturating_sub(l.width());
            format!("{l}{} │ {r}", " ".repeat(pad))
        })
        .collect()
}

impl Model for App {
    fn init(&mut self) -> Option<Cmd> {
        info!(
            amplitude_x = self.inputs.amplitude_x,
            amplitude_y = self.inputs.amplitude_y,
            omega_x = self.inputs.omega_x,
            omega_y = self.inputs.omega_y,
            phase_sixths = self.inputs.phase_sixths,
            "viewer started"
        );
        None
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        match msg {
            Msg::Key(key) => self.handle_key(key),
            Msg::Tick => {
                self.tick();
                None
            }
            Msg::Resize { width, height } => {
                debug!(width, height, "resize");
                self.width = width;
                self.height = height;
                None
            }
        }
    }

    fn view(&self) -> String {
        if self.width < MIN_WIDTH || self.height < MIN_HEIGHT {
            return format!(
                "Terminal too small: {}×{} (need {MIN_WIDTH}×{MIN_HEIGHT})\nq to quit",
                self.width, self.height
            );
        }

        let width = usize::from(self.width);
        let height = usize::from(self.height);
        // title + footer
        let body = height - 2;
        let main_width = width - SIDE_WIDTH - 3;

        let state = if self.paused { "paused" } else { "running" };
        let mut lines = Vec::with_capacity(height);
        lines.push(format!(
            "Lissajous explorer   t = {:.2} s   {state}",
            self.frame.time
        ));
        lines.extend(side_by_side(
            &self.main_column(main_width, body),
            main_width,
            &self.side_column(body),
        ));
        lines.truncate(height - 1);
        lines.push(self.status.clone().unwrap_or_else(|| HELP.to_string()));
        lines
            .iter()
            .map(|line| clip(line, width))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&Config::default())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.update(Msg::Key(Key::Char(c)));
        }
    }

    #[test]
    fn starts_at_time_zero_with_one_trace_point() {
        let app = app();
        assert_eq!(app.time(), 0.0);
        assert_eq!(app.trace().len(), 1);
        assert_eq!(app.trajectory().len(), 10_000);
        assert_eq!(app.focused(), Field::AmplitudeX);
    }

    #[test]
    fn tick_advances_and_extends_trace() {
        let mut app = app();
        for _ in 0..10 {
            app.update(Msg::Tick);
        }
        assert!((app.time() - 0.1).abs() < 1e-12);
        assert_eq!(app.trace().len(), 11);
        assert_eq!(*app.frame(), app.system().frame(app.time()));
    }

    #[test]
    fn pause_stops_time() {
        let mut app = app();
        app.update(Msg::Key(Key::Char(' ')));
        app.update(Msg::Tick);
        assert!(app.paused());
        assert_eq!(app.time(), 0.0);
        assert_eq!(app.status(), Some("paused"));
    }

    #[test]
    fn restart_resets_animation() {
        let mut app = app();
        app.update(Msg::Tick);
        app.update(Msg::Tick);
        app.update(Msg::Key(Key::Char('r')));
        assert_eq!(app.time(), 0.0);
        assert_eq!(app.trace().len(), 1);
    }

    #[test]
    fn typed_value_is_committed_on_enter() {
        let mut app = app();
        app.update(Msg::Tick);
        type_text(&mut app, "2.5");
        assert_eq!(app.editing(), Some("2.5"));
        app.update(Msg::Key(Key::Enter));

        assert_eq!(app.inputs().amplitude_x, 2.5);
        assert_eq!(app.system().x.amplitude, 2.5);
        assert_eq!(app.editing(), None);
        // Redraw pass restarts the animation
        assert_eq!(app.time(), 0.0);
        assert_eq!(app.status(), Some("A₁ = 2.5"));
    }

    #[test]
    fn invalid_text_keeps_previous_value() {
        let mut app = app();
        type_text(&mut app, "1.2.3");
        app.update(Msg::Key(Key::Enter));
        assert_eq!(app.inputs().amplitude_x, 1.0);
        assert_eq!(app.status(), Some("A₁: '1.2.3' is not a number"));
    }

    #[test]
    fn negative_frequency_rejected_but_negative_phase_accepted() {
        let mut app = app();
        app.update(Msg::Key(Key::Tab));
        app.update(Msg::Key(Key::Tab));
        assert_eq!(app.focused(), Field::OmegaX);
        type_text(&mut app, "-1");
        app.update(Msg::Key(Key::Enter));
        assert_eq!(app.inputs().omega_x, 1.0);
        assert_eq!(
            app.status(),
            Some("ω₁: must be non-negative, got -1")
        );

        app.update(Msg::Key(Key::BackTab));
        app.update(Msg::Key(Key::BackTab));
        app.update(Msg::Key(Key::BackTab));
        assert_eq!(app.focused(), Field::Phase);
        type_text(&mut app, "-2");
        app.update(Msg::Key(Key::Enter));
        assert_eq!(app.inputs().phase_sixths, -2.0);
    }

    #[test]
    fn escape_cancels_edit_then_quits() {
        let mut app = app();
        type_text(&mut app, "9");
        assert_eq!(app.update(Msg::Key(Key::Esc)), None);
        assert_eq!(app.inputs().amplitude_x, 1.0);
        assert_eq!(app.update(Msg::Key(Key::Esc)), Some(Cmd::Quit));
        assert_eq!(app.update(Msg::Key(Key::Char('q'))), Some(Cmd::Quit));
    }

    #[test]
    fn tab_commits_pending_edit() {
        let mut app = app();
        type_text(&mut app, "3");
        app.update(Msg::Key(Key::Tab));
        assert_eq!(app.inputs().amplitude_x, 3.0);
        assert_eq!(app.focused(), Field::AmplitudeY);
    }

    #[test]
    fn arrows_nudge_and_clamp() {
        let mut app = app();
        app.update(Msg::Key(Key::Right));
        assert_eq!(app.inputs().amplitude_x, 1.1);
        app.update(Msg::Key(Key::Char('+')));
        assert_eq!(app.inputs().amplitude_x, 1.2);
        assert_eq!(app.editing(), None);
        for _ in 0..20 {
            app.update(Msg::Key(Key::Left));
        }
        assert_eq!(app.inputs().amplitude_x, 0.0);

        for _ in 0..4 {
            app.update(Msg::Key(Key::Down));
        }
        assert_eq!(app.focused(), Field::Phase);
        app.update(Msg::Key(Key::Left));
        assert_eq!(app.inputs().phase_sixths, 2.0);
    }

    #[test]
    fn set_input_rejects_non_finite() {
        let mut app = app();
        assert_eq!(
            app.set_input(Field::OmegaY, f64::INFINITY),
            Err(InputError::NotFinite {
                field: Field::OmegaY
            })
        );
        assert_eq!(app.inputs().omega_y, 1.0);
    }

    #[test]
    fn oversized_amplitude_rejected() {
        let mut app = app();
        assert_eq!(
            app.set_input(Field::AmplitudeX, 1e300),
            Err(InputError::TooLarge {
                field: Field::AmplitudeX,
                value: 1e300
            })
        );
        assert_eq!(app.inputs().amplitude_x, 1.0);
        assert_eq!(app.surface().size(), 31);
    }

    #[test]
    fn large_amplitude_keeps_surface_bounded() {
        let mut app = app();
        type_text(&mut app, "1000");
        app.update(Msg::Key(Key::Enter));
        assert_eq!(app.inputs().amplitude_x, 1000.0);
        assert_eq!(app.surface().size(), lissajous::MAX_SURFACE_SIZE);
        app.update(Msg::Resize {
            width: 100,
            height: 30,
        });
        assert!(app.view().contains("Potential"));
    }

    #[test]
    fn trace_is_capped() {
        let mut app = app();
        for _ in 0..MAX_TRACE + 5 {
            app.tick();
        }
        assert_eq!(app.trace().len(), MAX_TRACE);
    }

    #[test]
    fn view_fills_terminal() {
        let mut app = app();
        app.update(Msg::Resize {
            width: 100,
            height: 30,
        });
        let view = app.view();
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines.len(), 30);
        assert!(lines[0].starts_with("Lissajous explorer"));
        assert!(view.contains("Trajectory"));
        assert!(view.contains("Animation"));
        assert!(view.contains("Potential"));
        assert!(view.contains("Kinematics"));
        assert!(view.contains("▸ A₁"));
        assert!(view.contains(POINT_MARKER));
        assert_eq!(lines[29], HELP);
        for line in &lines {
            assert!(line.width() <= 100, "{line:?} is {} wide", line.width());
        }
    }

    #[test]
    fn view_shows_edit_buffer() {
        let mut app = app();
        app.update(Msg::Resize {
            width: 100,
            height: 30,
        });
        type_text(&mut app, "4");
        assert!(app.view().contains("[4_]"));
    }

    #[test]
    fn small_terminal_message() {
        let mut app = app();
        app.update(Msg::Resize {
            width: 40,
            height: 10,
        });
        assert!(app.view().starts_with("Terminal too small"));
    }
}
