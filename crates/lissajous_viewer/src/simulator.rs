//! Program simulator for testing models without a real terminal.
//!
//! Messages are queued with [`ProgramSimulator::send`] and processed in order,
//! each followed by a `view()` call whose output is captured. A returned
//! [`Cmd::Quit`] stops further processing, the same as in the live event loop.

use std::collections::VecDeque;

use crate::key::Key;
use crate::program::{Cmd, Model, Msg};

/// Statistics tracked during simulation.
#[derive(Debug, Clone, Default)]
pub struct SimulationStats {
    /// Number of times init() was called.
    pub init_calls: usize,
    /// Number of times update() was called.
    pub update_calls: usize,
    /// Number of times view() was called.
    pub view_calls: usize,
    /// Whether quit was requested.
    pub quit_requested: bool,
}

/// Drives a [`Model`] from a message queue.
///
/// # Example
///
/// ```rust
/// use lissajous_viewer::{App, Config, Key, Msg, ProgramSimulator};
///
/// let mut sim = ProgramSimulator::new(App::new(&Config::default()));
/// sim.send(Msg::Tick);
/// sim.send_key(Key::Char('q'));
/// sim.run_until_empty();
///
/// assert!(sim.is_quit());
/// assert!(sim.model().time() > 0.0);
/// ```
pub struct ProgramSimulator<M: Model> {
    model: M,
    input_queue: VecDeque<Msg>,
    output_views: Vec<String>,
    stats: SimulationStats,
    initialized: bool,
}

impl<M: Model> ProgramSimulator<M> {
    /// Create a new simulator with the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            input_queue: VecDeque::new(),
            output_views: Vec::new(),
            stats: SimulationStats::default(),
            initialized: false,
        }
    }

    /// Initialize the model, calling init() and capturing the first view.
    pub fn init(&mut self) -> Option<Cmd> {
        if self.initialized {
            return None;
        }
        self.initialized = true;
        self.stats.init_calls += 1;

        let cmd = self.model.init();
        if cmd == Some(Cmd::Quit) {
            self.stats.quit_requested = true;
        }

        self.stats.view_calls += 1;
        self.output_views.push(self.model.view());
        cmd
    }

    /// Queue a message for processing.
    pub fn send(&mut self, msg: Msg) {
        self.input_queue.push_back(msg);
    }

    /// Queue a key press.
    pub fn send_key(&mut self, key: Key) {
        self.send(Msg::Key(key));
    }

    /// Queue one key press per character.
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Queue `n` frame ticks.
    pub fn send_ticks(&mut self, n: usize) {
        for _ in 0..n {
            self.send(Msg::Tick);
        }
    }

    /// Process one message from the queue, calling update and view.
    ///
    /// Returns the command returned by update, if any.
    pub fn step(&mut self) -> Option<Cmd> {
        if !self.initialized {
            self.init();
        }

        let msg = self.input_queue.pop_front()?;

        // The live loop turns Ctrl+C into a quit before the model sees it
        if msg == Msg::Key(Key::CtrlC) {
            self.stats.quit_requested = true;
            return Some(Cmd::Quit);
        }

        self.stats.update_calls += 1;
        let cmd = self.model.update(msg);
        if cmd == Some(Cmd::Quit) {
            self.stats.quit_requested = true;
        }

        self.stats.view_calls += 1;
        self.output_views.push(self.model.view());
        cmd
    }

    /// Process pending messages until the queue is empty or quit is requested.
    ///
    /// Returns the number of messages processed.
    pub fn run_until_empty(&mut self) -> usize {
        let mut processed = 0;
        while !self.input_queue.is_empty() && !self.stats.quit_requested {
            self.step();
            processed += 1;
        }
        processed
    }

    /// Get a reference to the current model state.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Consume the simulator and return the final model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Get the simulation statistics.
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Get all captured view outputs.
    pub fn views(&self) -> &[String] {
        &self.output_views
    }

    /// Get the most recent view output.
    pub fn last_view(&self) -> Option<&str> {
        self.output_views.last().map(String::as_str)
    }

    /// Check if quit has been requested.
    pub fn is_quit(&self) -> bool {
        self.stats.quit_requested
    }

    /// Get the number of pending messages.
    pub fn pending_count(&self) -> usize {
        self.input_queue.len()
    }
}
