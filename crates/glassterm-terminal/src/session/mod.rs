//! Session state and the controller that owns it.
//!
//! [`TerminalSession`] is the single sequential actor of the terminal: every
//! keystroke, submit, navigation step and window notification goes through
//! it in order, and each submitted line is fully interpreted and applied
//! before the next event is looked at.

use glassterm_platform::{Clock, RandomSource};
use glassterm_types::color::TextColor;
use glassterm_types::config::TerminalConfig;
use glassterm_types::input::{Direction, InputEvent};
use glassterm_types::window::WindowMode;

use crate::commands::register_builtins;
use crate::history::CommandHistory;
use crate::interpreter::{CommandRegistry, Environment, StateEffect};
use crate::line_buffer::LineBuffer;
use crate::scrollback::Scrollback;


/// Everything the rendering collaborator draws.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub scrollback: Scrollback,
    pub text_color: TextColor,
    pub matrix_mode: bool,
    /// Changed only by window-chrome notifications, never by commands.
    pub window_mode: WindowMode,
}

impl SessionState {
    /// Fresh state: welcome lines, configured color, matrix off.
    pub fn new(config: &TerminalConfig) -> Self {
        let mut scrollback = Scrollback::with_limit(config.max_scrollback);
        scrollback.extend(config.welcome.iter().cloned());
        Self {
            scrollback,
            text_color: config.default_color,
            matrix_mode: false,
            window_mode: WindowMode::Normal,
        }
    }

    /// Apply one effect.
    pub fn apply(&mut self, effect: &StateEffect) {
        match effect {
            StateEffect::SetColor(color) => self.text_color = *color,
            StateEffect::ToggleMatrix => self.matrix_mode = !self.matrix_mode,
            StateEffect::ClearScrollback => self.scrollback.clear(),
            StateEffect::ResetSession(sentinel) => self.scrollback.reset_to(sentinel),
        }
    }
}

/// Receives change notifications from a [`TerminalSession`].
///
/// Every method defaults to doing nothing, so a renderer only implements
/// what it draws.
pub trait SessionListener {
    /// Lines were appended, or the scrollback was cleared or reset.
    fn on_scrollback_changed(&mut self, _scrollback: &Scrollback) {}

    /// The active text color changed.
    fn on_color_changed(&mut self, _color: TextColor) {}

    /// Matrix mode was switched on or off.
    fn on_matrix_mode_changed(&mut self, _enabled: bool) {}

    /// The window chrome reported a new presentation mode.
    fn on_window_mode_changed(&mut self, _mode: WindowMode) {}
}

/// The hosting controller: owns the state, history, input line and
/// collaborators, and notifies listeners after each step.
pub struct TerminalSession {
    registry: CommandRegistry,
    state: SessionState,
    history: CommandHistory,
    input: LineBuffer,
    config: TerminalConfig,
    clock: Box<dyn Clock>,
    rng: Box<dyn RandomSource>,
    listeners: Vec<Box<dyn SessionListener>>,
}

impl TerminalSession {
    /// Create a session with the built-in command set.
    pub fn new(
        config: TerminalConfig,
        clock: Box<dyn Clock>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        log::info!(
            "Terminal session created for {}@{}",
            config.user,
            config.hostname
        );
        Self {
            registry,
            state: SessionState::new(&config),
            history: CommandHistory::with_limit(config.max_history),
            input: LineBuffer::new(),
            config,
            clock,
            rng,
            listeners: Vec::new(),
        }
    }

    /// Register a change listener.
    pub fn subscribe(&mut self, listener: Box<dyn SessionListener>) {
        self.listeners.push(listener);
    }

    /// Route one raw input event.
    pub fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::TextInput(ch) => self.insert_char(*ch),
            InputEvent::Backspace => self.backspace(),
            InputEvent::Submit => self.submit(),
            InputEvent::Navigate(direction) => self.navigate(*direction),
            InputEvent::WindowModeChanged(mode) => self.set_window_mode(*mode),
            InputEvent::Close => self.reset_session(),
        }
    }

    /// Type one character into the input line.
    pub fn insert_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    /// Delete the last character of the input line.
    pub fn backspace(&mut self) {
        self.input.backspace();
    }

    /// Submit whatever is in the input line.
    ///
    /// A blank line is ignored and stays in the buffer.
    pub fn submit(&mut self) {
        if self.input.as_str().trim().is_empty() {
            return;
        }
        let line = self.input.take();
        self.submit_line(&line);
    }

    /// Submit a completed line.
    ///
    /// The trimmed line is pushed to the front of the history, the input
    /// line is cleared, and the interpreter's result is applied before this
    /// returns. Blank lines are a no-op.
    pub fn submit_line(&mut self, text: &str) {
        let line = text.trim();
        if line.is_empty() {
            return;
        }
        self.history.push(line);
        self.input.clear();

        let before_color = self.state.text_color;
        let before_matrix = self.state.matrix_mode;

        let state = std::mem::take(&mut self.state);
        let mut env = Environment {
            clock: self.clock.as_ref(),
            rng: self.rng.as_mut(),
            config: &self.config,
        };
        let (state, _) = self.registry.interpret(line, state, &mut env);
        self.state = state;

        if self.state.text_color != before_color {
            let color = self.state.text_color;
            log::debug!("text color now {color}");
            for l in &mut self.listeners {
                l.on_color_changed(color);
            }
        }
        if self.state.matrix_mode != before_matrix {
            let enabled = self.state.matrix_mode;
            log::debug!("matrix mode {}", if enabled { "on" } else { "off" });
            for l in &mut self.listeners {
                l.on_matrix_mode_changed(enabled);
            }
        }
        self.notify_scrollback();
    }

    /// Step through history. Never runs the interpreter.
    pub fn navigate(&mut self, direction: Direction) {
        self.history.navigate(direction, &mut self.input);
    }

    /// Record a window-mode change reported by the window chrome.
    pub fn set_window_mode(&mut self, mode: WindowMode) {
        if self.state.window_mode == mode {
            return;
        }
        log::info!("Window mode: {} -> {mode}", self.state.window_mode);
        self.state.window_mode = mode;
        for l in &mut self.listeners {
            l.on_window_mode_changed(mode);
        }
    }

    /// Reset the transcript to the configured sentinel line.
    ///
    /// Color, matrix mode, window mode and history are kept.
    pub fn reset_session(&mut self) {
        log::info!("Terminal session reset");
        let effect = StateEffect::ResetSession(self.config.reset_message.clone());
        self.state.apply(&effect);
        self.notify_scrollback();
    }

    fn notify_scrollback(&mut self) {
        let scrollback = &self.state.scrollback;
        for l in &mut self.listeners {
            l.on_scrollback_changed(scrollback);
        }
    }

    /// The visible transcript, oldest first.
    pub fn scrollback(&self) -> &[String] {
        self.state.scrollback.lines()
    }

    /// The active text color.
    pub fn current_color(&self) -> TextColor {
        self.state.text_color
    }

    /// Whether matrix mode is on.
    pub fn matrix_mode(&self) -> bool {
        self.state.matrix_mode
    }

    /// The last window mode reported by the window chrome.
    pub fn window_mode(&self) -> WindowMode {
        self.state.window_mode
    }

    /// The pending input line.
    pub fn input(&self) -> &str {
        self.input.as_str()
    }

    /// Submitted lines and the browsing cursor.
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Snapshot of everything a renderer draws.
    pub fn state(&self) -> &SessionState {
        &self.state
    }
}
