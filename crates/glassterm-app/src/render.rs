//! Prints the transcript and state changes to a text stream.

use std::io::Write;

use glassterm_terminal::{Scrollback, SessionListener, SessionState};
use glassterm_types::color::TextColor;
use glassterm_types::window::WindowMode;

/// Marker written when the transcript is cleared or reset.
const CLEAR_MARKER: &str = "\x0c";

/// A [`SessionListener`] that writes newly appended lines to `out`.
pub struct StdoutRenderer<W: Write> {
    out: W,
    ansi: bool,
    color: TextColor,
    appended: u64,
    clears: u64,
}

impl<W: Write> StdoutRenderer<W> {
    /// Write to `out`, with ANSI color codes when `ansi` is set.
    pub fn new(out: W, ansi: bool) -> Self {
        Self {
            out,
            ansi,
            color: TextColor::default(),
            appended: 0,
            clears: 0,
        }
    }

    /// Print the state as it is before any input.
    pub fn draw_initial(&mut self, state: &SessionState) -> std::io::Result<()> {
        self.color = state.text_color;
        self.appended = state.scrollback.total_appended();
        self.clears = state.scrollback.clear_count();
        for line in state.scrollback.lines() {
            self.write_line(line)?;
        }
        self.out.flush()
    }

    fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        if self.ansi {
            let (r, g, b) = self.color.rgb();
            writeln!(self.out, "\x1b[38;2;{r};{g};{b}m{line}\x1b[0m")
        } else {
            writeln!(self.out, "{line}")
        }
    }

    fn draw(&mut self, scrollback: &Scrollback) -> std::io::Result<()> {
        let lines = scrollback.lines();
        let start = if scrollback.clear_count() != self.clears {
            write!(self.out, "{CLEAR_MARKER}")?;
            0
        } else {
            let new = (scrollback.total_appended() - self.appended) as usize;
            lines.len().saturating_sub(new)
        };
        for line in &lines[start..] {
            self.write_line(line)?;
        }
        self.appended = scrollback.total_appended();
        self.clears = scrollback.clear_count();
        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SessionListener for StdoutRenderer<W> {
    fn on_scrollback_changed(&mut self, scrollback: &Scrollback) {
        if let Err(e) = self.draw(scrollback) {
            log::error!("Failed to write scrollback: {e}");
        }
    }

    fn on_color_changed(&mut self, color: TextColor) {
        self.color = color;
    }

    fn on_matrix_mode_changed(&mut self, enabled: bool) {
        let state = if enabled { "on" } else { "off" };
        if let Err(e) = writeln!(self.out, "[matrix mode {state}]") {
            log::error!("Failed to write status: {e}");
        }
    }

    fn on_window_mode_changed(&mut self, mode: WindowMode) {
        if let Err(e) = writeln!(self.out, "[window {mode}]") {
            log::error!("Failed to write status: {e}");
        }
    }
}
