//! Mapping of stdin lines onto session input.

use glassterm_types::input::{Direction, InputEvent};
use glassterm_types::window::WindowMode;

/// What one line of stdin asks the host to do.
#[derive(Debug, Clone, PartialEq)]
pub enum HostLine<'a> {
    /// Submit this text as a command line.
    Submit(&'a str),
    /// Deliver an input event to the session.
    Event(InputEvent),
    /// Leave the loop.
    Quit,
    /// A `:` control the host does not know.
    Unknown(&'a str),
}

/// Classify one stdin line. Controls are recognized after trimming; plain
/// lines are returned untouched.
pub fn parse_line(line: &str) -> HostLine<'_> {
    let Some(control) = line.trim().strip_prefix(':') else {
        return HostLine::Submit(line);
    };
    match control {
        "prev" | "up" => HostLine::Event(InputEvent::Navigate(Direction::Previous)),
        "next" | "down" => HostLine::Event(InputEvent::Navigate(Direction::Next)),
        "minimize" => HostLine::Event(InputEvent::WindowModeChanged(WindowMode::Minimized)),
        "fullscreen" => HostLine::Event(InputEvent::WindowModeChanged(WindowMode::Fullscreen)),
        "restore" => HostLine::Event(InputEvent::WindowModeChanged(WindowMode::Normal)),
        "close" => HostLine::Event(InputEvent::Close),
        "quit" | "q" => HostLine::Quit,
        other => HostLine::Unknown(other),
    }
}
