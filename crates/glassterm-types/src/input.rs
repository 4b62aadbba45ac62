//! Host-agnostic input event types.
//!
//! Every hosting view maps its native keyboard and window-chrome input to
//! these enums. The terminal core never sees raw platform input.

use crate::window::WindowMode;

/// Direction of a history navigation request (arrow up / arrow down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Step towards older entries.
    Previous,
    /// Step towards newer entries, ending at the live line.
    Next,
}

/// A host-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Character typed into the input line.
    TextInput(char),
    /// Backspace / delete-left.
    Backspace,
    /// Enter: submit the current input line.
    Submit,
    /// Arrow-key history navigation.
    Navigate(Direction),
    /// The window chrome changed the presentation mode out of band.
    WindowModeChanged(WindowMode),
    /// The close affordance was used: reset the session transcript.
    Close,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_carries_char() {
        let e = InputEvent::TextInput('x');
        assert_eq!(e, InputEvent::TextInput('x'));
        assert_ne!(e, InputEvent::TextInput('y'));
    }

    #[test]
    fn navigate_directions_differ() {
        assert_ne!(
            InputEvent::Navigate(Direction::Previous),
            InputEvent::Navigate(Direction::Next)
        );
    }

    #[test]
    fn window_mode_event() {
        let e = InputEvent::WindowModeChanged(WindowMode::Fullscreen);
        match e {
            InputEvent::WindowModeChanged(WindowMode::Fullscreen) => {},
            _ => panic!("wrong variant"),
        }
    }
}
