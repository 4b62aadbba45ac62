//! Window presentation modes owned by the window-chrome collaborator.

use std::fmt;

/// How the hosting window is currently presented.
///
/// The interpreter never changes this; only the window chrome does, and
/// the session merely records the notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WindowMode {
    #[default]
    Normal,
    Minimized,
    Fullscreen,
}

impl fmt::Display for WindowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Minimized => write!(f, "minimized"),
            Self::Fullscreen => write!(f, "fullscreen"),
        }
    }
}
