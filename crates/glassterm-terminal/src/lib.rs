//! Command interpreter and session state for glassterm.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! [`Command`] trait and are registered by exact name or as ordered prefix
//! rules. [`TerminalSession`] owns the session state, command history and
//! input line, and feeds submitted lines through the registry one at a time.

pub mod calc;
pub mod commands;
pub mod history;
mod interpreter;
pub mod line_buffer;
pub mod scrollback;
mod session;

/// Register the built-in command set into a registry.
pub use commands::register_builtins;
/// Command history with a navigation cursor.
pub use history::CommandHistory;
/// A single executable command trait.
pub use interpreter::Command;
/// Failures a handler may report.
pub use interpreter::CommandError;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Output text and effects produced by a command.
pub use interpreter::CommandResult;
/// Collaborators passed to every command.
pub use interpreter::Environment;
/// Declarative session-state mutations.
pub use interpreter::StateEffect;
/// The in-progress input line.
pub use line_buffer::LineBuffer;
/// The visible transcript.
pub use scrollback::Scrollback;
/// Change notifications for the rendering collaborator.
pub use session::SessionListener;
/// Aggregate session state.
pub use session::SessionState;
/// The hosting controller.
pub use session::TerminalSession;
