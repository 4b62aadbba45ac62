//! Error types for glassterm.

use std::io;

/// Errors produced outside the interpreter (config loading, host I/O).
///
/// Nothing the user types at the prompt ever produces one of these; the
/// interpreter renders its own failures as output lines.
#[derive(Debug, thiserror::Error)]
pub enum GlassError {
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, GlassError>;
