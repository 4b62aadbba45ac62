//! Terminal session configuration.
//!
//! Loaded from a TOML file by the host. Every field has a default, so an
//! empty document yields [`TerminalConfig::default`].

use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;

use crate::color::TextColor;
use crate::error::{GlassError, Result};

/// Per-session settings consumed by the interpreter and the controller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Name printed by `whoami`.
    pub user: String,
    /// Host name shown by `systeminfo`.
    pub hostname: String,
    /// Text color a fresh session starts with.
    pub default_color: TextColor,
    /// Lines placed in the scrollback when the session is created.
    pub welcome: Vec<String>,
    /// Single line left in the scrollback after a session reset.
    pub reset_message: String,
    /// chrono strftime pattern used by `date`.
    pub date_format: String,
    /// Oldest history entries are dropped beyond this many. `None` keeps all.
    pub max_history: Option<usize>,
    /// Oldest scrollback lines are dropped beyond this many. `None` keeps all.
    pub max_scrollback: Option<usize>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            user: "guest".to_string(),
            hostname: "glassterm".to_string(),
            default_color: TextColor::Green,
            welcome: vec!["Welcome to GlassTerm. Type 'help' for available commands.".to_string()],
            reset_message: "Terminal session restarted.".to_string(),
            date_format: "%-m/%-d/%Y, %-I:%M:%S %p".to_string(),
            max_history: None,
            max_scrollback: None,
        }
    }
}

impl TerminalConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)
            .map_err(|e| GlassError::Config(format!("{}: {e}", path.display())))?;
        log::info!("Loaded terminal config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.max_history == Some(0) {
            return Err(GlassError::Config("max_history must be at least 1".into()));
        }
        if self.max_scrollback == Some(0) {
            return Err(GlassError::Config(
                "max_scrollback must be at least 1".into(),
            ));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(GlassError::Config(format!(
                "invalid date_format: {}",
                self.date_format
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let cfg = TerminalConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, TerminalConfig::default());
    }

    #[test]
    fn defaults_are_unbounded() {
        let cfg = TerminalConfig::default();
        assert_eq!(cfg.max_history, None);
        assert_eq!(cfg.max_scrollback, None);
        assert_eq!(cfg.user, "guest");
        assert_eq!(cfg.default_color, TextColor::Green);
    }

    #[test]
    fn partial_override() {
        let cfg = TerminalConfig::from_toml_str(
            "user = \"neo\"\ndefault_color = \"blue\"\nmax_history = 50\n",
        )
        .unwrap();
        assert_eq!(cfg.user, "neo");
        assert_eq!(cfg.default_color, TextColor::Blue);
        assert_eq!(cfg.max_history, Some(50));
        assert_eq!(cfg.hostname, "glassterm");
    }

    #[test]
    fn welcome_lines() {
        let cfg = TerminalConfig::from_toml_str("welcome = [\"one\", \"two\"]").unwrap();
        assert_eq!(cfg.welcome, vec!["one", "two"]);
    }

    #[test]
    fn unknown_color_rejected() {
        let err = TerminalConfig::from_toml_str("default_color = \"red\"").unwrap_err();
        assert!(format!("{err}").contains("TOML parse error"));
    }

    #[test]
    fn zero_history_cap_rejected() {
        let err = TerminalConfig::from_toml_str("max_history = 0").unwrap_err();
        assert_eq!(format!("{err}"), "config error: max_history must be at least 1");
    }

    #[test]
    fn zero_scrollback_cap_rejected() {
        assert!(TerminalConfig::from_toml_str("max_scrollback = 0").is_err());
    }

    #[test]
    fn bad_date_format_rejected() {
        let err = TerminalConfig::from_toml_str("date_format = \"%Q\"").unwrap_err();
        assert!(format!("{err}").contains("invalid date_format"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = TerminalConfig::load(Path::new("/nonexistent/glassterm.toml")).unwrap_err();
        assert!(matches!(err, GlassError::Io(_)));
    }
}
