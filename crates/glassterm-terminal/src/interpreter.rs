//! Command trait, registry, and dispatch logic.
//!
//! A submitted line is matched in a fixed order:
//!
//! 1. The first whitespace-delimited token, lowercased, against the table of
//!    exact command names.
//! 2. The whole line against the prefix rules, in registration order. A
//!    rule's prefix is its name followed by one space, compared ASCII
//!    case-insensitively; the handler receives the rest of the line verbatim.
//! 3. Otherwise the line is an unknown command.
//!
//! Handlers never touch session state directly. They return a
//! [`CommandResult`] describing output text and [`StateEffect`]s, and
//! [`CommandRegistry::interpret`] folds those into a [`SessionState`].

use std::collections::HashMap;

use glassterm_platform::{Clock, RandomSource};
use glassterm_types::color::TextColor;
use glassterm_types::config::TerminalConfig;

use crate::scrollback::split_output;
use crate::session::SessionState;

/// A declarative session-state mutation requested by a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateEffect {
    /// Change the active text color.
    SetColor(TextColor),
    /// Flip matrix mode.
    ToggleMatrix,
    /// Empty the scrollback. Suppresses the echo of the submitted line.
    ClearScrollback,
    /// Replace the scrollback with this single line. Color, matrix mode and
    /// history are left alone.
    ResetSession(String),
}

/// What a handler produced.
///
/// `output: None` appends nothing; `Some("")` appends one blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub output: Option<String>,
    pub effects: Vec<StateEffect>,
}

impl CommandResult {
    /// Output text with no effects.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            output: Some(text.into()),
            effects: Vec::new(),
        }
    }

    /// No output and no effects.
    pub fn silent() -> Self {
        Self::default()
    }

    /// Add an effect.
    pub fn with_effect(mut self, effect: StateEffect) -> Self {
        self.effects.push(effect);
        self
    }

    fn clears_scrollback(&self) -> bool {
        self.effects.contains(&StateEffect::ClearScrollback)
    }
}

/// Failures a handler may report. All of them end up as output text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Nothing matched. Carries the line exactly as typed.
    #[error("Command not found: {0}. Type 'help' for available commands.")]
    UnknownCommand(String),
    /// `color` was given a token outside the color table. The registry
    /// reports this as [`CommandError::UnknownCommand`] for the whole line.
    #[error("unknown color: {0}")]
    UnknownColor(String),
    /// `calc` could not evaluate its argument.
    #[error("Invalid expression")]
    InvalidExpression,
}

/// Collaborators handed to every handler.
pub struct Environment<'a> {
    /// Local wall clock for `date`.
    pub clock: &'a dyn Clock,
    /// Random source for `joke`.
    pub rng: &'a mut dyn RandomSource,
    /// Session configuration (user name, host name, date format).
    pub config: &'a TerminalConfig,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description.
    fn description(&self) -> &str;

    /// Run the command. `args` is the text after the name: the trimmed
    /// remainder for exact commands, the verbatim remainder for prefix rules.
    fn execute(
        &self,
        args: &str,
        env: &mut Environment<'_>,
    ) -> Result<CommandResult, CommandError>;
}

struct PrefixRule {
    prefix: String,
    command: Box<dyn Command>,
}

/// Registry of exact-name commands and ordered prefix rules.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
    prefix_rules: Vec<PrefixRule>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            prefix_rules: Vec::new(),
        }
    }

    /// Register an exact-name command. Replaces any existing command with
    /// the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_ascii_lowercase(), cmd);
    }

    /// Append a prefix rule matching `"<name> "`. Rules are tried in the
    /// order they were registered.
    pub fn register_prefix(&mut self, cmd: Box<dyn Command>) {
        let prefix = format!("{} ", cmd.name().to_ascii_lowercase());
        self.prefix_rules.push(PrefixRule {
            prefix,
            command: cmd,
        });
    }

    /// All registered commands as `(name, description)`, sorted by name.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        let mut cmds: Vec<(&str, &str)> = self
            .commands
            .values()
            .map(|c| c.as_ref())
            .chain(self.prefix_rules.iter().map(|r| r.command.as_ref()))
            .map(|c| (c.name(), c.description()))
            .collect();
        cmds.sort_by_key(|(name, _)| *name);
        cmds
    }

    /// Resolve and run `line`, turning every failure into output text.
    ///
    /// `line` must already be trimmed and non-empty.
    pub fn dispatch(&self, line: &str, env: &mut Environment<'_>) -> CommandResult {
        match self.resolve(line, env) {
            Ok(result) => result,
            Err(CommandError::UnknownColor(token)) => {
                log::debug!("unknown color {token:?}, falling through to unknown command");
                CommandResult::text(CommandError::UnknownCommand(line.to_string()).to_string())
            },
            Err(e) => CommandResult::text(e.to_string()),
        }
    }

    fn resolve(
        &self,
        line: &str,
        env: &mut Environment<'_>,
    ) -> Result<CommandResult, CommandError> {
        let name = line.split_whitespace().next().unwrap_or("");
        if let Some(cmd) = self.commands.get(&name.to_ascii_lowercase()) {
            log::debug!("dispatch: exact command {}", cmd.name());
            let args = line.trim_start()[name.len()..].trim();
            return cmd.execute(args, env);
        }

        for rule in &self.prefix_rules {
            let matches = line
                .get(..rule.prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(&rule.prefix));
            if matches {
                log::debug!("dispatch: prefix rule {:?}", rule.prefix);
                return rule.command.execute(&line[rule.prefix.len()..], env);
            }
        }

        log::debug!("dispatch: no match for {line:?}");
        Err(CommandError::UnknownCommand(line.to_string()))
    }

    /// Interpret one submitted line against `state`.
    ///
    /// Returns the updated state and the handler's output lines. Unless the
    /// handler cleared the scrollback, the state's scrollback gains the
    /// `> <line>` echo followed by those output lines.
    pub fn interpret(
        &self,
        line: &str,
        mut state: SessionState,
        env: &mut Environment<'_>,
    ) -> (SessionState, Vec<String>) {
        let result = self.dispatch(line, env);
        let lines = split_output(result.output.as_deref());

        for effect in &result.effects {
            state.apply(effect);
        }
        if !result.clears_scrollback() {
            state.scrollback.echo(line);
            state.scrollback.extend(lines.iter().cloned());
        }
        (state, lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use glassterm_platform::{FixedClock, SequenceRandom};

    struct Shout;
    impl Command for Shout {
        fn name(&self) -> &str {
            "shout"
        }
        fn description(&self) -> &str {
            "Upper-case the arguments"
        }
        fn execute(
            &self,
            args: &str,
            _env: &mut Environment<'_>,
        ) -> Result<CommandResult, CommandError> {
            Ok(CommandResult::text(args.to_uppercase()))
        }
    }

    struct Say;
    impl Command for Say {
        fn name(&self) -> &str {
            "say"
        }
        fn description(&self) -> &str {
            "Repeat the rest of the line"
        }
        fn execute(
            &self,
            args: &str,
            _env: &mut Environment<'_>,
        ) -> Result<CommandResult, CommandError> {
            Ok(CommandResult::text(args))
        }
    }

    struct Wipe;
    impl Command for Wipe {
        fn name(&self) -> &str {
            "wipe"
        }
        fn description(&self) -> &str {
            "Clear"
        }
        fn execute(
            &self,
            _args: &str,
            _env: &mut Environment<'_>,
        ) -> Result<CommandResult, CommandError> {
            Ok(CommandResult::silent().with_effect(StateEffect::ClearScrollback))
        }
    }

    fn with_env<R>(f: impl FnOnce(&mut Environment<'_>) -> R) -> R {
        let clock = FixedClock(
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        );
        let mut rng = SequenceRandom::new(vec![0]);
        let config = TerminalConfig::default();
        let mut env = Environment {
            clock: &clock,
            rng: &mut rng,
            config: &config,
        };
        f(&mut env)
    }

    fn registry() -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(Shout));
        reg.register(Box::new(Wipe));
        reg.register_prefix(Box::new(Say));
        reg
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let reg = registry();
        let out = with_env(|env| reg.dispatch("SHOUT hi there", env));
        assert_eq!(out.output.as_deref(), Some("HI THERE"));
    }

    #[test]
    fn exact_match_uses_first_token() {
        let reg = registry();
        let out = with_env(|env| reg.dispatch("shout   spaced   out", env));
        assert_eq!(out.output.as_deref(), Some("SPACED   OUT"));
    }

    #[test]
    fn prefix_rule_passes_remainder_verbatim() {
        let reg = registry();
        let out = with_env(|env| reg.dispatch("say   two  spaces", env));
        assert_eq!(out.output.as_deref(), Some("  two  spaces"));
    }

    #[test]
    fn prefix_rule_is_case_insensitive() {
        let reg = registry();
        let out = with_env(|env| reg.dispatch("SAY Hi", env));
        assert_eq!(out.output.as_deref(), Some("Hi"));
    }

    #[test]
    fn prefix_rule_empty_remainder() {
        let reg = registry();
        let out = with_env(|env| reg.dispatch("say ", env));
        assert_eq!(out.output.as_deref(), Some(""));
    }

    #[test]
    fn prefix_requires_trailing_space() {
        let reg = registry();
        let out = with_env(|env| reg.dispatch("sayhello", env));
        assert_eq!(
            out.output.as_deref(),
            Some("Command not found: sayhello. Type 'help' for available commands.")
        );
    }

    #[test]
    fn unknown_command_echoes_line_as_typed() {
        let reg = registry();
        let out = with_env(|env| reg.dispatch("FooBar  Baz", env));
        assert_eq!(
            out.output.as_deref(),
            Some("Command not found: FooBar  Baz. Type 'help' for available commands.")
        );
        assert!(out.effects.is_empty());
    }

    #[test]
    fn interpret_appends_echo_then_output() {
        let reg = registry();
        let (state, lines) =
            with_env(|env| reg.interpret("shout a", SessionState::default(), env));
        assert_eq!(lines, vec!["A"]);
        assert_eq!(state.scrollback.lines(), ["> shout a", "A"]);
    }

    #[test]
    fn interpret_clear_appends_nothing() {
        let reg = registry();
        let mut state = SessionState::default();
        state.scrollback.push("old".to_string());
        let (state, lines) = with_env(|env| reg.interpret("wipe", state, env));
        assert!(lines.is_empty());
        assert!(state.scrollback.is_empty());
    }

    #[test]
    fn list_commands_sorted_across_tables() {
        let reg = registry();
        let names: Vec<&str> = reg.list_commands().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["say", "shout", "wipe"]);
    }

    #[test]
    fn register_replaces_existing_command() {
        struct Quiet;
        impl Command for Quiet {
            fn name(&self) -> &str {
                "shout"
            }
            fn description(&self) -> &str {
                "quiet version"
            }
            fn execute(
                &self,
                args: &str,
                _env: &mut Environment<'_>,
            ) -> Result<CommandResult, CommandError> {
                Ok(CommandResult::text(args.to_lowercase()))
            }
        }
        let mut reg = registry();
        reg.register(Box::new(Quiet));
        let out = with_env(|env| reg.dispatch("shout HEY", env));
        assert_eq!(out.output.as_deref(), Some("hey"));
    }

    #[test]
    fn error_messages() {
        assert_eq!(CommandError::InvalidExpression.to_string(), "Invalid expression");
        assert_eq!(
            CommandError::UnknownCommand("x".into()).to_string(),
            "Command not found: x. Type 'help' for available commands."
        );
    }
}
