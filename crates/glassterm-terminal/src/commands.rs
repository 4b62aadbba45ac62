//! Built-in commands.
//!
//! Exact-name commands: help, clear, date, matrix, whoami, systeminfo, joke.
//! Prefix rules, tried in this order: echo, color, calc.

use std::fmt::Write as _;

use glassterm_types::color::TextColor;

use crate::calc;
use crate::interpreter::{
    Command, CommandError, CommandRegistry, CommandResult, Environment, StateEffect,
};

/// Text printed by `help`. Keep in step with [`register_builtins`].
pub const HELP_TEXT: &str = "\
Available commands:
  clear        - Clear the terminal screen
  date         - Show the current date and time
  echo <text>  - Print text to the terminal
  color <name> - Change text color (green, blue, purple)
  calc <expr>  - Evaluate an arithmetic expression
  matrix       - Toggle matrix mode
  whoami       - Display the current user
  systeminfo   - Display system information
  joke         - Tell a random programming joke";

/// The jokes `joke` chooses from.
pub const JOKES: [&str; 3] = [
    "Why do programmers prefer dark mode? Because light attracts bugs.",
    "There are 10 types of people: those who understand binary and those who don't.",
    "A SQL query walks into a bar, walks up to two tables and asks: 'Can I join you?'",
];

/// Confirmation printed by `matrix`, whichever way it toggled.
pub const MATRIX_TOGGLED: &str = "Matrix mode toggled.";

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "List available commands"
    }
    fn execute(
        &self,
        _args: &str,
        _env: &mut Environment<'_>,
    ) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::text(HELP_TEXT))
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal screen"
    }
    fn execute(
        &self,
        _args: &str,
        _env: &mut Environment<'_>,
    ) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::silent().with_effect(StateEffect::ClearScrollback))
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Show the current date and time"
    }
    fn execute(
        &self,
        _args: &str,
        env: &mut Environment<'_>,
    ) -> Result<CommandResult, CommandError> {
        let now = env.clock.now();
        let mut out = String::new();
        if write!(out, "{}", now.format(&env.config.date_format)).is_err() {
            log::warn!("bad date_format {:?}, using ISO form", env.config.date_format);
            out = now.format("%Y-%m-%d %H:%M:%S").to_string();
        }
        Ok(CommandResult::text(out))
    }
}

// ---------------------------------------------------------------------------
// matrix
// ---------------------------------------------------------------------------

struct MatrixCmd;
impl Command for MatrixCmd {
    fn name(&self) -> &str {
        "matrix"
    }
    fn description(&self) -> &str {
        "Toggle matrix mode"
    }
    fn execute(
        &self,
        _args: &str,
        _env: &mut Environment<'_>,
    ) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::text(MATRIX_TOGGLED).with_effect(StateEffect::ToggleMatrix))
    }
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Display the current user"
    }
    fn execute(
        &self,
        _args: &str,
        env: &mut Environment<'_>,
    ) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::text(env.config.user.clone()))
    }
}

// ---------------------------------------------------------------------------
// systeminfo
// ---------------------------------------------------------------------------

struct SysteminfoCmd;
impl Command for SysteminfoCmd {
    fn name(&self) -> &str {
        "systeminfo"
    }
    fn description(&self) -> &str {
        "Display system information"
    }
    fn execute(
        &self,
        _args: &str,
        env: &mut Environment<'_>,
    ) -> Result<CommandResult, CommandError> {
        let colors: Vec<&str> = TextColor::ALL.iter().map(|c| c.name()).collect();
        let lines = [
            format!("OS: GlassTerm {}", env!("CARGO_PKG_VERSION")),
            format!("Host: {}", env.config.hostname),
            format!("User: {}", env.config.user),
            "Shell: glassterm (simulated)".to_string(),
            format!("Colors: {}", colors.join(", ")),
        ];
        Ok(CommandResult::text(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// joke
// ---------------------------------------------------------------------------

struct JokeCmd;
impl Command for JokeCmd {
    fn name(&self) -> &str {
        "joke"
    }
    fn description(&self) -> &str {
        "Tell a random programming joke"
    }
    fn execute(
        &self,
        _args: &str,
        env: &mut Environment<'_>,
    ) -> Result<CommandResult, CommandError> {
        let idx = env.rng.pick(JOKES.len());
        Ok(CommandResult::text(JOKES[idx]))
    }
}

// ---------------------------------------------------------------------------
// echo (prefix rule)
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print text to the terminal"
    }
    fn execute(
        &self,
        args: &str,
        _env: &mut Environment<'_>,
    ) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::text(args))
    }
}

// ---------------------------------------------------------------------------
// color (prefix rule)
// ---------------------------------------------------------------------------

struct ColorCmd;
impl Command for ColorCmd {
    fn name(&self) -> &str {
        "color"
    }
    fn description(&self) -> &str {
        "Change text color (green, blue, purple)"
    }
    fn execute(
        &self,
        args: &str,
        _env: &mut Environment<'_>,
    ) -> Result<CommandResult, CommandError> {
        let token = args.trim();
        let color = TextColor::from_name(token)
            .ok_or_else(|| CommandError::UnknownColor(token.to_string()))?;
        Ok(
            CommandResult::text(format!("Text color changed to {color}."))
                .with_effect(StateEffect::SetColor(color)),
        )
    }
}

// ---------------------------------------------------------------------------
// calc (prefix rule)
// ---------------------------------------------------------------------------

struct CalcCmd;
impl Command for CalcCmd {
    fn name(&self) -> &str {
        "calc"
    }
    fn description(&self) -> &str {
        "Evaluate an arithmetic expression"
    }
    fn execute(
        &self,
        args: &str,
        _env: &mut Environment<'_>,
    ) -> Result<CommandResult, CommandError> {
        match calc::evaluate(args) {
            Ok(value) => Ok(CommandResult::text(format!(
                "{args} = {}",
                calc::format_number(value)
            ))),
            Err(e) => {
                log::debug!("calc {args:?}: {e}");
                Err(CommandError::InvalidExpression)
            },
        }
    }
}

/// Register the built-in command set.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(MatrixCmd));
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(SysteminfoCmd));
    reg.register(Box::new(JokeCmd));

    reg.register_prefix(Box::new(EchoCmd));
    reg.register_prefix(Box::new(ColorCmd));
    reg.register_prefix(Box::new(CalcCmd));
}
