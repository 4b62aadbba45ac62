//! glassterm desktop entry point.
//!
//! Drives a terminal session from stdin, one line per submit, and prints the
//! transcript to stdout. Lines starting with `:` stand in for the hosting
//! view's keys and window chrome:
//! `:prev` / `:next` browse history, `:minimize`, `:fullscreen` and
//! `:restore` report window-mode changes, `:close` resets the session, and
//! `:quit` exits. An empty line submits whatever history put in the input.

mod host;
mod render;

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};

use glassterm_platform::{SeededRandom, SystemClock};
use glassterm_terminal::TerminalSession;
use glassterm_types::config::TerminalConfig;
use glassterm_types::input::InputEvent;

use host::HostLine;
use render::StdoutRenderer;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let mut session = TerminalSession::new(
        config,
        Box::new(SystemClock),
        Box::new(SeededRandom::new()),
    );

    let mut renderer = StdoutRenderer::new(io::stdout(), io::stdout().is_terminal());
    renderer.draw_initial(session.state())?;
    session.subscribe(Box::new(renderer));

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        match host::parse_line(&line) {
            HostLine::Quit => break,
            HostLine::Submit(text) if text.trim().is_empty() => {
                session.handle_input(&InputEvent::Submit);
            },
            HostLine::Submit(text) => session.submit_line(text),
            HostLine::Event(event) => {
                let recalls = matches!(event, InputEvent::Navigate(_));
                session.handle_input(&event);
                if recalls {
                    println!("(input) {}", session.input());
                }
            },
            HostLine::Unknown(control) => {
                log::warn!("Unknown host control: {control}");
            },
        }
    }

    log::info!("Session ended ({} commands)", session.history().len());
    Ok(())
}

/// Resolve config from the CLI arg, `GLASSTERM_CONFIG`, or defaults.
fn load_config() -> Result<TerminalConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("GLASSTERM_CONFIG").ok())
        .map(PathBuf::from);
    match path {
        Some(path) => TerminalConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display())),
        None => {
            log::info!("No config given, using defaults");
            Ok(TerminalConfig::default())
        },
    }
}
