//! Terminal prompts
//!
//! Visible prompts go to stdout and read a line from stdin. The hidden prompt goes to
//! stderr and, when stdin is a terminal, reads key events in raw mode so nothing is echoed.
//! When stdin is not a terminal (piped input, tests) the hidden prompt reads a plain line.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::tty::IsTty;
use nbfix_core::deploy_env::Prompter;
use nbfix_core::PromptError;
use std::io::{self, Write};

/// [`Prompter`] backed by the process's stdin, stdout and stderr
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn prompt(&mut self, message: &str) -> Result<String, PromptError> {
        let mut stdout = io::stdout();
        write!(stdout, "{message}")?;
        stdout.flush()?;
        read_line()
    }

    fn prompt_hidden(&mut self, message: &str) -> Result<String, PromptError> {
        let mut stderr = io::stderr();
        write!(stderr, "{message}")?;
        stderr.flush()?;

        if !io::stdin().is_tty() {
            return read_line();
        }
        let answer = read_hidden();
        // raw mode swallowed the Enter key's newline
        writeln!(stderr)?;
        answer
    }
}

fn read_line() -> Result<String, PromptError> {
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(PromptError::EndOfInput);
    }
    Ok(strip_line_ending(&line).to_string())
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Restores cooked mode when dropped, including on early returns
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

#[derive(Debug, PartialEq, Eq)]
enum KeyOutcome {
    Continue,
    Submit,
    Interrupt,
    EndOfInput,
}

fn read_hidden() -> Result<String, PromptError> {
    let _guard = RawModeGuard::enable()?;
    let mut buffer = String::new();
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match apply_key(&mut buffer, key) {
            KeyOutcome::Continue => {}
            KeyOutcome::Submit => return Ok(buffer),
            KeyOutcome::Interrupt => return Err(PromptError::Interrupted),
            KeyOutcome::EndOfInput => return Err(PromptError::EndOfInput),
        }
    }
}

fn apply_key(buffer: &mut String, key: KeyEvent) -> KeyOutcome {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => KeyOutcome::Submit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyOutcome::Interrupt,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) if buffer.is_empty() => {
            KeyOutcome::EndOfInput
        }
        (KeyCode::Backspace, _) => {
            buffer.pop();
            KeyOutcome::Continue
        }
        (KeyCode::Char(c), modifiers) if !modifiers.contains(KeyModifiers::CONTROL) => {
            buffer.push(c);
            KeyOutcome::Continue
        }
        _ => KeyOutcome::Continue,
    }
}
