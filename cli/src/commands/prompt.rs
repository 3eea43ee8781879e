//! Interactive input field with live validation.
//!
//! A raw-mode single-line editor. The buffer is re-classified on every
//! keystroke so the inline error clears as soon as the field stops being
//! empty/invalid; submitting runs the same classification once more, which
//! is idempotent by construction.

use std::io::{self, Write};

use colored::*;
use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};

use webcheck_common::address::{self, AddressError};
use webcheck_common::{config::Config, warn};

use crate::commands::check;
use crate::terminal::colors;

const LABEL: &str = "Enter a URL or IP to see its details";
const PLACEHOLDER: &str = "e.g. duck.com";

pub fn prompt(cfg: &Config) -> anyhow::Result<()> {
    println!("{}", LABEL.color(colors::PRIMARY));

    match read_address()? {
        Some(input) => check::check(&input, cfg),
        None => {
            warn!("cancelled, nothing to check");
            Ok(())
        }
    }
}

/// Runs the editor in raw mode. Returns a routable input, or `None` when the
/// user backs out with Esc or Ctrl-C.
fn read_address() -> anyhow::Result<Option<String>> {
    terminal::enable_raw_mode()?;
    let result = edit_loop();
    terminal::disable_raw_mode()?;
    println!();
    result
}

fn edit_loop() -> anyhow::Result<Option<String>> {
    let mut stdout = io::stdout();
    let mut buffer = String::new();
    let mut error: Option<AddressError> = None;

    loop {
        redraw(&mut stdout, &buffer, error)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }

        match key.code {
            KeyCode::Esc => return Ok(None),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(None);
            }
            KeyCode::Enter => match address::classify(&buffer).require_routable() {
                Ok(_) => return Ok(Some(buffer)),
                Err(err) => error = Some(err),
            },
            KeyCode::Backspace => {
                buffer.pop();
                revalidate(&buffer, &mut error);
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                buffer.push(c);
                revalidate(&buffer, &mut error);
            }
            _ => {}
        }
    }
}

/// Live pass: the inline error disappears as soon as the field is routable.
fn revalidate(buffer: &str, error: &mut Option<AddressError>) {
    if address::classify(buffer).kind.is_routable() {
        *error = None;
    }
}

fn redraw(stdout: &mut impl Write, buffer: &str, error: Option<AddressError>) -> anyhow::Result<()> {
    execute!(stdout, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;

    let field: String = if buffer.is_empty() {
        PLACEHOLDER.dimmed().italic().to_string()
    } else {
        buffer.color(colors::TEXT_DEFAULT).to_string()
    };

    match error {
        Some(err) => write!(
            stdout,
            "> {field}  {}",
            err.to_string().color(colors::DANGER)
        )?,
        None => write!(stdout, "> {field}")?,
    }

    stdout.flush()?;
    Ok(())
}
