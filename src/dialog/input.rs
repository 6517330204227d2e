//! Keyboard input handling and interactive loop.
//!
//! Maps crossterm key events to dialog actions and drives the modal loop
//! until the dialog is accepted or cancelled.

use std::io::{self, Write};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::{cursor, execute, terminal};

use crate::error::ParamResult;
use crate::selection::Closed;

use super::menu::{DialogAction, DialogOutcome, ParameterDialog};

/// Convert a keyboard event to a dialog action
pub fn key_to_action(key: KeyEvent) -> Option<DialogAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(DialogAction::Cancel);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(DialogAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(DialogAction::Down),
        KeyCode::Char(' ') => Some(DialogAction::Toggle),
        KeyCode::Tab | KeyCode::Char('c') => Some(DialogAction::Click),
        KeyCode::Right | KeyCode::Char('l') => Some(DialogAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(DialogAction::Collapse),
        KeyCode::Char('e') => Some(DialogAction::ExpandAll),
        KeyCode::Enter => Some(DialogAction::Accept),
        KeyCode::Char('q') | KeyCode::Esc => Some(DialogAction::Cancel),
        _ => None,
    }
}

/// Restores the terminal when dropped, including on early return
struct RawModeGuard;

impl RawModeGuard {
    fn enter(stdout: &mut io::Stdout) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            cursor::Show,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn render_ui(stdout: &mut io::Stdout, dialog: &ParameterDialog) -> io::Result<()> {
    execute!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    // Raw mode needs explicit carriage returns
    let mut write_block = |text: &str| -> io::Result<()> {
        for line in text.lines() {
            write!(stdout, "{}\r\n", line)?;
        }
        Ok(())
    };

    write_block(&dialog.options().title)?;
    write_block("")?;
    write_block(&dialog.render())?;
    write_block("")?;
    write_block(&dialog.render_status_bar())?;
    write_block("")?;
    write_block(&dialog.render_help_bar())?;

    stdout.flush()
}

/// Run the dialog modally until it is accepted or cancelled.
///
/// The close event fires in both cases; the returned [`Closed`] carries the
/// outcome.
pub fn run_interactive(mut dialog: ParameterDialog) -> ParamResult<Closed> {
    use crossterm::event::{self, Event, KeyEventKind};

    let mut stdout = io::stdout();
    let guard = RawModeGuard::enter(&mut stdout)?;
    tracing::debug!("parameter dialog opened");

    render_ui(&mut stdout, &dialog)?;

    let accepted = loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let Some(action) = key_to_action(key) else {
                continue;
            };
            match dialog.handle_action(action)? {
                DialogOutcome::Accepted => break true,
                DialogOutcome::Cancelled => break false,
                DialogOutcome::Pending => render_ui(&mut stdout, &dialog)?,
            }
        }
    };

    drop(guard);
    Ok(dialog.close(accepted))
}
