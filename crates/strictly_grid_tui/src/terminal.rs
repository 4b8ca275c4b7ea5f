//! Terminal setup and the event loop.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::panic;
use tracing::{debug, error, info, instrument};

use crate::app::App;
use crate::input::{self, BoardLayout};
use crate::ui;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game until the user quits. The terminal is restored even when
/// the loop fails.
#[instrument(skip_all)]
pub fn run(mut app: App) -> Result<()> {
    info!("Starting Strictly Grid TUI");

    let mut terminal = setup().context("Failed to set up terminal")?;
    install_panic_hook(reset_terminal);
    let res = event_loop(&mut terminal, &mut app);
    restore(&mut terminal).context("Failed to restore terminal")?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}

fn setup() -> Result<Term> {
    enable_raw_mode()?;
    enter_screen().inspect_err(|_| reset_terminal())
}

fn enter_screen() -> Result<Term> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Best-effort restore for when no `Terminal` is available to restore
/// through: a failed setup or a panic.
fn reset_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Runs `cleanup` before the previously installed panic hook prints.
fn install_panic_hook(cleanup: fn()) {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        cleanup();
        previous(info);
    }));
}

fn restore(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn event_loop(terminal: &mut Term, app: &mut App) -> Result<()> {
    let mut layout = BoardLayout::default();

    while !app.should_quit() {
        terminal.draw(|f| layout = ui::draw(f, app))?;

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => input::action_for_key(key),
            Event::Mouse(mouse) => input::action_for_mouse(mouse, &layout),
            _ => None,
        };

        if let Some(action) = action {
            debug!(?action, "Input");
            app.apply(action);
        }
    }

    Ok(())
}
