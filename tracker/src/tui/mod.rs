//! Interactive terminal viewer.
//!
//! Draws the class picker, the filter controls and the collapsible item list
//! with ratatui on a crossterm backend. The loop is synchronous: it blocks on
//! the next terminal event, applies it to [`App`] and redraws.
//!
//! # Keys
//!
//! `Tab`/`Shift+Tab` move focus, `←`/`→` change the focused selector,
//! `↑`/`↓` move through items, `Enter` opens an item, `/` jumps to the search
//! box, `Esc` clears the filters and `q` or `Ctrl+C` quits.

use std::{
    io::{self, Stdout},
    panic,
};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use re_catalogue::CatalogueView;

/// Keyboard handling and interactive state.
pub mod app;

/// Screen layout and widgets.
pub mod render;

pub use app::{App, Focus};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Leave the alternate screen and raw mode. Safe to call more than once.
fn restore_terminal() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Run `restore` before the current panic hook, so the panic message lands on
/// the normal screen instead of the alternate one.
fn chain_panic_hook(restore: fn()) {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore();
        previous(info);
    }));
}

/// Restores the terminal when dropped, also on early return or panic.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> anyhow::Result<(Self, Term)> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok((guard, terminal))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Run the viewer until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to or read from.
pub fn run(view: CatalogueView) -> anyhow::Result<()> {
    let mut app = App::new(view);
    chain_panic_hook(restore_terminal);
    let (_guard, mut terminal) = TerminalGuard::enter()?;
    terminal.clear()?;
    info!("viewer started on {}", app.view.current_class().name);

    while !app.should_quit {
        terminal.draw(|frame| render::draw(frame, &app))?;
        // Resize needs no handling, the next draw picks up the new size.
        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }

    terminal.show_cursor()?;
    info!("viewer closed");
    Ok(())
}
