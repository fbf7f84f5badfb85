use std::{
    io::{Stdout, stdout},
    panic,
};

use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;

use crate::error::Result;

pub type UiTerminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Enters raw mode and the alternate screen.
///
/// A panic hook is installed first, so a panic mid-draw drops back to the
/// normal screen instead of leaving the shell stuck in raw mode.
pub fn enter() -> Result<UiTerminal> {
    install_panic_hook();
    enable_raw_mode()?;
    crossterm::execute!(stdout(), EnterAlternateScreen)?;
    let terminal = ratatui::Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(terminal)
}

/// Leaves the alternate screen and hands the terminal back to the shell.
pub fn leave(terminal: &mut UiTerminal) -> Result<()> {
    reset()?;
    terminal.show_cursor()?;
    Ok(())
}

fn reset() -> std::io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(stdout(), LeaveAlternateScreen)
}

fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = reset();
        previous(info);
    }));
}
