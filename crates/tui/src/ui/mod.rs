pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use engine::Tokens;

use crate::{
    app::{AppState, ListingStep, MarketMode, Screen, Section, TxMode},
    config::AppConfig,
};

pub use terminal::{UiTerminal, enter as enter_terminal, leave as leave_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState, config: &AppConfig) {
    let area = frame.area();
    match state.screen {
        Screen::Login => screens::login::render(frame, area, state),
        Screen::Home => render_shell(frame, area, state, config),
    }
}

fn render_shell(frame: &mut Frame<'_>, area: Rect, state: &AppState, config: &AppConfig) {
    let theme = Theme::default();

    // Main layout: info bar, tabs, content, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(2), // Tab bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    components::tabs::render_tabs(frame, layout[1], state.section, &theme);

    let content = layout[2];
    match state.section {
        Section::Marketplace => screens::marketplace::render(frame, content, state),
        Section::ListWaste => screens::listing::render(frame, content, state),
        Section::Wallet => screens::wallet::render(frame, content, state),
        Section::Tokens => screens::tokens::render(frame, content, state, config),
        Section::Transactions => screens::transactions::render(frame, content, state, config),
        Section::Impact => screens::impact::render(frame, content, state),
    }

    render_bottom_bar(frame, layout[3], state, &theme);
    components::toast::render(frame, area, state.toast.as_ref());
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let user = state
        .session
        .as_ref()
        .map(|session| session.username())
        .unwrap_or("-");
    let balance = state
        .session
        .as_ref()
        .map(|session| Tokens::new(session.snapshot().wallet.balance).to_string())
        .unwrap_or_else(|| "-".to_string());
    let last_action = state
        .last_action
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());

    let line = Line::from(vec![
        Span::styled("Trash2Cash", Style::default().fg(theme.accent)),
        Span::raw("  "),
        Span::styled("User", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {user}  ")),
        Span::styled("Balance", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {balance}  ")),
        Span::styled("Last action", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {last_action}")),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = components::tabs::tab_shortcuts(theme);

    let context_hints = get_context_hints(state, theme);
    if !context_hints.is_empty() {
        parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        parts.extend(context_hints);
    }

    parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
    parts.push(Span::styled("q", Style::default().fg(theme.accent)));
    parts.push(Span::raw(" quit"));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn hint(key: &'static str, label: &'static str, theme: &Theme) -> [Span<'static>; 2] {
    [
        Span::styled(key, Style::default().fg(theme.accent)),
        Span::raw(label),
    ]
}

/// Context-specific keyboard hints for the current section and mode.
fn get_context_hints(state: &AppState, theme: &Theme) -> Vec<Span<'static>> {
    match state.section {
        Section::Marketplace => match state.market.mode {
            MarketMode::Browse => [
                hint("Enter", " buy  ", theme),
                hint("/", " search  ", theme),
                hint("c", " material  ", theme),
                hint("s", " status  ", theme),
                hint("o", " location  ", theme),
                hint("+/-", " credits  ", theme),
                hint("</>", " qty  ", theme),
                hint("r", " reset", theme),
            ]
            .concat(),
            MarketMode::Search => [
                hint("Enter", " done  ", theme),
                hint("Esc", " done", theme),
            ]
            .concat(),
        },
        Section::ListWaste => {
            let submit = match state.listing.step {
                ListingStep::Review => " create listing  ",
                _ => " next step  ",
            };
            [
                hint("Enter", submit, theme),
                hint("Esc", " back  ", theme),
                hint("↑/↓", " field  ", theme),
                hint("←/→", " value", theme),
            ]
            .concat()
        }
        Section::Wallet => Vec::new(),
        Section::Tokens => [
            hint("0-9", " amount  ", theme),
            hint("a", " 25  ", theme),
            hint("b", " 100  ", theme),
            hint("Enter", " purchase", theme),
        ]
        .concat(),
        Section::Transactions => match state.transactions.mode {
            TxMode::List => [
                hint("/", " filters  ", theme),
                hint("c", " action  ", theme),
                hint("x", " export csv", theme),
            ]
            .concat(),
            TxMode::Filter => [
                hint("Tab", " next field  ", theme),
                hint("Enter", " apply  ", theme),
                hint("Esc", " apply", theme),
            ]
            .concat(),
        },
        Section::Impact => Vec::new(),
    }
}
