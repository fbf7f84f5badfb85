use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    app::AppState,
    ui::{
        components::tokens::{inline_progress_bar, styled_tokens, styled_tokens_bold},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let Some(session) = state.session.as_ref() else {
        return;
    };
    let wallet = &session.snapshot().wallet;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    render_balance(frame, layout[0], wallet.balance, wallet.earned + wallet.purchased, &theme);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(layout[1]);

    render_stat(frame, columns[0], "Earned from listings", wallet.earned, &theme);
    render_stat(frame, columns[1], "Spent on purchases", -wallet.spent, &theme);
    render_stat(frame, columns[2], "Tokens purchased", wallet.purchased, &theme);
}

fn render_balance(frame: &mut Frame<'_>, area: Rect, balance: i64, inflow: i64, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title("Wallet");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .margin(1)
        .split(inner);

    let headline = Line::from(vec![
        Span::styled("Balance  ", Style::default().fg(theme.text_muted)),
        styled_tokens_bold(balance, theme),
    ]);
    frame.render_widget(Paragraph::new(headline), rows[0]);

    // Share of everything that ever flowed in which is still unspent.
    let ratio = if inflow > 0 {
        balance.max(0) as f64 / inflow as f64
    } else {
        0.0
    };
    let bar_width = rows[1].width.saturating_sub(2).min(40) as usize;
    frame.render_widget(
        Paragraph::new(Span::styled(
            inline_progress_bar(ratio, bar_width),
            Style::default().fg(theme.accent),
        )),
        rows[1],
    );
}

fn render_stat(frame: &mut Frame<'_>, area: Rect, label: &str, amount: i64, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            label.to_string(),
            Style::default().fg(theme.text_muted),
        ))
        .alignment(Alignment::Center),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(styled_tokens(amount, theme))).alignment(Alignment::Center),
        rows[1],
    );
}
