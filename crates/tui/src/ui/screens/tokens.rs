use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    app::AppState,
    config::AppConfig,
    ui::{
        components::charts::{mini_bar_chart, render_inline_sparkline},
        theme::Theme,
    },
};

/// Mock weekly token price, Monday first, in fiat cents.
const WEEK_PRICES: [u64; 7] = [19, 20, 21, 20, 22, 21, 23];
/// Mock weekly trade volume in tokens.
const WEEK_VOLUMES: [u64; 7] = [120, 200, 160, 240, 280, 190, 260];
const WEEK_DAYS: &str = "Mon Tue Wed Thu Fri Sat Sun";

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, config: &AppConfig) {
    let theme = Theme::default();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_purchase_form(frame, columns[0], state, config, &theme);
    render_market_trend(frame, columns[1], &theme);
}

fn render_purchase_form(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    config: &AppConfig,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title("Buy Tokens");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // amount
            Constraint::Length(1), // spacer
            Constraint::Length(1), // price
            Constraint::Length(1), // total
            Constraint::Length(1), // spacer
            Constraint::Length(1), // presets
        ])
        .margin(1)
        .split(inner);

    let amount_line = Line::from(vec![
        Span::styled("Amount  ", Style::default().fg(theme.text_muted)),
        Span::styled(
            format!("{}│", state.tokens.amount),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" tokens", Style::default().fg(theme.text_muted)),
    ]);
    frame.render_widget(Paragraph::new(amount_line), rows[0]);

    let price_line = Line::from(vec![
        Span::styled("Price   ", Style::default().fg(theme.text_muted)),
        Span::styled(
            format!("${:.2}/token", config.token_price),
            Style::default().fg(theme.text),
        ),
    ]);
    frame.render_widget(Paragraph::new(price_line), rows[2]);

    let total = state
        .tokens
        .amount()
        .map(|amount| amount.raw() as f64 * config.token_price)
        .unwrap_or(0.0);
    let total_line = Line::from(vec![
        Span::styled("Total   ", Style::default().fg(theme.text_muted)),
        Span::styled(
            format!("${total:.2}"),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(total_line), rows[3]);

    let presets = Line::from(vec![
        Span::styled("a", Style::default().fg(theme.accent)),
        Span::styled(" 25 tokens   ", Style::default().fg(theme.text_muted)),
        Span::styled("b", Style::default().fg(theme.accent)),
        Span::styled(" 100 tokens", Style::default().fg(theme.text_muted)),
    ]);
    frame.render_widget(Paragraph::new(presets), rows[5]);
}

fn render_market_trend(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title("Market (7d)");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // price label
            Constraint::Length(2), // price sparkline
            Constraint::Length(1), // spacer
            Constraint::Length(1), // volume label
            Constraint::Length(1), // volume bars
            Constraint::Length(1), // day labels
        ])
        .margin(1)
        .split(inner);

    let low = WEEK_PRICES.iter().min().copied().unwrap_or(0);
    let high = WEEK_PRICES.iter().max().copied().unwrap_or(0);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Price  ", Style::default().fg(theme.text_muted)),
            Span::styled(
                format!("${:.2} - ${:.2}", low as f64 / 100.0, high as f64 / 100.0),
                Style::default().fg(theme.text),
            ),
        ])),
        rows[0],
    );
    render_inline_sparkline(frame, rows[1], &WEEK_PRICES, theme);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Volume (tokens)",
            Style::default().fg(theme.text_muted),
        )),
        rows[3],
    );
    let bars: String = mini_bar_chart(&WEEK_VOLUMES)
        .chars()
        .flat_map(|bar| [bar, bar, bar, ' '])
        .collect();
    frame.render_widget(
        Paragraph::new(Span::styled(bars, Style::default().fg(theme.accent))),
        rows[4],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            WEEK_DAYS,
            Style::default().fg(theme.text_muted),
        )),
        rows[5],
    );
}
