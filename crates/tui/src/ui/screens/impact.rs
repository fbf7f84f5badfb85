use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use engine::analytics::{self, TOP_MATERIALS, TOP_RECYCLERS};

use crate::{
    app::AppState,
    ui::{components::charts::render_labeled_bars, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let Some(session) = state.session.as_ref() else {
        return;
    };
    let snapshot = session.snapshot();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let kpis = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(layout[0]);

    let total_waste = analytics::total_waste_quantity(&snapshot.items);
    let total_tokens = analytics::total_circulating_tokens(&snapshot.transactions);
    let co2_tons = analytics::estimated_co2_saved_tons(&snapshot.transactions);

    render_kpi(frame, kpis[0], "Total Waste Diverted", &format!("{total_waste} kg"), &theme);
    render_kpi(frame, kpis[1], "Total Eco Tokens", &format!("{total_tokens} T2C"), &theme);
    render_kpi(frame, kpis[2], "CO₂ Saved", &format!("{co2_tons} t"), &theme);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);

    let recyclers = analytics::top_recyclers(&snapshot.transactions, TOP_RECYCLERS)
        .into_iter()
        .map(|entry| (entry.name, entry.tokens.max(0) as u64))
        .collect::<Vec<_>>();
    render_panel(frame, panels[0], "Top Recyclers (tokens earned)", &recyclers, &theme);

    let materials = analytics::top_materials(&snapshot.items, TOP_MATERIALS)
        .into_iter()
        .map(|entry| (entry.material, entry.quantity))
        .collect::<Vec<_>>();
    render_panel(frame, panels[1], "Top Materials (kg listed)", &materials, &theme);
}

fn render_kpi(frame: &mut Frame<'_>, area: Rect, label: &str, value: &str, theme: &Theme) {
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
        Paragraph::new(Span::styled(
            value.to_string(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        rows[1],
    );
}

fn render_panel(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    data: &[(String, u64)],
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(title.to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if data.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from("No activity yet.")).alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let padded = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0)])
        .margin(1)
        .split(inner);
    render_labeled_bars(frame, padded[0], data, theme);
}
