use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use engine::filter;

use crate::{
    app::{AppState, MarketMode},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_filters(frame, layout[0], state, &theme);
    render_list(frame, layout[1], state, &theme);
}

fn render_filters(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let market = &state.market;

    let mut line = Vec::new();

    line.push(Span::styled("Search", Style::default().fg(theme.text_muted)));
    line.push(Span::raw(": "));
    let search_shown = if market.search.is_empty() && market.mode != MarketMode::Search {
        "-".to_string()
    } else {
        format!("{}{}", market.search, cursor(market.mode == MarketMode::Search))
    };
    let mut search_style = Style::default().fg(theme.text);
    if market.mode == MarketMode::Search {
        search_style = search_style.fg(theme.accent).add_modifier(Modifier::BOLD);
    }
    line.push(Span::styled(search_shown, search_style));

    let material = market.material().unwrap_or_else(|| "All".to_string());
    let status = market
        .status()
        .map(|status| status.as_str())
        .unwrap_or("All");
    let location = market
        .location()
        .map(|location| location.as_str())
        .unwrap_or("All");

    line.push(Span::raw("   "));
    line.push(Span::styled("Material", Style::default().fg(theme.text_muted)));
    line.push(Span::raw(format!(": {material}   ")));
    line.push(Span::styled("Status", Style::default().fg(theme.text_muted)));
    line.push(Span::raw(format!(": {status}   ")));
    line.push(Span::styled("Location", Style::default().fg(theme.text_muted)));
    line.push(Span::raw(format!(": {location}   ")));
    line.push(Span::styled("Min credits", Style::default().fg(theme.text_muted)));
    line.push(Span::raw(format!(": {}   ", market.min_credits)));
    line.push(Span::styled("Min qty", Style::default().fg(theme.text_muted)));
    line.push(Span::raw(format!(": {} kg", market.min_quantity)));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title("Marketplace");
    frame.render_widget(Paragraph::new(Line::from(line)).block(block), area);
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));

    let Some(session) = state.session.as_ref() else {
        frame.render_widget(block, area);
        return;
    };

    let items = filter::filter_items(&session.snapshot().items, &state.market.criteria());
    if items.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from("No listings match the current filters."))
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    }

    let rows = items
        .iter()
        .map(|item| {
            let qty = format!("{} kg", item.quantity);
            let credits = format!("{} T2C", item.credits);
            let text = format!(
                "{:<14} {:>8}  {:>9}  {:<14} {:<12} {}",
                item.material,
                qty,
                credits,
                item.location.as_str(),
                item.owner,
                item.status.as_str()
            );
            ListItem::new(Line::from(text))
        })
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    list_state.select(Some(state.market.selected.min(items.len() - 1)));

    let list = List::new(rows)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn cursor(active: bool) -> &'static str {
    if active { "│" } else { "" }
}
