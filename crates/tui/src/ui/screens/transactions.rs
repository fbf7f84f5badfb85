use chrono::Utc;
use chrono_tz::Tz;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use api_types::transaction::{Transaction, TxAction};
use engine::filter;

use crate::{
    app::{AppState, TxFilterFocus, TxMode},
    config::AppConfig,
    ui::{components::tokens::styled_tokens, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, config: &AppConfig) {
    let theme = Theme::default();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_filters(frame, layout[0], state, &theme);
    render_list(frame, layout[1], state, config, &theme);
}

fn render_filters(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let txs = &state.transactions;
    let editing = txs.mode == TxMode::Filter;

    let mut line = Vec::new();
    push_field(
        &mut line,
        "Search",
        &txs.search,
        editing && txs.focus == TxFilterFocus::Search,
        theme,
    );
    line.push(Span::raw("   "));
    line.push(Span::styled("Action", Style::default().fg(theme.text_muted)));
    line.push(Span::raw(format!(": {}", txs.action_label())));
    line.push(Span::raw("   "));
    push_field(
        &mut line,
        "From",
        &txs.from,
        editing && txs.focus == TxFilterFocus::From,
        theme,
    );
    line.push(Span::raw("   "));
    push_field(
        &mut line,
        "To",
        &txs.to,
        editing && txs.focus == TxFilterFocus::To,
        theme,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title("Transactions");
    frame.render_widget(Paragraph::new(Line::from(line)).block(block), area);
}

fn push_field(
    line: &mut Vec<Span<'static>>,
    label: &'static str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    line.push(Span::styled(label, Style::default().fg(theme.text_muted)));
    line.push(Span::raw(": "));

    let shown = if value.is_empty() && !focused {
        "-".to_string()
    } else if focused {
        format!("{value}│")
    } else {
        value.to_string()
    };
    let mut style = Style::default().fg(theme.text);
    if focused {
        style = style.fg(theme.accent).add_modifier(Modifier::BOLD);
    }
    line.push(Span::styled(shown, style));
}

fn render_list(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    config: &AppConfig,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));

    let Some(session) = state.session.as_ref() else {
        frame.render_widget(block, area);
        return;
    };

    let rows = filter::filter_transactions(
        &session.snapshot().transactions,
        &state.transactions.criteria(),
    );
    if rows.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from("No transactions match the current filters."))
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    }

    let tz: Option<Tz> = config.timezone.parse().ok();
    let items = rows
        .iter()
        .map(|tx| format_row(tx, tz, theme))
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    list_state.select(Some(state.transactions.selected.min(rows.len() - 1)));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn format_row(tx: &Transaction, tz: Option<Tz>, theme: &Theme) -> ListItem<'static> {
    let date = match tz {
        Some(tz) => tx.occurred_at.with_timezone(&tz).format("%d %b %H:%M"),
        None => tx.occurred_at.with_timezone(&Utc).format("%d %b %H:%M"),
    }
    .to_string();

    let text = format!(
        "{date}  {:<16} {:<14} {:>8}  ",
        tx.action.as_str(),
        tx.material,
        quantity_label(tx)
    );
    let trailer = format!("  {:<12} {}", tx.counterparty, tx.status.as_str());

    ListItem::new(Line::from(vec![
        Span::raw(text),
        styled_tokens(tx.tokens, theme),
        Span::raw(trailer),
    ]))
}

/// Quantity column text. Listings move kilograms; token purchases move a
/// bare token count, so the unit stays off those rows.
fn quantity_label(tx: &Transaction) -> String {
    if tx.quantity == 0 {
        return String::new();
    }
    match tx.action {
        TxAction::TokensPurchased => tx.quantity.to_string(),
        TxAction::WasteListed | TxAction::WastePurchased => format!("{} kg", tx.quantity),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use api_types::transaction::TxStatus;

    use super::*;

    fn tx(action: TxAction, material: &str, quantity: u64) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            occurred_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
            action,
            material: material.to_string(),
            quantity,
            tokens: 100,
            counterparty: "Trash2Cash".to_string(),
            status: TxStatus::Completed,
        }
    }

    #[test]
    fn token_purchases_show_a_bare_count() {
        let purchase = tx(TxAction::TokensPurchased, "T2C", 100);
        assert_eq!(quantity_label(&purchase), "100");
    }

    #[test]
    fn waste_rows_keep_the_kilogram_unit() {
        assert_eq!(quantity_label(&tx(TxAction::WasteListed, "Plastic", 50)), "50 kg");
        assert_eq!(quantity_label(&tx(TxAction::WastePurchased, "Metal", 20)), "20 kg");
    }

    #[test]
    fn zero_quantity_renders_blank() {
        assert_eq!(quantity_label(&tx(TxAction::WasteListed, "Plastic", 0)), "");
    }
}
