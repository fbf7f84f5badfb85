use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    app::{AppState, ListingState, ListingStep},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let listing = &state.listing;

    let title = match listing.step {
        ListingStep::Basics => "What are you listing?",
        ListingStep::Details => "Where and in what condition?",
        ListingStep::Review => "Review and publish",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(format!(
            "List Waste - step {}/3: {title}",
            listing.step.number()
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // field 0
            Constraint::Length(1), // field 1
            Constraint::Length(1), // field 2
            Constraint::Length(1), // spacer
            Constraint::Min(0),    // summary (review step)
            Constraint::Length(1), // estimate
            Constraint::Length(1), // message
        ])
        .margin(1)
        .split(inner);

    match listing.step {
        ListingStep::Basics => {
            render_field(frame, rows[0], "Material", listing.material(), true, listing.focus == 0, &theme);
            render_field(frame, rows[1], "Quantity (kg)", &listing.quantity, false, listing.focus == 1, &theme);
            render_field(frame, rows[2], "Quality", listing.quality.as_str(), true, listing.focus == 2, &theme);
        }
        ListingStep::Details => {
            render_field(frame, rows[0], "Description", &listing.description, false, listing.focus == 0, &theme);
            render_field(frame, rows[1], "Location", listing.location.as_str(), true, listing.focus == 1, &theme);
            render_field(frame, rows[2], "Status", listing.status.as_str(), true, listing.focus == 2, &theme);
        }
        ListingStep::Review => {
            render_field(frame, rows[0], "Images (comma separated)", &listing.images, false, listing.focus == 0, &theme);
            render_summary(frame, rows[4], listing, &theme);
        }
    }

    if let Some(credits) = listing.estimated_credits() {
        let line = Line::from(vec![
            Span::styled("Estimated payout", Style::default().fg(theme.text_muted)),
            Span::raw(": "),
            Span::styled(
                credits.to_string(),
                Style::default()
                    .fg(theme.positive)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), rows[5]);
    }

    if let Some(message) = &listing.message {
        frame.render_widget(
            Paragraph::new(Span::styled(
                message.as_str(),
                Style::default().fg(theme.error),
            )),
            rows[6],
        );
    }
}

fn render_field(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &str,
    value: &str,
    cycles: bool,
    focused: bool,
    theme: &Theme,
) {
    let marker = if focused { "› " } else { "  " };
    let shown = if cycles {
        format!("‹ {value} ›")
    } else if focused {
        format!("{value}│")
    } else {
        value.to_string()
    };

    let value_style = if focused {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };

    let line = Line::from(vec![
        Span::styled(marker, Style::default().fg(theme.accent)),
        Span::styled(format!("{label:<26}"), Style::default().fg(theme.text_muted)),
        Span::styled(shown, value_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_summary(frame: &mut Frame<'_>, area: Rect, listing: &ListingState, theme: &Theme) {
    let description = if listing.description.trim().is_empty() {
        "(default description)"
    } else {
        listing.description.as_str()
    };

    let quantity = format!("{} kg", listing.quantity.trim());
    let lines = vec![
        summary_line("Material", listing.material(), theme),
        summary_line("Quantity", &quantity, theme),
        summary_line("Quality", listing.quality.as_str(), theme),
        summary_line("Description", description, theme),
        summary_line("Location", listing.location.as_str(), theme),
        summary_line("Status", listing.status.as_str(), theme),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn summary_line<'a>(label: &'a str, value: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {label:<14}"), Style::default().fg(theme.text_muted)),
        Span::styled(value, Style::default().fg(theme.text)),
    ])
}
