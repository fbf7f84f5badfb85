use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{app::AppState, ui::theme::Theme};

/// Calculates a centered rect for the login box
fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let box_width = 40;
    let box_height = 6;
    let card_area = centered_box(box_width, box_height, area);

    // Clear the area behind the form
    frame.render_widget(Clear, card_area);

    let block = Block::default()
        .title(" Trash2Cash ")
        .title_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));

    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Prompt
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Username
        ])
        .margin(1)
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Turn your waste into wealth",
            Style::default().fg(theme.text_muted),
        )),
        rows[0],
    );

    let value = format!("{}│", state.login.username);
    frame.render_widget(
        Paragraph::new(Span::styled(value, Style::default().fg(theme.accent))),
        rows[2],
    );

    // Status or error line below the box
    if let Some(message) = &state.login.message {
        let message_area = Rect {
            x: card_area.x,
            y: card_area.y + card_area.height + 1,
            width: card_area.width,
            height: 1,
        };
        let color = if message.ends_with("...") {
            theme.text_muted
        } else {
            theme.error
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(color),
            )))
            .alignment(Alignment::Center),
            message_area,
        );
    }
}
