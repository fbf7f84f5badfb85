use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Paragraph, Sparkline},
};

use crate::ui::theme::Theme;

/// Renders a list of labeled horizontal bars, one row per entry.
///
/// Each row looks like `Plastic     ████████░░░░  340`. Bars are scaled
/// against the largest value in the set.
pub fn render_labeled_bars(
    frame: &mut Frame<'_>,
    area: Rect,
    data: &[(String, u64)],
    theme: &Theme,
) {
    let max = data.iter().map(|(_, v)| *v).max().unwrap_or(0);
    let label_width = data.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let bar_width = (area.width as usize)
        .saturating_sub(label_width + 10)
        .clamp(6, 24);

    let lines: Vec<Line<'_>> = data
        .iter()
        .map(|(name, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{name:<label_width$}  "),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    ascii_bar(*value, max, bar_width),
                    Style::default().fg(theme.accent),
                ),
                Span::styled(
                    format!("  {value}"),
                    Style::default()
                        .fg(theme.text)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Renders an inline sparkline without borders (for embedding in other
/// widgets).
pub fn render_inline_sparkline(frame: &mut Frame<'_>, area: Rect, data: &[u64], theme: &Theme) {
    let sparkline = Sparkline::default()
        .data(data)
        .style(Style::default().fg(theme.accent));

    frame.render_widget(sparkline, area);
}

/// Creates a simple ASCII-based horizontal bar for inline use.
///
/// Returns a string like `████████░░░░░░░░░░░░` representing the ratio.
#[must_use]
pub fn ascii_bar(value: u64, max: u64, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }

    let ratio = (value as f64 / max as f64).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64) as usize).min(width);
    let empty = width.saturating_sub(filled);

    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Creates a mini bar chart representation as a string.
///
/// Returns something like `▁▂▃▅▇▅▃▂▁` for a series of values.
#[must_use]
pub fn mini_bar_chart(values: &[u64]) -> String {
    if values.is_empty() {
        return String::new();
    }

    let max = *values.iter().max().unwrap_or(&1);
    if max == 0 {
        return " ".repeat(values.len());
    }

    let bars = [
        symbols::bar::ONE_EIGHTH,
        symbols::bar::ONE_QUARTER,
        symbols::bar::THREE_EIGHTHS,
        symbols::bar::HALF,
        symbols::bar::FIVE_EIGHTHS,
        symbols::bar::THREE_QUARTERS,
        symbols::bar::SEVEN_EIGHTHS,
        symbols::bar::FULL,
    ];

    values
        .iter()
        .map(|&v| {
            if v == 0 {
                " "
            } else {
                let index = ((v as f64 / max as f64) * 7.0) as usize;
                bars[index.min(7)]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_bar_scales_against_max() {
        assert_eq!(ascii_bar(5, 10, 10), "█████░░░░░");
        assert_eq!(ascii_bar(10, 10, 10), "██████████");
        assert_eq!(ascii_bar(0, 10, 4), "░░░░");
    }

    #[test]
    fn ascii_bar_handles_zero_max() {
        assert_eq!(ascii_bar(3, 0, 4), "░░░░");
    }

    #[test]
    fn mini_bar_chart_maps_extremes() {
        let chart = mini_bar_chart(&[0, 8]);
        assert_eq!(chart.chars().count(), 2);
        assert!(chart.starts_with(' '));
        assert!(chart.ends_with('█'));
    }
}
