use engine::Tokens;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::Theme;

/// Creates a styled span for a signed token amount.
///
/// - Positive amounts: green with `+` prefix
/// - Negative amounts: red (negative sign shown)
/// - Zero: neutral text color
#[must_use]
pub fn styled_tokens(amount: i64, theme: &Theme) -> Span<'static> {
    let tokens = Tokens::new(amount);

    let (color, prefix) = if tokens.is_positive() {
        (theme.positive, "+")
    } else if tokens.is_negative() {
        (theme.error, "")
    } else {
        (theme.text, "")
    };

    Span::styled(format!("{prefix}{tokens}"), Style::default().fg(color))
}

/// Creates a styled span with bold modifier for emphasis (e.g., balances).
#[must_use]
pub fn styled_tokens_bold(amount: i64, theme: &Theme) -> Span<'static> {
    let tokens = Tokens::new(amount);

    let (color, prefix) = if tokens.is_positive() {
        (theme.positive, "+")
    } else if tokens.is_negative() {
        (theme.error, "")
    } else {
        (theme.text, "")
    };

    Span::styled(
        format!("{prefix}{tokens}"),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// Text-based progress bar, like `████████░░`, for the wallet balance ring.
#[must_use]
pub fn inline_progress_bar(ratio: f64, width: usize) -> String {
    let ratio = ratio.clamp(0.0, 1.0);
    let filled = ((ratio * width as f64) as usize).min(width);
    let empty = width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_amounts_carry_sign_prefix_and_color() {
        let theme = Theme::default();

        let credit = styled_tokens(40, &theme);
        assert_eq!(credit.content, "+40 T2C");
        assert_eq!(credit.style.fg, Some(theme.positive));

        let debit = styled_tokens(-60, &theme);
        assert_eq!(debit.content, "-60 T2C");
        assert_eq!(debit.style.fg, Some(theme.error));

        let zero = styled_tokens(0, &theme);
        assert_eq!(zero.content, "0 T2C");
        assert_eq!(zero.style.fg, Some(theme.text));
    }

    #[test]
    fn bold_variant_keeps_the_amount_and_adds_emphasis() {
        let theme = Theme::default();
        let balance = styled_tokens_bold(240, &theme);
        assert_eq!(balance.content, "+240 T2C");
        assert_eq!(balance.style.fg, Some(theme.positive));
        assert!(balance.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn progress_bar_clamps_out_of_range_ratios() {
        assert_eq!(inline_progress_bar(0.5, 10), "█████░░░░░");
        assert_eq!(inline_progress_bar(-1.0, 4), "░░░░");
        assert_eq!(inline_progress_bar(2.0, 4), "████");
    }
}
