use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub accent: Color,
    pub positive: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Recycled-green accent over a neutral dark palette.
        Self {
            text: Color::Rgb(220, 220, 220),
            text_muted: Color::Rgb(140, 140, 140),
            border: Color::Rgb(70, 80, 70),
            accent: Color::Rgb(100, 180, 110),
            positive: Color::Rgb(110, 200, 120),
            error: Color::Rgb(200, 80, 80),
        }
    }
}
