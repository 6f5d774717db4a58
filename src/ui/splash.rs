//! Splash screen

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::Theme;

const WORDMARK: &str = "\u{2016} FOVEA \u{2016}";
const TAGLINE: &str = "one line at a time";
const PROMPT: &str = "Press any key to begin";

/// Draw the splash screen
pub fn draw(frame: &mut Frame, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(
            WORDMARK,
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            TAGLINE,
            Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(PROMPT, Style::default().fg(theme.dim))),
    ];

    let area = super::vertical_center(frame.area(), lines.len() as u16);
    let splash = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(splash, area);
}
