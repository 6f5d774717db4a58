//! Exit screen, shown briefly before the app closes

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::Theme;

const GLYPH: &str = "\u{2016} \u{25c9} \u{2016}";
const SIGN_OFF: &str = "The page will keep your place.";

/// Draw the exit screen
pub fn draw(frame: &mut Frame, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(
            GLYPH,
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            SIGN_OFF,
            Style::default().fg(theme.focal_color(1)).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("...", Style::default().fg(theme.dim))),
    ];

    let area = super::vertical_center(frame.area(), lines.len() as u16);
    let farewell = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(farewell, area);
}
