//! Resume prompt screen

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::{AppState, ResumeChoice};
use crate::theme::Theme;

const WORDMARK: &str = "\u{2016} FOVEA \u{2016}";

/// Draw the resume prompt
pub fn draw(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let chapter_title = state
        .saved
        .and_then(|saved| state.chapters.iter().find(|c| c.number == saved.chapter))
        .map_or_else(|| "Chapter 1".to_string(), |c| c.title.clone());

    let lines = vec![
        Line::from(Span::styled(
            WORDMARK,
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Previous session found",
            Style::default().fg(theme.focal_color(1)),
        )),
        Line::from(""),
        Line::from(Span::styled(chapter_title, Style::default().fg(theme.muted))),
        Line::from(""),
        Line::from(""),
        option_line("Resume reading", state.resume_choice == ResumeChoice::Resume, theme),
        Line::from(""),
        option_line("Start fresh", state.resume_choice == ResumeChoice::StartFresh, theme),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "\u{2191}\u{2193} select \u{2022} enter confirm",
            Style::default().fg(theme.dim),
        )),
    ];

    let area = super::vertical_center(frame.area(), lines.len() as u16);
    let prompt = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(prompt, area);
}

/// One selectable option with its marker
fn option_line(label: &str, selected: bool, theme: &Theme) -> Line<'static> {
    if selected {
        Line::from(vec![
            Span::styled("\u{25b8} ", Style::default().fg(theme.primary)),
            Span::styled(label.to_string(), Style::default().fg(theme.focal_color(0))),
        ])
    } else {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(label.to_string(), Style::default().fg(theme.muted)),
        ])
    }
}
