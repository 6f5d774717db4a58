//! Chapter picker modal

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::state::AppState;
use crate::theme::Theme;

/// Draw the chapter picker as a centered modal
pub fn draw(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let area = frame.area();
    let modal = modal_area(area, state.chapters.len() as u16);

    let block = Block::default()
        .title(Span::styled(
            " Chapters ",
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted));

    let inner = block.inner(modal);
    frame.render_widget(Clear, modal);
    frame.render_widget(block, modal);

    let mut lines: Vec<Line> = state
        .chapters
        .iter()
        .enumerate()
        .map(|(index, chapter)| {
            let current = index == state.current_chapter;
            let marker = if current { "\u{25b6}" } else { " " };
            let color = if current { theme.accent } else { theme.focal_color(1) };
            Line::from(Span::styled(
                format!(" {} {}. {}", marker, chapter.number, chapter.title),
                Style::default().fg(color),
            ))
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            format!("1-{} to select | Esc to close", state.chapters.len()),
            Style::default().fg(theme.dim),
        ))
        .alignment(Alignment::Center),
    );

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Size and center the modal for a given chapter count
fn modal_area(area: Rect, chapter_count: u16) -> Rect {
    let width = 50.min(area.width.saturating_sub(4).max(1));
    // Chapters + blank + hint, plus the border rows
    let height = (chapter_count + 4).min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect { x, y, width, height }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_is_centered_in_the_terminal() {
        let area = Rect { x: 0, y: 0, width: 80, height: 24 };
        let modal = modal_area(area, 5);
        assert_eq!(modal.width, 50);
        assert_eq!(modal.height, 9);
        assert_eq!(modal.x, 15);
        assert_eq!(modal.y, 7);
    }

    #[test]
    fn modal_shrinks_to_fit_small_terminals() {
        let area = Rect { x: 0, y: 0, width: 30, height: 6 };
        let modal = modal_area(area, 5);
        assert!(modal.width <= 30);
        assert!(modal.height <= 6);
    }
}
