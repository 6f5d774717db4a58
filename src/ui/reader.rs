//! Reader screen: the focal window with header and footer chrome

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::AppState;
use crate::emphasis::EmphasisKind;
use crate::focal::{FOCAL_PREFIX, FOCAL_SUFFIX, PERIPHERAL_PAD, RenderedRow, RowKind};
use crate::theme::Theme;

/// Draw the reader screen
pub fn draw(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let [header, content, footer] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)])
            .areas(frame.area());

    draw_header(frame, header, state, theme);
    draw_window(frame, content, state, theme);
    draw_footer(frame, footer, state, theme);
}

/// Header bar: chapter title left, chapter counter right
fn draw_header(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let title = state.chapter().map_or_else(String::new, |c| c.title.clone());
    let left = format!(" {}", title);
    let right = format!("Chapter {}/{} ", state.current_chapter + 1, state.chapters.len());

    frame.render_widget(Paragraph::new(spread_line(&left, &right, area.width, theme)), area);
}

/// The focal window itself, vertically centered in the content area
fn draw_window(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let rows = state.engine.render();
    let lines: Vec<Line> = rows.iter().map(|row| row_line(row, theme)).collect();

    let target = super::vertical_center(area, lines.len() as u16);
    let window = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(window, target);
}

/// Footer bar: key help left, progress percentage right
fn draw_footer(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let key = Style::default().fg(theme.primary);
    let sep = Style::default().fg(theme.muted);

    let mut spans = vec![
        Span::styled(" space", key),
        Span::styled("/", sep),
        Span::styled("\u{2193}", key),
        Span::styled("  ", sep),
        Span::styled("enter", key),
        Span::styled("/", sep),
        Span::styled("\u{2191}", key),
        Span::styled("  ", sep),
        Span::styled("\u{2190}\u{2192}", key),
        Span::styled(": chapter  ", sep),
        Span::styled("c", key),
        Span::styled(": list  ", sep),
        Span::styled("q", key),
        Span::styled(": quit", sep),
    ];

    let right = format!("{}% ", state.engine.progress_percent());
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let gap = (area.width as usize).saturating_sub(used + right.chars().count());
    spans.push(Span::raw(" ".repeat(gap)));
    spans.push(Span::styled(right, Style::default().fg(theme.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Build a one-line bar with `left` and `right` pushed to the edges
fn spread_line(left: &str, right: &str, width: u16, theme: &Theme) -> Line<'static> {
    let gap = (width as usize)
        .saturating_sub(left.chars().count() + right.chars().count());
    Line::from(vec![
        Span::styled(left.to_string(), Style::default().fg(theme.muted)),
        Span::raw(" ".repeat(gap)),
        Span::styled(right.to_string(), Style::default().fg(theme.dim)),
    ])
}

/// Map one rendered row to a styled terminal line
///
/// Only the focal row carries the bracket markers; peripheral prose gets
/// matching blank padding so text stays column-aligned as focus moves.
fn row_line(row: &RenderedRow, theme: &Theme) -> Line<'static> {
    let fade = Style::default().fg(theme.focal_color(row.tier));

    match &row.kind {
        RowKind::Blank => Line::from(""),
        RowKind::Title { text } => Line::from(Span::styled(
            text.clone(),
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )),
        RowKind::Header { text } => {
            Line::from(Span::styled(text.clone(), fade.add_modifier(Modifier::BOLD)))
        }
        RowKind::Focal { segments } => {
            let mut spans =
                vec![Span::styled(FOCAL_PREFIX, Style::default().fg(theme.dim))];
            for segment in segments {
                let style = match segment.kind {
                    EmphasisKind::Plain => Style::default().fg(theme.focal_color(0)),
                    EmphasisKind::Bold => {
                        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
                    }
                    EmphasisKind::Italic => {
                        Style::default().fg(theme.accent).add_modifier(Modifier::ITALIC)
                    }
                };
                spans.push(Span::styled(segment.text.clone(), style));
            }
            spans.push(Span::styled(FOCAL_SUFFIX, Style::default().fg(theme.dim)));
            Line::from(spans)
        }
        RowKind::Faded { text } => Line::from(Span::styled(
            format!("{}{}{}", PERIPHERAL_PAD, text, PERIPHERAL_PAD),
            fade,
        )),
    }
}
