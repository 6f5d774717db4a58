//! UI rendering components

pub mod exit;
pub mod picker;
pub mod reader;
pub mod resume;
pub mod splash;

use ratatui::{Frame, layout::Rect};

use crate::app::state::{AppState, Screen};
use crate::theme::Theme;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState, theme: &Theme) {
    match state.screen {
        Screen::Splash => splash::draw(frame, theme),
        Screen::ResumePrompt => resume::draw(frame, state, theme),
        Screen::Reading => reader::draw(frame, state, theme),
        Screen::ChapterPicker => picker::draw(frame, state, theme),
        Screen::Exiting => exit::draw(frame, theme),
    }
}

/// Center a fixed-height block vertically within `area`
pub(crate) fn vertical_center(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let top = area.height.saturating_sub(height) / 2;
    Rect { x: area.x, y: area.y + top, width: area.width, height }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_center_splits_slack_evenly() {
        let area = Rect { x: 0, y: 0, width: 80, height: 24 };
        let centered = vertical_center(area, 10);
        assert_eq!(centered.y, 7);
        assert_eq!(centered.height, 10);
    }

    #[test]
    fn vertical_center_clamps_oversized_content() {
        let area = Rect { x: 0, y: 3, width: 80, height: 5 };
        let centered = vertical_center(area, 10);
        assert_eq!(centered.y, 3);
        assert_eq!(centered.height, 5);
    }
}
