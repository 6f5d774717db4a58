//! Application state definitions

use std::time::Instant;

use crate::book::model::Chapter;
use crate::config::progress::ReadingPosition;
use crate::focal::FocalEngine;

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Splash,
    ResumePrompt,
    Reading,
    ChapterPicker,
    Exiting,
}

/// The two resume-prompt options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResumeChoice {
    #[default]
    Resume,
    StartFresh,
}

impl ResumeChoice {
    /// Flip to the other option (the prompt only has two)
    pub fn toggle(&mut self) {
        *self = match self {
            ResumeChoice::Resume => ResumeChoice::StartFresh,
            ResumeChoice::StartFresh => ResumeChoice::Resume,
        };
    }
}

/// Full application state
pub struct AppState {
    /// Current screen
    pub screen: Screen,

    /// All chapters, wrapped at the current terminal width
    pub chapters: Vec<Chapter>,

    /// Index into `chapters` of the open chapter
    pub current_chapter: usize,

    /// The focal window engine for the open chapter
    pub engine: FocalEngine,

    /// Saved position found at startup, already validated against the
    /// chapter list; drives the resume prompt
    pub saved: Option<ReadingPosition>,

    /// Selection on the resume prompt
    pub resume_choice: ResumeChoice,

    /// When the exit screen was entered
    pub exit_entered: Option<Instant>,
}

impl AppState {
    /// The open chapter, if any
    pub fn chapter(&self) -> Option<&Chapter> {
        self.chapters.get(self.current_chapter)
    }

    /// Switch to the chapter at `index`, focusing `line` (clamped)
    ///
    /// Returns whether the index referred to a real chapter.
    pub fn open_chapter(&mut self, index: usize, line: usize) -> bool {
        let Some(chapter) = self.chapters.get(index) else {
            return false;
        };
        self.current_chapter = index;
        self.engine.set_content(chapter.lines.clone(), line);
        true
    }

    /// Current position as a persistable record
    pub fn position(&self) -> ReadingPosition {
        ReadingPosition::new(self.current_chapter + 1, self.engine.focal_index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::model::DisplayLine;

    fn test_state(chapter_sizes: &[usize]) -> AppState {
        let chapters: Vec<Chapter> = chapter_sizes
            .iter()
            .enumerate()
            .map(|(i, &n)| {
                let lines =
                    (0..n).map(|j| DisplayLine::Prose(format!("line {}", j))).collect();
                Chapter::new(i + 1, format!("Chapter {}", i + 1), format!("{:02}.md", i + 1), lines)
            })
            .collect();
        let engine = FocalEngine::new(
            chapters.first().map(|c| c.lines.clone()).unwrap_or_default(),
            0,
            2,
        );
        AppState {
            screen: Screen::Splash,
            chapters,
            current_chapter: 0,
            engine,
            saved: None,
            resume_choice: ResumeChoice::default(),
            exit_entered: None,
        }
    }

    #[test]
    fn resume_choice_toggles_between_the_two_options() {
        let mut choice = ResumeChoice::Resume;
        choice.toggle();
        assert_eq!(choice, ResumeChoice::StartFresh);
        choice.toggle();
        assert_eq!(choice, ResumeChoice::Resume);
    }

    #[test]
    fn open_chapter_switches_and_sets_focus() {
        let mut state = test_state(&[5, 8]);
        assert!(state.open_chapter(1, 3));
        assert_eq!(state.current_chapter, 1);
        assert_eq!(state.engine.focal_index(), 3);
    }

    #[test]
    fn open_chapter_clamps_the_requested_line() {
        let mut state = test_state(&[5, 3]);
        assert!(state.open_chapter(1, 99));
        assert_eq!(state.engine.focal_index(), 2);
    }

    #[test]
    fn open_chapter_rejects_out_of_range_index() {
        let mut state = test_state(&[5]);
        assert!(!state.open_chapter(7, 0));
        assert_eq!(state.current_chapter, 0);
    }

    #[test]
    fn position_uses_one_based_chapter_numbers() {
        let mut state = test_state(&[5, 8]);
        state.open_chapter(1, 4);
        let position = state.position();
        assert_eq!(position.chapter, 2);
        assert_eq!(position.line, 4);
    }
}
