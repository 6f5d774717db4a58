//! Event handling utilities
//!
//! Pure key-to-action tables, one per screen that takes input, kept free
//! of state so they are trivially testable.

use crossterm::event::KeyCode;

/// Actions available on the reading screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderAction {
    NextLine,
    PrevLine,
    NextChapter,
    PrevChapter,
    OpenPicker,
    Quit,
}

/// Reading-screen key map
pub fn reader_action(key: KeyCode) -> Option<ReaderAction> {
    match key {
        KeyCode::Char('j') | KeyCode::Char(' ') | KeyCode::Down => Some(ReaderAction::NextLine),
        KeyCode::Char('k') | KeyCode::Up | KeyCode::Enter => Some(ReaderAction::PrevLine),
        KeyCode::Char('n') | KeyCode::Right => Some(ReaderAction::NextChapter),
        KeyCode::Char('p') | KeyCode::Left => Some(ReaderAction::PrevChapter),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(ReaderAction::OpenPicker),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(ReaderAction::Quit),
        _ => None,
    }
}

/// Actions available on the resume prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeAction {
    /// Move between the two options
    Toggle,
    /// Confirm the highlighted option
    Confirm,
    /// Shortcut: resume directly
    Resume,
    /// Shortcut: start fresh directly
    StartFresh,
}

/// Resume-prompt key map
pub fn resume_action(key: KeyCode) -> Option<ResumeAction> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('k') => {
            Some(ResumeAction::Toggle)
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(ResumeAction::Confirm),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(ResumeAction::Resume),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(ResumeAction::StartFresh),
        _ => None,
    }
}

/// Actions available in the chapter picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    /// Jump to the chapter with this 1-based number
    Select(usize),
    Close,
}

/// Chapter-picker key map; `Select` still needs range-checking by the caller
pub fn picker_action(key: KeyCode) -> Option<PickerAction> {
    match key {
        KeyCode::Esc => Some(PickerAction::Close),
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|&d| d >= 1)
            .map(|d| PickerAction::Select(d as usize)),
        _ => None,
    }
}
