//! Application shell and event handling
//!
//! Owns the terminal lifecycle, the screen state machine, and the
//! persistence port. The focal engine is purely reactive: this module is
//! the only caller of its mutators.

pub mod input;
pub mod state;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::book::Library;
use crate::config::Config;
use crate::config::progress::ProgressStore;
use crate::focal::FocalEngine;
use crate::theme::Theme;
use crate::ui;
use input::{PickerAction, ReaderAction, ResumeAction};
use state::{AppState, ResumeChoice, Screen};

/// How long the exit screen lingers before the app closes
const EXIT_DELAY: Duration = Duration::from_millis(1500);

/// Rows reserved around the focal window: header bar, footer bar, padding
const CHROME_ROWS: u16 = 4;

/// Viewport half-height for a terminal of the given row count
fn half_height_for(term_height: u16) -> usize {
    (term_height.saturating_sub(CHROME_ROWS) as usize / 2).max(1)
}

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Active color theme
    theme: Theme,

    /// Chapter sources, kept raw for re-wrapping on resize
    library: Library,

    /// Reading-position persistence port
    store: Box<dyn ProgressStore>,

    /// Current application state
    state: AppState,

    /// Wrap width the chapters are currently wrapped at
    wrap_width: usize,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config, library: Library, store: Box<dyn ProgressStore>) -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        let size = terminal.size()?;

        let wrap_width = config.wrap_width_for(size.width);
        let chapters = library.chapters(wrap_width);

        let engine = FocalEngine::new(
            chapters.first().map(|c| c.lines.clone()).unwrap_or_default(),
            0,
            half_height_for(size.height),
        );

        // A saved position referencing an unknown chapter is stale; treat
        // it as no saved progress at all.
        let saved = store.load().filter(|p| chapters.iter().any(|c| c.number == p.chapter));

        let state = AppState {
            screen: Screen::Splash,
            chapters,
            current_chapter: 0,
            engine,
            saved,
            resume_choice: ResumeChoice::default(),
            exit_entered: None,
        };

        Ok(Self { config, theme: Theme::default(), library, store, state, wrap_width, terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        let tick = Duration::from_millis(self.config.tick_rate_ms);

        loop {
            self.terminal.draw(|frame| {
                ui::draw(frame, &self.state, &self.theme);
            })?;

            if event::poll(tick)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key.code);
                    }
                    Event::Resize(width, height) => self.handle_resize(width, height),
                    _ => {}
                }
            }

            if let Some(entered) = self.state.exit_entered {
                if entered.elapsed() >= EXIT_DELAY {
                    break;
                }
            }
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Dispatch a key press to the current screen
    fn handle_key(&mut self, key: KeyCode) {
        match self.state.screen {
            Screen::Splash => {
                // Any key progresses from the splash
                self.state.screen = if self.state.saved.is_some() {
                    Screen::ResumePrompt
                } else {
                    Screen::Reading
                };
            }
            Screen::ResumePrompt => self.handle_resume_key(key),
            Screen::Reading => self.handle_reader_key(key),
            Screen::ChapterPicker => self.handle_picker_key(key),
            Screen::Exiting => {}
        }
    }

    fn handle_resume_key(&mut self, key: KeyCode) {
        match input::resume_action(key) {
            Some(ResumeAction::Toggle) => self.state.resume_choice.toggle(),
            Some(ResumeAction::Confirm) => match self.state.resume_choice {
                ResumeChoice::Resume => self.resume_saved(),
                ResumeChoice::StartFresh => self.start_fresh(),
            },
            Some(ResumeAction::Resume) => self.resume_saved(),
            Some(ResumeAction::StartFresh) => self.start_fresh(),
            None => {}
        }
    }

    fn handle_reader_key(&mut self, key: KeyCode) {
        match input::reader_action(key) {
            Some(ReaderAction::NextLine) => {
                if self.state.engine.move_focus(1) {
                    self.save_position();
                } else if self.state.current_chapter + 1 < self.state.chapters.len() {
                    // Reading past the last line rolls into the next chapter
                    self.open_chapter(self.state.current_chapter + 1, 0);
                }
            }
            Some(ReaderAction::PrevLine) => {
                if self.state.engine.move_focus(-1) {
                    self.save_position();
                } else if self.state.current_chapter > 0 {
                    // Backing off the first line rolls to the previous
                    // chapter's last line
                    let prev = self.state.current_chapter - 1;
                    let last = self.state.chapters[prev].last_line();
                    self.open_chapter(prev, last);
                }
            }
            Some(ReaderAction::NextChapter) => {
                if self.state.current_chapter + 1 < self.state.chapters.len() {
                    self.open_chapter(self.state.current_chapter + 1, 0);
                }
            }
            Some(ReaderAction::PrevChapter) => {
                if self.state.current_chapter > 0 {
                    self.open_chapter(self.state.current_chapter - 1, 0);
                }
            }
            Some(ReaderAction::OpenPicker) => self.state.screen = Screen::ChapterPicker,
            Some(ReaderAction::Quit) => {
                self.state.screen = Screen::Exiting;
                self.state.exit_entered = Some(Instant::now());
            }
            None => {}
        }
    }

    fn handle_picker_key(&mut self, key: KeyCode) {
        match input::picker_action(key) {
            Some(PickerAction::Select(number)) => {
                if let Some(index) =
                    self.state.chapters.iter().position(|c| c.number == number)
                {
                    self.open_chapter(index, 0);
                    self.state.screen = Screen::Reading;
                }
            }
            Some(PickerAction::Close) => self.state.screen = Screen::Reading,
            None => {}
        }
    }

    /// Resume from the saved position
    fn resume_saved(&mut self) {
        if let Some(saved) = self.state.saved {
            let index = self
                .state
                .chapters
                .iter()
                .position(|c| c.number == saved.chapter)
                .unwrap_or(0);
            // The engine clamps the line against the current wrapping
            self.state.open_chapter(index, saved.line);
        }
        self.state.screen = Screen::Reading;
    }

    /// Discard saved progress and start from the beginning
    fn start_fresh(&mut self) {
        self.store.clear();
        self.state.open_chapter(0, 0);
        self.state.screen = Screen::Reading;
    }

    /// Switch chapters and persist the new position
    fn open_chapter(&mut self, index: usize, line: usize) {
        if self.state.open_chapter(index, line) {
            tracing::debug!("Opened chapter {}", index + 1);
            self.save_position();
        }
    }

    fn save_position(&mut self) {
        self.store.save(self.state.position());
    }

    /// React to a terminal resize: new viewport height, and a re-wrap of
    /// every chapter when the usable width changed
    fn handle_resize(&mut self, width: u16, height: u16) {
        self.state.engine.resize(half_height_for(height));

        let wrap_width = self.config.wrap_width_for(width);
        if wrap_width != self.wrap_width {
            self.wrap_width = wrap_width;
            let focal = self.state.engine.focal_index();
            self.state.chapters = self.library.chapters(wrap_width);
            if let Some(chapter) = self.state.chapters.get(self.state.current_chapter) {
                self.state.engine.set_content(chapter.lines.clone(), focal);
            }
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
