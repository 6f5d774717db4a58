//! Fovea - a focal-line terminal reader
//!
//! Fovea renders a document as a window of lines around a single focal
//! line, fading the periphery by distance to hold the reader's attention,
//! and remembers where you left off between sessions.

pub mod app;
pub mod book;
pub mod config;
pub mod emphasis;
pub mod focal;
pub mod theme;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use theme::Theme;
