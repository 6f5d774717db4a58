//! Chapter loading and the display-line model

pub mod library;
pub mod markdown;
pub mod model;

pub use library::Library;
pub use model::{Chapter, DisplayLine};
