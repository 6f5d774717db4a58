//! Chapter text parsing
//!
//! Converts raw chapter markdown into the display-line sequence: headers
//! are recognized and kept unwrapped, prose is word-wrapped to a fixed
//! width, and blank lines survive 1:1 so paragraph spacing is preserved.

use textwrap::{Options, WordSplitter};

use super::model::{Chapter, DisplayLine};

/// Default prose wrap width in columns
pub const DEFAULT_WRAP_WIDTH: usize = 70;

/// Marker that makes a line a header
const HEADER_MARKER: &str = "# ";

/// Parse raw chapter text into display lines
///
/// Leading and trailing blank lines are trimmed; everything between maps
/// to output lines in order. Wrapping never breaks inside a word and never
/// hyphenates, so a single word longer than `wrap_width` stays whole.
pub fn parse_chapter(raw: &str, wrap_width: usize) -> Vec<DisplayLine> {
    let all: Vec<&str> = raw.lines().collect();

    let Some(first) = all.iter().position(|l| !l.trim().is_empty()) else {
        return Vec::new();
    };
    let Some(last) = all.iter().rposition(|l| !l.trim().is_empty()) else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    for raw_line in &all[first..=last] {
        let trimmed = raw_line.trim();

        if trimmed.is_empty() {
            lines.push(DisplayLine::Blank);
        } else if let Some(text) = trimmed.strip_prefix(HEADER_MARKER) {
            lines.push(DisplayLine::Header(text.to_string()));
        } else {
            lines.extend(wrap_prose(trimmed, wrap_width));
        }
    }

    lines
}

/// Word-wrap one prose line
///
/// A line whose wrapping yields no non-empty fragments degenerates to a
/// single blank line so vertical spacing survives.
fn wrap_prose(text: &str, wrap_width: usize) -> Vec<DisplayLine> {
    let options = Options::new(wrap_width.max(1))
        .break_words(false)
        .word_splitter(WordSplitter::NoHyphenation);

    let wrapped: Vec<DisplayLine> = textwrap::wrap(text, options)
        .into_iter()
        .filter(|fragment| !fragment.trim().is_empty())
        .map(|fragment| DisplayLine::Prose(fragment.into_owned()))
        .collect();

    if wrapped.is_empty() { vec![DisplayLine::Blank] } else { wrapped }
}

/// Title of a line sequence: the first header's text
pub fn chapter_title(lines: &[DisplayLine]) -> Option<&str> {
    lines.iter().find_map(|line| match line {
        DisplayLine::Header(text) => Some(text.as_str()),
        _ => None,
    })
}

/// Parse raw text into a complete chapter
///
/// A chapter without a header gets a synthesized `Chapter N` title; an
/// empty document yields a chapter with an empty line sequence, which the
/// engine renders as an all-blank window.
pub fn load_chapter(raw: &str, number: usize, source_id: &str, wrap_width: usize) -> Chapter {
    let lines = parse_chapter(raw, wrap_width);
    let title = chapter_title(&lines)
        .map_or_else(|| format!("Chapter {}", number), ToString::to_string);
    Chapter::new(number, title, source_id, lines)
}
