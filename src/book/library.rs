//! Content directory discovery
//!
//! A library is a directory of per-chapter markdown files. Filenames are
//! sorted lexicographically and that order fixes chapter numbering 1..N.
//! Raw text is retained so chapters can be re-wrapped when the terminal
//! width changes.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::markdown;
use super::model::{Chapter, DisplayLine};

/// Shown in place of a chapter whose source could not be read
const MISSING_CONTENT: &str = "Content not found";

/// One chapter source, kept in raw form
#[derive(Debug, Clone)]
struct Source {
    /// Source filename, used as the chapter's identifier
    id: String,
    /// Raw file contents; `None` when the file was unreadable
    text: Option<String>,
}

/// An ordered collection of chapter sources
#[derive(Debug, Clone)]
pub struct Library {
    sources: Vec<Source>,
}

impl Library {
    /// Open a content directory
    ///
    /// Fails only when the directory itself cannot be read; an individual
    /// unreadable file degrades to a placeholder chapter instead.
    pub fn open(dir: &Path) -> Result<Self> {
        let mut paths: Vec<PathBuf> = fs::read_dir(dir)
            .with_context(|| format!("Failed to read content directory: {}", dir.display()))?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
            .collect();

        // Sort by filename for stable chapter numbering
        paths.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));

        let sources = paths
            .iter()
            .map(|path| {
                let id = path.file_name().map_or_else(
                    || "chapter.md".to_string(),
                    |name| name.to_string_lossy().to_string(),
                );
                let text = match fs::read_to_string(path) {
                    Ok(text) => Some(text),
                    Err(e) => {
                        tracing::debug!("Unreadable chapter source {}: {}", path.display(), e);
                        None
                    }
                };
                Source { id, text }
            })
            .collect();

        Ok(Self { sources })
    }

    /// Number of chapters in the library
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the library holds no chapters
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Wrap every source into a chapter at the given width
    pub fn chapters(&self, wrap_width: usize) -> Vec<Chapter> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, source)| {
                let number = i + 1;
                match &source.text {
                    Some(raw) => markdown::load_chapter(raw, number, &source.id, wrap_width),
                    None => placeholder_chapter(number, &source.id),
                }
            })
            .collect()
    }
}

/// Stand-in chapter for an unreadable source
fn placeholder_chapter(number: usize, source_id: &str) -> Chapter {
    Chapter::new(
        number,
        format!("Chapter {}", number),
        source_id,
        vec![DisplayLine::Prose(MISSING_CONTENT.to_string())],
    )
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write_chapter(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn chapters_are_numbered_in_filename_order() {
        let dir = tempfile::tempdir().unwrap();
        write_chapter(dir.path(), "02-second.md", "# Second");
        write_chapter(dir.path(), "01-first.md", "# First");
        write_chapter(dir.path(), "03-third.md", "# Third");

        let library = Library::open(dir.path()).unwrap();
        let chapters = library.chapters(70);

        assert_eq!(chapters.len(), 3);
        assert_eq!(chapters[0].title, "First");
        assert_eq!(chapters[0].number, 1);
        assert_eq!(chapters[2].title, "Third");
        assert_eq!(chapters[2].number, 3);
    }

    #[test]
    fn non_markdown_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write_chapter(dir.path(), "01-first.md", "# First");
        write_chapter(dir.path(), "notes.txt", "not a chapter");
        write_chapter(dir.path(), "progress.json", "{}");

        let library = Library::open(dir.path()).unwrap();
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(Library::open(&missing).is_err());
    }

    #[test]
    fn empty_directory_yields_empty_library() {
        let dir = tempfile::tempdir().unwrap();
        let library = Library::open(dir.path()).unwrap();
        assert!(library.is_empty());
        assert!(library.chapters(70).is_empty());
    }

    #[test]
    fn rewrap_at_narrower_width_adds_lines() {
        let dir = tempfile::tempdir().unwrap();
        write_chapter(
            dir.path(),
            "01-first.md",
            "# Title\n\none two three four five six seven eight nine ten",
        );

        let library = Library::open(dir.path()).unwrap();
        let wide = library.chapters(70)[0].line_count();
        let narrow = library.chapters(12)[0].line_count();
        assert!(narrow > wide, "narrower wrap should produce more lines");
    }

    #[test]
    fn placeholder_chapter_has_content() {
        let chapter = placeholder_chapter(2, "02-gone.md");
        assert_eq!(chapter.number, 2);
        assert_eq!(chapter.lines, vec![DisplayLine::Prose(MISSING_CONTENT.to_string())]);
    }
}
