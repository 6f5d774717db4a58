//! Inline emphasis tokenizer
//!
//! Scans a single display line for `**bold**` and `*italic*` spans and
//! produces ordered segments. The focal line styles each segment kind
//! distinctly; peripheral lines use [`flatten`], a pure projection over
//! the same segments, so both views always agree on span boundaries.

use once_cell::sync::Lazy;
use regex::Regex;

/// Bold span: `**` pair around non-empty content with no inner asterisks
static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

/// Italic span candidate; adjacency to other asterisks is checked separately
static ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());

/// Styling class of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisKind {
    Plain,
    Bold,
    Italic,
}

/// A run of text with one styling class
///
/// Concatenating segment texts reconstructs the line with matched markers
/// removed; unmatched markers stay literal inside `Plain` segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmphasisSegment {
    pub text: String,
    pub kind: EmphasisKind,
}

impl EmphasisSegment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: EmphasisKind::Plain }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: EmphasisKind::Bold }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: EmphasisKind::Italic }
    }
}

/// Tokenize one line into emphasis segments
///
/// Spans are matched left to right, non-overlapping, leftmost first; a
/// bold and an italic candidate starting at the same offset resolve to
/// bold. Unterminated markers are literal text, and a span never pairs a
/// `**` marker with a lone `*`.
pub fn tokenize(line: &str) -> Vec<EmphasisSegment> {
    let mut segments = Vec::new();
    let mut pos = 0;

    while pos < line.len() {
        let bold = BOLD_RE.find_at(line, pos).map(|m| (m.start(), m.end()));
        let italic = find_italic(line, pos);

        let next = match (bold, italic) {
            (Some(b), Some(i)) if b.0 <= i.0 => Some((b, EmphasisKind::Bold)),
            (_, Some(i)) => Some((i, EmphasisKind::Italic)),
            (Some(b), None) => Some((b, EmphasisKind::Bold)),
            (None, None) => None,
        };

        let Some(((start, end), kind)) = next else {
            break;
        };

        if start > pos {
            segments.push(EmphasisSegment::plain(&line[pos..start]));
        }

        let marker_len = if kind == EmphasisKind::Bold { 2 } else { 1 };
        segments.push(EmphasisSegment {
            text: line[start + marker_len..end - marker_len].to_string(),
            kind,
        });

        pos = end;
    }

    if pos < line.len() {
        segments.push(EmphasisSegment::plain(&line[pos..]));
    }

    segments
}

/// Find the next italic span at or after `from`
///
/// A `*` adjacent to another `*` can neither open nor close an italic
/// span; such candidates are skipped so a dangling `**` never donates
/// half of itself to an italic match.
fn find_italic(line: &str, from: usize) -> Option<(usize, usize)> {
    let bytes = line.as_bytes();
    let mut search = from;

    while let Some(m) = ITALIC_RE.find_at(line, search) {
        let open_paired = m.start() > 0 && bytes[m.start() - 1] == b'*';
        let close_paired = m.end() < bytes.len() && bytes[m.end()] == b'*';
        if !open_paired && !close_paired {
            return Some((m.start(), m.end()));
        }
        // The match starts on an ASCII '*', so +1 stays on a char boundary
        search = m.start() + 1;
    }

    None
}

/// Collapse segments to their content text, markers already removed
///
/// This is the peripheral-line view: no style distinctions, but the same
/// character content the focal view would show.
pub fn flatten(segments: &[EmphasisSegment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

/// Tokenize and flatten in one call
pub fn flatten_line(line: &str) -> String {
    flatten(&tokenize(line))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn mixed_line_tokenizes_into_five_segments() {
        let segments = tokenize("plain **bold** and *italic* text");
        assert_eq!(
            segments,
            vec![
                EmphasisSegment::plain("plain "),
                EmphasisSegment::bold("bold"),
                EmphasisSegment::plain(" and "),
                EmphasisSegment::italic("italic"),
                EmphasisSegment::plain(" text"),
            ]
        );
    }

    #[test]
    fn line_without_markup_is_one_plain_segment() {
        let segments = tokenize("no emphasis here");
        assert_eq!(segments, vec![EmphasisSegment::plain("no emphasis here")]);
    }

    #[test]
    fn empty_line_yields_no_segments() {
        assert_eq!(tokenize(""), Vec::new());
    }

    #[test]
    fn bold_at_line_start_and_end() {
        let segments = tokenize("**start** middle **end**");
        assert_eq!(
            segments,
            vec![
                EmphasisSegment::bold("start"),
                EmphasisSegment::plain(" middle "),
                EmphasisSegment::bold("end"),
            ]
        );
    }

    #[test]
    fn unterminated_bold_is_literal() {
        let segments = tokenize("**never closed");
        assert_eq!(segments, vec![EmphasisSegment::plain("**never closed")]);
    }

    #[test]
    fn unterminated_italic_is_literal() {
        let segments = tokenize("a *dangling marker");
        assert_eq!(segments, vec![EmphasisSegment::plain("a *dangling marker")]);
    }

    #[test]
    fn mismatched_markers_produce_no_span() {
        // Bold opened, closed by a single asterisk only: both stay literal,
        // and the second '*' of the opener must not start an italic span.
        let segments = tokenize("**a* not-closed");
        assert_eq!(segments, vec![EmphasisSegment::plain("**a* not-closed")]);
    }

    #[test]
    fn empty_span_content_is_not_a_span() {
        let segments = tokenize("a **** b");
        assert_eq!(segments, vec![EmphasisSegment::plain("a **** b")]);
    }

    #[test]
    fn earlier_span_wins_regardless_of_kind() {
        let segments = tokenize("*first* then **second**");
        assert_eq!(segments[0], EmphasisSegment::italic("first"));
        assert_eq!(segments[2], EmphasisSegment::bold("second"));
    }

    #[test]
    fn flatten_strips_matched_markers_only() {
        let line = "plain **bold** and *italic* text";
        assert_eq!(flatten_line(line), "plain bold and italic text");
    }

    #[test]
    fn flatten_preserves_mismatched_markers() {
        // No matched pair existed, so nothing is stripped
        assert_eq!(flatten_line("**a* not-closed"), "**a* not-closed");
    }

    #[test]
    fn flatten_agrees_with_tokenize_boundaries() {
        let line = "mix of **b** and *i* plus *open";
        let segments = tokenize(line);
        let rebuilt: String = segments
            .iter()
            .map(|s| match s.kind {
                EmphasisKind::Plain => s.text.clone(),
                EmphasisKind::Bold => format!("**{}**", s.text),
                EmphasisKind::Italic => format!("*{}*", s.text),
            })
            .collect();
        assert_eq!(rebuilt, line, "segments must reconstruct the source line");
        assert_eq!(flatten(&segments), "mix of b and i plus *open");
    }

    #[test]
    fn adjacent_italic_spans() {
        let segments = tokenize("*a* *b*");
        assert_eq!(
            segments,
            vec![
                EmphasisSegment::italic("a"),
                EmphasisSegment::plain(" "),
                EmphasisSegment::italic("b"),
            ]
        );
    }

    #[test]
    fn multibyte_text_around_spans() {
        let segments = tokenize("célèbre **gras** et *italique* fin");
        assert_eq!(
            segments,
            vec![
                EmphasisSegment::plain("célèbre "),
                EmphasisSegment::bold("gras"),
                EmphasisSegment::plain(" et "),
                EmphasisSegment::italic("italique"),
                EmphasisSegment::plain(" fin"),
            ]
        );
    }
}
