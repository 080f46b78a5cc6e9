//! Mode state machine.
//!
//! Consumes the ordered directive list and partitions the document into
//! content blocks, each tagged with the routing mode that was active
//! when its lines were seen. Directive lines themselves are excised.

use crate::lexicon::DirectiveKind;
use crate::scanner::DirectiveOccurrence;

/// Content-routing destination for a span of lines.
///
/// Unlike [`DirectiveKind`], this is the state a block can actually
/// carry: boundary signals are normalized away before emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RouteMode {
    /// Both slides and notes.
    #[default]
    All,
    /// Slides stream only.
    SlidesOnly,
    /// Notes stream only.
    NotesOnly,
}

impl RouteMode {
    /// Short human-readable label used in warnings.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::SlidesOnly => "slide-only",
            Self::NotesOnly => "notes-only",
        }
    }
}

/// A contiguous run of source lines sharing one routing mode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ContentBlock {
    /// The lines joined with newline, blank edges trimmed.
    pub text: String,
    /// Routing mode active for this span.
    pub mode: RouteMode,
    /// Inclusive 1-based first line (after blank-edge trimming).
    pub start_line: usize,
    /// Inclusive 1-based last line (after blank-edge trimming).
    pub end_line: usize,
}

/// Partition a document into content blocks.
///
/// Blocks come out in document order; all-blank spans are dropped. An
/// unbalanced document is not an error here: whatever mode is open at
/// end of input simply runs to the last line.
pub fn build_blocks(document: &str, occurrences: &[DirectiveOccurrence]) -> Vec<ContentBlock> {
    let lines: Vec<&str> = document.lines().collect();
    let mut blocks = Vec::new();
    let mut mode = RouteMode::All;
    let mut start = 1usize;

    // Synthetic terminal one line past the end flushes the final block
    let terminal = lines.len() + 1;

    for occ in occurrences {
        if occ.line > start {
            if let Some(block) = make_block(&lines, start, occ.line - 1, mode) {
                blocks.push(block);
            }
        }
        mode = match occ.kind {
            DirectiveKind::SlidesOnly => RouteMode::SlidesOnly,
            DirectiveKind::NotesOnly | DirectiveKind::NotesSlideBoundary => RouteMode::NotesOnly,
            DirectiveKind::All => RouteMode::All,
            // Pure boundary: new slide, same mode
            DirectiveKind::SlideBoundary => mode,
        };
        start = occ.line + 1;
    }

    if terminal > start {
        if let Some(block) = make_block(&lines, start, terminal - 1, mode) {
            blocks.push(block);
        }
    }

    blocks
}

/// Build one block over inclusive line bounds, trimming blank edges.
/// Returns `None` when the span is entirely blank.
fn make_block(lines: &[&str], start: usize, end: usize, mode: RouteMode) -> Option<ContentBlock> {
    let end = end.min(lines.len());
    if start > end {
        return None;
    }

    let mut first = start;
    let mut last = end;
    while first <= last && lines[first - 1].trim().is_empty() {
        first += 1;
    }
    while last >= first && lines[last - 1].trim().is_empty() {
        last -= 1;
    }
    if first > last {
        return None;
    }

    Some(ContentBlock {
        text: lines[first - 1..last].join("\n"),
        mode,
        start_line: first,
        end_line: last,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::scanner::scan;

    fn blocks_of(doc: &str) -> Vec<ContentBlock> {
        let (occurrences, _) = scan(doc);
        build_blocks(doc, &occurrences)
    }

    #[test]
    fn test_empty_document_no_blocks() {
        assert!(blocks_of("").is_empty());
    }

    #[test]
    fn test_no_directives_single_all_block() {
        let blocks = blocks_of("line one\nline two");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].mode, RouteMode::All);
        assert_eq!(blocks[0].text, "line one\nline two");
        assert_eq!((blocks[0].start_line, blocks[0].end_line), (1, 2));
    }

    #[test]
    fn test_mode_transitions() {
        let doc = "# T\n<!-- SLIDE-ONLY -->\nA\n<!-- NOTES-ONLY -->\nB\n<!-- ALL -->\nC";
        let blocks = blocks_of(doc);
        let modes: Vec<_> = blocks.iter().map(|b| b.mode).collect();
        assert_eq!(
            modes,
            vec![
                RouteMode::All,
                RouteMode::SlidesOnly,
                RouteMode::NotesOnly,
                RouteMode::All
            ]
        );
        let texts: Vec<_> = blocks.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, vec!["# T", "A", "B", "C"]);
    }

    #[test]
    fn test_notes_boundary_switches_to_notes_only() {
        let blocks = blocks_of("intro\n<!-- NOTES -->\ndetail");
        assert_eq!(blocks[1].mode, RouteMode::NotesOnly);
    }

    #[test]
    fn test_unclosed_mode_runs_to_end() {
        let blocks = blocks_of("a\n<!-- NOTES-ONLY -->\nb\nc");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].mode, RouteMode::NotesOnly);
        assert_eq!(blocks[1].text, "b\nc");
    }

    #[test]
    fn test_directive_line_excised() {
        let blocks = blocks_of("a\n<!-- ALL -->\nb");
        for block in &blocks {
            assert!(!block.text.contains("<!--"));
        }
    }

    #[test]
    fn test_blank_edges_trimmed() {
        let blocks = blocks_of("\n\na\n\n<!-- SLIDE-ONLY -->\n\nb\n\n");
        assert_eq!(blocks[0].text, "a");
        assert_eq!((blocks[0].start_line, blocks[0].end_line), (3, 3));
        assert_eq!(blocks[1].text, "b");
        assert_eq!((blocks[1].start_line, blocks[1].end_line), (7, 7));
    }

    #[test]
    fn test_all_blank_span_dropped() {
        let blocks = blocks_of("a\n<!-- SLIDE-ONLY -->\n\n\n<!-- ALL -->\nb");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text, "a");
        assert_eq!(blocks[1].text, "b");
    }

    #[test]
    fn test_adjacent_directives_no_empty_block() {
        let blocks = blocks_of("<!-- SLIDE-ONLY -->\n<!-- ALL -->\nx");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].mode, RouteMode::All);
    }

    #[test]
    fn test_document_starting_with_directive() {
        let blocks = blocks_of("<!-- NOTES-ONLY -->\nonly notes");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].mode, RouteMode::NotesOnly);
        assert_eq!((blocks[0].start_line, blocks[0].end_line), (2, 2));
    }

    #[test]
    fn test_coverage_no_gaps_no_overlaps() {
        let doc = "a\nb\n<!-- SLIDE-ONLY -->\nc\n<!-- NOTES -->\nd\ne\n<!-- ALL -->\nf";
        let blocks = blocks_of(doc);
        let mut covered = Vec::new();
        for block in &blocks {
            for l in block.start_line..=block.end_line {
                covered.push(l);
            }
        }
        // Every non-directive, non-blank line exactly once, in order
        assert_eq!(covered, vec![1, 2, 4, 6, 7, 9]);
        let mut sorted = covered.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(covered, sorted);
    }
}
