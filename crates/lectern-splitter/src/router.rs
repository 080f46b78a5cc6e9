//! Block routing.
//!
//! Turns the ordered content blocks into the two final text streams and
//! inserts `---` slide separators where a boundary directive ended the
//! previous slide.

use crate::blocks::{ContentBlock, RouteMode};
use crate::scanner::DirectiveOccurrence;

/// Separator the external deck renderer treats as "new slide".
pub const SLIDE_SEPARATOR: &str = "---";

/// Route blocks into `(slides_text, notes_text)`.
///
/// A separator is inserted into the slides stream before the first
/// block past each boundary directive, but never as the leading unit
/// and never twice in a row. Blocks and separators are joined with a
/// blank line and each stream is trimmed.
pub fn route(blocks: &[ContentBlock], occurrences: &[DirectiveOccurrence]) -> (String, String) {
    // Lines of boundary directives, in document order
    let boundaries: Vec<usize> = occurrences
        .iter()
        .filter(|occ| occ.kind.is_boundary())
        .map(|occ| occ.line)
        .collect();

    let mut slides: Vec<&str> = Vec::new();
    let mut notes: Vec<&str> = Vec::new();
    let mut next_boundary = 0;
    let mut pending_break = false;

    for block in blocks {
        while next_boundary < boundaries.len() && boundaries[next_boundary] < block.start_line {
            pending_break = true;
            next_boundary += 1;
        }

        let to_slides = matches!(block.mode, RouteMode::All | RouteMode::SlidesOnly);
        if to_slides && pending_break {
            if !slides.is_empty() && slides.last().copied() != Some(SLIDE_SEPARATOR) {
                slides.push(SLIDE_SEPARATOR);
            }
            pending_break = false;
        }

        match block.mode {
            RouteMode::All => {
                slides.push(&block.text);
                notes.push(&block.text);
            }
            RouteMode::SlidesOnly => slides.push(&block.text),
            RouteMode::NotesOnly => notes.push(&block.text),
        }
    }

    (
        slides.join("\n\n").trim().to_owned(),
        notes.join("\n\n").trim().to_owned(),
    )
}
