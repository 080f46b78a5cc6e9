//! Directive scanning.
//!
//! Walks the document line by line, skipping fenced code blocks and
//! inline code spans, and produces the ordered list of directive
//! occurrences. A second pass flags comments that look like a directive
//! but match nothing in the lexicon, with a suggested correction.

use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::{self, DirectiveKind};
use crate::span::{FenceState, inline_code_spans, inside_any};

/// One matched directive comment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DirectiveOccurrence {
    /// Routing signal from the lexicon.
    pub kind: DirectiveKind,
    /// 1-based line number.
    pub line: usize,
    /// 0-based character offset within the line.
    pub column: usize,
    /// The matched comment, trimmed.
    pub raw_text: String,
}

/// A comment that resembles a directive but matches no lexicon entry.
///
/// Advisory only; never affects splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MalformedDirective {
    /// The comment as written.
    pub raw_text: String,
    /// 1-based line number.
    pub line: usize,
    /// Best-guess valid directive.
    pub suggested_correction: String,
}

/// Any word-shaped HTML comment, used for malformed detection.
static CANDIDATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--\s*[A-Za-z][A-Za-z0-9 _-]*\s*-->").unwrap());

/// Scan a document for directives.
///
/// Returns occurrences sorted by `(line, column)` plus malformed
/// reports. Never fails; a document with no directives yields two empty
/// lists.
pub fn scan(document: &str) -> (Vec<DirectiveOccurrence>, Vec<MalformedDirective>) {
    let mut occurrences = Vec::new();
    let mut fence = FenceState::new();

    for (idx, line) in document.lines().enumerate() {
        if fence.update(line) || fence.in_fence() {
            continue;
        }
        scan_line(line, idx + 1, &mut occurrences);
    }

    let malformed = scan_malformed(document);
    tracing::trace!(
        occurrences = occurrences.len(),
        malformed = malformed.len(),
        "directive scan complete"
    );
    (occurrences, malformed)
}

/// Match lexicon patterns against one non-fenced line.
fn scan_line(line: &str, line_no: usize, occurrences: &mut Vec<DirectiveOccurrence>) {
    // Inline spans only matter when a backtick is present at all
    let spans = if line.contains('`') {
        inline_code_spans(line)
    } else {
        Vec::new()
    };

    let mut matched: Vec<DirectiveOccurrence> = Vec::new();
    let mut taken: Vec<usize> = Vec::new();

    for entry in lexicon::entries() {
        for m in entry.pattern.find_iter(line) {
            if inside_any(&spans, m.start(), m.end()) {
                continue;
            }
            // First lexicon entry wins at any given position
            if taken.contains(&m.start()) {
                continue;
            }
            taken.push(m.start());
            matched.push(DirectiveOccurrence {
                kind: entry.kind,
                line: line_no,
                column: line[..m.start()].chars().count(),
                raw_text: m.as_str().trim().to_owned(),
            });
        }
    }

    matched.sort_by_key(|occ| occ.column);
    occurrences.extend(matched);
}

/// Independent re-scan for directive look-alikes.
///
/// Applies the same code suppression as the main scan so example
/// directives inside code samples are never flagged.
fn scan_malformed(document: &str) -> Vec<MalformedDirective> {
    let mut reports = Vec::new();
    let mut fence = FenceState::new();

    for (idx, line) in document.lines().enumerate() {
        if fence.update(line) || fence.in_fence() {
            continue;
        }
        let spans = if line.contains('`') {
            inline_code_spans(line)
        } else {
            Vec::new()
        };
        for m in CANDIDATE.find_iter(line) {
            if inside_any(&spans, m.start(), m.end()) {
                continue;
            }
            let text = m.as_str().trim();
            if lexicon::is_recognized(text) {
                continue;
            }
            if let Some(suggestion) = suggest_correction(text) {
                reports.push(MalformedDirective {
                    raw_text: text.to_owned(),
                    line: idx + 1,
                    suggested_correction: suggestion.to_owned(),
                });
            }
        }
    }
    reports
}

/// Keyword category found inside a malformed directive comment.
///
/// Closed set: classification is a total function over it, which keeps
/// the correction heuristic enumerable and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DirectiveKeyword {
    EndSlideOnly,
    EndSlide,
    SlideOnly,
    Slide,
    NoteOnly,
    Note,
    All,
}

impl DirectiveKeyword {
    /// Classify comment text by its strongest directive keyword.
    fn classify(text: &str) -> Option<Self> {
        let upper = text.to_uppercase();
        if upper.contains("SLIDE") {
            return Some(match (upper.contains("END"), upper.contains("ONLY")) {
                (true, true) => Self::EndSlideOnly,
                (true, false) => Self::EndSlide,
                (false, true) => Self::SlideOnly,
                (false, false) => Self::Slide,
            });
        }
        if upper.contains("NOTE") {
            return Some(if upper.contains("ONLY") {
                Self::NoteOnly
            } else {
                Self::Note
            });
        }
        upper.contains("ALL").then_some(Self::All)
    }

    /// Canonical spelling suggested for this keyword category.
    fn suggestion(self) -> &'static str {
        match self {
            Self::EndSlideOnly => "<!-- END SLIDE-ONLY -->",
            Self::EndSlide => "<!-- END SLIDE -->",
            Self::SlideOnly => "<!-- SLIDE-ONLY -->",
            Self::Slide => "<!-- SLIDE -->",
            Self::NoteOnly => "<!-- NOTES-ONLY -->",
            Self::Note => "<!-- NOTES -->",
            Self::All => "<!-- ALL -->",
        }
    }
}

/// Suggest a valid directive for a malformed comment, if it contains a
/// directive-associated keyword at all.
fn suggest_correction(text: &str) -> Option<&'static str> {
    DirectiveKeyword::classify(text).map(DirectiveKeyword::suggestion)
}
