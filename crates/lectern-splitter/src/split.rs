//! The split façade.

use crate::scanner::{self, MalformedDirective};
use crate::{blocks, router, validator};

/// Advisory findings from one split call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostics {
    /// Nesting/closing anomalies from the structure validator.
    pub structure_warnings: Vec<String>,
    /// Directive look-alikes with suggested corrections.
    pub malformed_directives: Vec<MalformedDirective>,
}

impl Diagnostics {
    /// True when nothing was flagged.
    pub fn is_clean(&self) -> bool {
        self.structure_warnings.is_empty() && self.malformed_directives.is_empty()
    }
}

/// Result of splitting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SplitResult {
    /// Slides stream.
    pub slides: String,
    /// Notes stream.
    pub notes: String,
    /// Advisory diagnostics; never affect the two streams.
    pub diagnostics: Diagnostics,
}

/// Split an annotated lecture document into slides and notes text.
///
/// Pure and re-entrant: every call scans from scratch and holds no
/// state afterward, so concurrent calls on different documents need no
/// coordination. Never fails for any input; anomalies come back as
/// diagnostics alongside a best-effort split.
pub fn split(document: &str) -> SplitResult {
    let (occurrences, malformed_directives) = scanner::scan(document);
    let structure_warnings = validator::validate(&occurrences);
    let blocks = blocks::build_blocks(document, &occurrences);
    let (slides, notes) = router::route(&blocks, &occurrences);

    tracing::debug!(
        directives = occurrences.len(),
        blocks = blocks.len(),
        warnings = structure_warnings.len(),
        "document split"
    );

    SplitResult {
        slides,
        notes,
        diagnostics: Diagnostics {
            structure_warnings,
            malformed_directives,
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_input() {
        let result = split("");
        assert_eq!(result.slides, "");
        assert_eq!(result.notes, "");
        assert!(result.diagnostics.is_clean());
    }

    #[test]
    fn test_directive_free_document_identical_streams() {
        let doc = "# Lecture 1\n\nSome content.\n";
        let result = split(doc);
        assert_eq!(result.slides, doc.trim());
        assert_eq!(result.notes, doc.trim());
        assert!(result.diagnostics.is_clean());
    }

    #[test]
    fn test_full_example() {
        let doc = "# T\n<!-- SLIDE-ONLY -->\nA\n<!-- NOTES-ONLY -->\nB\n<!-- ALL -->\nC";
        let result = split(doc);
        assert_eq!(result.slides, "# T\n\nA\n\nC");
        assert_eq!(result.notes, "B\n\nC");
    }

    #[test]
    fn test_fenced_directive_ignored() {
        let doc = "```\n<!-- SLIDE -->\n```\n<!-- NOTES-ONLY -->\nX";
        let result = split(doc);
        assert!(!result.notes.is_empty());
        assert!(result.notes.contains('X'));
        assert!(!result.slides.contains('X'));
        // The fenced block itself stays in both streams
        assert!(result.slides.contains("<!-- SLIDE -->"));
    }

    #[test]
    fn test_diagnostics_surface_both_channels() {
        let doc = "<!-- ALL -->\nfoo\n<!-- SLIDE-OLNY -->\nbar";
        let result = split(doc);
        assert_eq!(result.diagnostics.structure_warnings.len(), 1);
        assert_eq!(result.diagnostics.malformed_directives.len(), 1);
        assert_eq!(
            result.diagnostics.malformed_directives[0].suggested_correction,
            "<!-- SLIDE -->"
        );
        // Best-effort output regardless
        assert_eq!(result.slides, "foo\n\nbar");
        assert_eq!(result.notes, "foo\n\nbar");
    }

    #[test]
    fn test_calls_are_independent() {
        let first = split("a\n<!-- NOTES-ONLY -->\nb");
        let second = split("plain");
        // Nothing leaks from the unbalanced first call
        assert_eq!(second.slides, "plain");
        assert!(second.diagnostics.is_clean());
        assert_eq!(first.notes, "b");
    }
}
