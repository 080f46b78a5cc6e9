//! The directive lexicon.
//!
//! A fixed, ordered table mapping directive comment spellings to
//! routing signals. Declaration order is priority order: specific
//! synonyms (`END SLIDE-ONLY`, `SLIDE END-ONLY`) come before the
//! generic `SLIDE`/`SLIDES` patterns that would otherwise shadow them.
//! The table is not configurable at runtime.

use std::sync::LazyLock;

use regex::Regex;

/// Routing signal carried by one directive comment.
///
/// `SlideBoundary` and `NotesSlideBoundary` are transient signals: the
/// state machine turns them into a mode change and/or a slide
/// separator, and no emitted content block ever carries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DirectiveKind {
    /// Route following content to both streams.
    All,
    /// Route following content to slides only.
    SlidesOnly,
    /// Route following content to notes only.
    NotesOnly,
    /// Start a new slide; no mode change.
    SlideBoundary,
    /// Start a new slide and switch to notes-only.
    NotesSlideBoundary,
}

impl DirectiveKind {
    /// Short human-readable label used in warnings.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::SlidesOnly => "slide-only",
            Self::NotesOnly => "notes-only",
            Self::SlideBoundary => "slide boundary",
            Self::NotesSlideBoundary => "NOTES",
        }
    }

    /// True for the kinds that start a new slide.
    pub fn is_boundary(self) -> bool {
        matches!(self, Self::SlideBoundary | Self::NotesSlideBoundary)
    }
}

/// One lexicon entry: a comment pattern and the signal it maps to.
pub struct LexiconEntry {
    pub pattern: Regex,
    pub kind: DirectiveKind,
}

impl LexiconEntry {
    fn new(pattern: &str, kind: DirectiveKind) -> Self {
        Self {
            // Patterns are hand-maintained constants
            pattern: Regex::new(pattern).unwrap(),
            kind,
        }
    }
}

static LEXICON: LazyLock<Vec<LexiconEntry>> = LazyLock::new(|| {
    use DirectiveKind::{All, NotesOnly, NotesSlideBoundary, SlidesOnly};
    vec![
        // "end of slide-only region" synonyms, before the generic
        // END SLIDE / SLIDE spellings they contain
        LexiconEntry::new(r"(?i)<!--\s*end[\s-]+slide[\s-]+only\s*-->", NotesOnly),
        LexiconEntry::new(r"(?i)<!--\s*slide[\s-]+end[\s-]+only\s*-->", NotesOnly),
        LexiconEntry::new(r"(?i)<!--\s*end[\s-]+slide\s*-->", NotesSlideBoundary),
        LexiconEntry::new(r"(?i)<!--\s*slide[\s-]+end\s*-->", NotesSlideBoundary),
        LexiconEntry::new(r"(?i)<!--\s*notes[\s-]+only\s*-->", NotesOnly),
        LexiconEntry::new(r"(?i)<!--\s*notes\s*-->", NotesSlideBoundary),
        LexiconEntry::new(r"(?i)<!--\s*slides?[\s-]+only\s*-->", SlidesOnly),
        LexiconEntry::new(r"(?i)<!--\s*slides?\s*-->", SlidesOnly),
        LexiconEntry::new(r"(?i)<!--\s*all\s*-->", All),
    ]
});

/// The lexicon in priority order.
pub fn entries() -> &'static [LexiconEntry] {
    &LEXICON
}

/// True if `text` is exactly one recognized directive comment.
pub fn is_recognized(text: &str) -> bool {
    entries()
        .iter()
        .any(|e| e.pattern.find(text).is_some_and(|m| m.len() == text.len()))
}
