//! Directive-driven content splitter for annotated lecture markdown.
//!
//! Lecture sources carry HTML-comment directives (`<!-- SLIDE-ONLY -->`,
//! `<!-- NOTES-ONLY -->`, `<!-- NOTES -->`, `<!-- ALL -->`, and a family
//! of `END SLIDE` synonyms) that route the text between them to the
//! slides stream, the notes stream, or both. [`split`] interprets those
//! directives and returns the two streams plus advisory diagnostics.
//!
//! Directive-shaped text inside fenced code blocks or inline backtick
//! spans is never treated as a directive, so lectures can show the
//! syntax in examples.
//!
//! # Example
//!
//! ```
//! use lectern_splitter::split;
//!
//! let result = split("# Intro\n<!-- NOTES-ONLY -->\nRemind them about homework.");
//! assert_eq!(result.slides, "# Intro");
//! assert_eq!(result.notes, "Remind them about homework.");
//! ```
//!
//! Splitting is total: no input produces an error. Imperfect directive
//! usage (unclosed modes, stray `<!-- ALL -->`, misspelled directives)
//! is reported in [`Diagnostics`] while the streams are still produced
//! best-effort.

mod blocks;
mod lexicon;
mod router;
mod scanner;
mod span;
mod split;
mod validator;

pub use blocks::{ContentBlock, RouteMode, build_blocks};
pub use lexicon::DirectiveKind;
pub use router::{SLIDE_SEPARATOR, route};
pub use scanner::{DirectiveOccurrence, MalformedDirective, scan};
pub use split::{Diagnostics, SplitResult, split};
pub use validator::validate;
