//! Structure validation.
//!
//! A diagnostic re-walk of the directive list that reports nesting and
//! closing anomalies. It never changes what the splitter produces; a
//! document with every anomaly still splits deterministically.

use crate::blocks::RouteMode;
use crate::lexicon::DirectiveKind;
use crate::scanner::DirectiveOccurrence;

/// Check directive structure and return human-readable warnings.
pub fn validate(occurrences: &[DirectiveOccurrence]) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut stack: Vec<&DirectiveOccurrence> = Vec::new();
    let mut mode = RouteMode::All;

    for occ in occurrences {
        match occ.kind {
            DirectiveKind::SlidesOnly | DirectiveKind::NotesOnly => {
                if mode != RouteMode::All {
                    warnings.push(format!(
                        "line {}: nested mode directive {} (already in {} mode)",
                        occ.line,
                        occ.raw_text,
                        mode.label()
                    ));
                }
                stack.push(occ);
                mode = if occ.kind == DirectiveKind::SlidesOnly {
                    RouteMode::SlidesOnly
                } else {
                    RouteMode::NotesOnly
                };
            }
            DirectiveKind::NotesSlideBoundary => {
                if mode != RouteMode::All {
                    warnings.push(format!(
                        "line {}: NOTES directive while already in {} mode",
                        occ.line,
                        mode.label()
                    ));
                }
                stack.push(occ);
                mode = RouteMode::NotesOnly;
            }
            DirectiveKind::All => {
                if stack.pop().is_some() {
                    mode = RouteMode::All;
                } else {
                    warnings.push(format!(
                        "line {}: <!-- ALL --> without matching mode directive",
                        occ.line
                    ));
                }
            }
            // Plain slide break, no mode to open or close
            DirectiveKind::SlideBoundary => {}
        }
    }

    for occ in stack {
        warnings.push(format!(
            "line {}: unclosed {} directive {}",
            occ.line,
            occ.kind.label(),
            occ.raw_text
        ));
    }

    warnings
}
