//! Code-aware scanning helpers.
//!
//! Directive comments that appear inside code must never be treated as
//! directives. Two mechanisms cover this: per-line inline code spans
//! (backtick runs) and cross-line fenced code blocks.

use std::ops::Range;

/// Compute the byte ranges of inline code spans on a single line.
///
/// A span opens with a run of one or more backticks and closes at the
/// next run of exactly the same length. An opening run with no matching
/// closer produces no span; scanning continues with the next run.
/// Same-length pairs are matched left to right, first opener to first
/// closer.
pub(crate) fn inline_code_spans(line: &str) -> Vec<Range<usize>> {
    let mut runs: Vec<(usize, usize)> = Vec::new();
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'`' {
            let start = i;
            while i < bytes.len() && bytes[i] == b'`' {
                i += 1;
            }
            runs.push((start, i - start));
        } else {
            i += 1;
        }
    }

    let mut spans = Vec::new();
    let mut idx = 0;
    while idx < runs.len() {
        let (open_start, open_len) = runs[idx];
        match (idx + 1..runs.len()).find(|&j| runs[j].1 == open_len) {
            Some(close) => {
                let (close_start, close_len) = runs[close];
                spans.push(open_start..close_start + close_len);
                idx = close + 1;
            }
            None => idx += 1,
        }
    }
    spans
}

/// Check whether the byte range `[start, end)` overlaps any span.
pub(crate) fn inside_any(spans: &[Range<usize>], start: usize, end: usize) -> bool {
    spans.iter().any(|s| start < s.end && end > s.start)
}

/// Cross-line fenced code block state.
///
/// A fence opens on a line whose trimmed content starts with three or
/// more backticks or tildes. It closes on a line with a run of the same
/// character at least as long as the opener, followed only by
/// whitespace.
#[derive(Debug, Default)]
pub(crate) struct FenceState {
    open: Option<(char, usize)>,
}

impl FenceState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// True while between an opening fence and its closer.
    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Feed one line. Returns `true` if the line is a fence marker
    /// (opening or closing); marker lines themselves carry no scannable
    /// content.
    pub(crate) fn update(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start();
        match self.open {
            Some((ch, len)) => {
                if closes_fence(trimmed, ch, len) {
                    self.open = None;
                    true
                } else {
                    false
                }
            }
            None => {
                if let Some(opening) = opens_fence(trimmed) {
                    self.open = Some(opening);
                    true
                } else {
                    false
                }
            }
        }
    }
}

fn opens_fence(trimmed: &str) -> Option<(char, usize)> {
    let first = trimmed.chars().next()?;
    if first != '`' && first != '~' {
        return None;
    }
    let run = trimmed.chars().take_while(|&c| c == first).count();
    (run >= 3).then_some((first, run))
}

fn closes_fence(trimmed: &str, ch: char, min_len: usize) -> bool {
    let run = trimmed.chars().take_while(|&c| c == ch).count();
    run >= min_len && trimmed[run..].chars().all(char::is_whitespace)
}
