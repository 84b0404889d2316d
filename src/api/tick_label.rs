use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_MAX_LINE_LENGTH: usize = 36;
pub const MAX_LINES: usize = 2;
pub const LINE_HEIGHT: f64 = 21.0;
pub const ELLIPSIS: &str = "...";
/// Shortest line that still fits one character before the ellipsis.
pub const MIN_MAX_LINE_LENGTH: usize = ELLIPSIS.len() + 1;

/// One rendered line of a wrapped tick label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickLine {
    pub text: String,
    /// Vertical offset from the first line.
    pub dy: f64,
}

pub type TickLines = SmallVec<[TickLine; MAX_LINES]>;

/// Word-wraps `label` into at most two lines of `max_line_length` characters.
///
/// When the label needs more than two lines the second one is cut and ends
/// in an ellipsis. Single spaces separate words, so runs of spaces inside a
/// line survive. A word longer than the limit gets a line of its own.
#[must_use]
pub fn break_into_tspans(label: &str, max_line_length: usize) -> TickLines {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in label.split(' ') {
        let current_len = current.chars().count();
        let word_len = word.chars().count();
        if current_len + word_len > max_line_length && !current.trim().is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        current.push_str(word);
        current.push(' ');
    }
    if !current.trim().is_empty() || lines.is_empty() {
        lines.push(current);
    }

    let truncated = lines.len() > MAX_LINES;
    lines.truncate(MAX_LINES);
    if truncated {
        if let Some(last) = lines.last_mut() {
            let keep = max_line_length.saturating_sub(ELLIPSIS.len());
            let mut cut: String = last.trim().chars().take(keep).collect();
            cut.push_str(ELLIPSIS);
            *last = cut;
        }
    }

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| TickLine {
            text: line.trim().to_owned(),
            dy: (i as f64) * LINE_HEIGHT,
        })
        .collect()
}

/// `break_into_tspans` that rejects line limits too short for an ellipsis.
pub fn break_into_tspans_checked(label: &str, max_line_length: usize) -> ChartResult<TickLines> {
    if max_line_length < MIN_MAX_LINE_LENGTH {
        return Err(ChartError::InvalidData(format!(
            "max line length must be >= {MIN_MAX_LINE_LENGTH}"
        )));
    }
    Ok(break_into_tspans(label, max_line_length))
}
