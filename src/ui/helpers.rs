//! Shared rendering utilities.
//!
//! Everything here writes to a caller-supplied [`Write`] rather than stdout,
//! so components can be rendered into a buffer under test.
//!
//! Widths are counted in characters, not bytes.

use std::io::{self, Write};

/// Moves the cursor to a 1-indexed `row`/`col` (`\x1b[{row};{col}H`).
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn position_cursor<W: Write + ?Sized>(out: &mut W, row: usize, col: usize) -> io::Result<()> {
    write!(out, "\u{1b}[{row};{col}H")
}

/// Clips `text` to at most `width` characters, ending with `…` when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut clipped: String = text.chars().take(width - 1).collect();
    clipped.push('…');
    clipped
}

/// Left padding that centers `len` characters in `cols` columns.
#[must_use]
pub const fn center_padding(len: usize, cols: usize) -> usize {
    cols.saturating_sub(len) / 2
}

/// Greedy word wrap at `width` characters. Words longer than a line are
/// truncated.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word = truncate(word, width);
        let current_len = current.chars().count();
        let word_len = word.chars().count();

        if current.is_empty() {
            current = word;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
