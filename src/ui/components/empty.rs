//! Empty state component renderer.
//!
//! Shown in place of the list when the active filter matches nothing.

use super::write_line;
use crate::ui::helpers::center_padding;
use crate::ui::theme::ThemeTokens;
use crate::ui::viewmodel::EmptyState;
use std::io::{self, Write};

/// Renders the centered two-line message, leaving one blank row above it.
///
/// # Layout
///
/// ```text
/// [blank line]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// Returns the next free row.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_empty_state<W: Write + ?Sized>(
    out: &mut W,
    row: usize,
    empty: &EmptyState,
    tokens: &ThemeTokens,
    cols: usize,
) -> io::Result<usize> {
    let mut current_row = write_line(out, row, 0, "", tokens.text(), tokens.background(), cols)?;

    let padding = center_padding(empty.message.chars().count(), cols);
    current_row = write_line(
        out,
        current_row,
        padding,
        &empty.message,
        tokens.text(),
        tokens.background(),
        cols,
    )?;

    let padding = center_padding(empty.subtitle.chars().count(), cols);
    write_line(
        out,
        current_row,
        padding,
        &empty.subtitle,
        tokens.dim(),
        tokens.background(),
        cols,
    )
}
