//! Header component renderer.
//!
//! Renders the title bar: a centered bold title on the surface color, with
//! the active theme mode at the right edge.

use crate::ui::helpers::{center_padding, position_cursor, truncate};
use crate::ui::theme::{self, ThemeMode, ThemeTokens};
use std::io::{self, Write};

pub const TITLE: &str = "Book Browser";

/// Renders the header at `row` and returns `row + 1`.
///
/// # Layout
///
/// ```text
/// [left padding] Book Browser [right padding] night
/// ```
///
/// The mode tag is dropped on terminals too narrow to fit it beside the
/// title.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_header<W: Write + ?Sized>(
    out: &mut W,
    row: usize,
    mode: ThemeMode,
    tokens: &ThemeTokens,
    cols: usize,
) -> io::Result<usize> {
    let title = truncate(TITLE, cols);
    let title_len = title.chars().count();
    let padding = center_padding(title_len, cols);

    let tag = format!("{mode} ");
    let tag_len = tag.chars().count();
    let rest = cols.saturating_sub(padding + title_len);
    let (gap, tag) = if rest >= tag_len + 1 {
        (rest - tag_len, tag.as_str())
    } else {
        (rest, "")
    };

    position_cursor(out, row, 1)?;
    write!(
        out,
        "{}{}{}{}{title}{}{}{}{}{tag}{}",
        theme::bold(),
        tokens.text().fg(),
        tokens.surface().bg(),
        " ".repeat(padding),
        theme::reset(),
        tokens.dim().fg(),
        tokens.surface().bg(),
        " ".repeat(gap),
        theme::reset()
    )?;

    Ok(row + 1)
}
