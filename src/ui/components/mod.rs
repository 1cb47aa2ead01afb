//! Composable terminal component renderers.
//!
//! Each component draws one part of the screen at a given row and returns the
//! next free row. All of them write to a caller-supplied [`Write`] and color
//! themselves from the active [`ThemeTokens`].
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`list`]: Numbered preview entries (title, author)
//! - [`footer`]: "Show more" label and command hints
//! - [`empty`]: "No results" message
//! - [`search`]: Search overlay with the author/genre options
//! - [`settings`]: Settings overlay with the theme choice
//! - [`detail`]: Detail overlay card
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Border]
//! [List | Empty state | Overlay]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! [Prompt line, left to the caller]
//! ```

pub mod detail;
pub mod empty;
pub mod footer;
pub mod header;
pub mod list;
pub mod search;
pub mod settings;

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::{self, Rgb, ThemeTokens};
use std::io::{self, Write};

/// Draws a horizontal border line at `row` and returns `row + 1`.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_border<W: Write + ?Sized>(
    out: &mut W,
    row: usize,
    tokens: &ThemeTokens,
    cols: usize,
) -> io::Result<usize> {
    position_cursor(out, row, 1)?;
    write!(
        out,
        "{}{}{}{}",
        tokens.border().fg(),
        tokens.background().bg(),
        "─".repeat(cols),
        theme::reset()
    )?;
    Ok(row + 1)
}

/// Writes `text` at `row`, clipped and padded to exactly `cols` characters.
///
/// `indent` spaces are written before the text and count against the width.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub(crate) fn write_line<W: Write + ?Sized>(
    out: &mut W,
    row: usize,
    indent: usize,
    text: &str,
    fg: Rgb,
    bg: Rgb,
    cols: usize,
) -> io::Result<usize> {
    let indent = indent.min(cols);
    let text = truncate(text, cols - indent);
    let padding = cols - indent - text.chars().count();

    position_cursor(out, row, 1)?;
    write!(
        out,
        "{}{}{}{text}{}{}",
        fg.fg(),
        bg.bg(),
        " ".repeat(indent),
        " ".repeat(padding),
        theme::reset()
    )?;
    Ok(row + 1)
}

/// Fills rows `from..to` with the background color.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_blank_rows<W: Write + ?Sized>(
    out: &mut W,
    from: usize,
    to: usize,
    tokens: &ThemeTokens,
    cols: usize,
) -> io::Result<()> {
    for row in from..to {
        write_line(out, row, 0, "", tokens.text(), tokens.background(), cols)?;
    }
    Ok(())
}
