//! Search overlay renderer.
//!
//! Renders the search form as a bordered box holding the title field and
//! the command syntax, followed by the author and genre choices the form
//! accepts. Each choice shows the value to type and its display name.

use super::write_line;
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::{self, ThemeTokens};
use crate::ui::viewmodel::{FilterOption, FilterOptions};
use std::io::{self, Write};

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

pub const USAGE: &str = "search <title> [author:<id>] [genre:<id>]";

/// Renders the search overlay starting at `row`, using at most `max_rows`
/// rows.
///
/// When `focused`, the title field shows a cursor marker.
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────────┐ [margin]
/// [margin] │ Title: ▏             │ [margin]
/// [margin] │ search <title> ...   │ [margin]
/// [margin] └──────────────────────┘ [margin]
/// Authors
///   any        All Authors
///   a01        Frank Herbert
/// Genres
///   ...
/// ```
///
/// Option lists are cut off when they would overflow `max_rows`.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_search_overlay<W: Write + ?Sized>(
    out: &mut W,
    row: usize,
    options: &FilterOptions,
    focused: bool,
    tokens: &ThemeTokens,
    cols: usize,
    max_rows: usize,
) -> io::Result<usize> {
    let end = row + max_rows;
    let mut current_row = row;

    if max_rows >= 4 {
        let cursor = if focused { "▏" } else { "" };
        current_row = render_box(
            out,
            current_row,
            &[format!(" Title: {cursor}"), format!(" {USAGE}")],
            tokens,
            cols,
        )?;
    }

    let id_width = options
        .authors
        .iter()
        .chain(&options.genres)
        .map(|o| o.value.chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    for (heading, choices) in [("Authors", &options.authors), ("Genres", &options.genres)] {
        if current_row >= end {
            break;
        }
        current_row = write_line(out, current_row, 0, heading, tokens.text(), tokens.background(), cols)?;
        current_row = render_choices(out, current_row, choices, id_width, tokens, cols, end)?;
    }

    Ok(current_row)
}

fn render_choices<W: Write + ?Sized>(
    out: &mut W,
    row: usize,
    choices: &[FilterOption],
    id_width: usize,
    tokens: &ThemeTokens,
    cols: usize,
    end: usize,
) -> io::Result<usize> {
    let mut current_row = row;
    for choice in choices {
        if current_row >= end {
            break;
        }
        let line = format!("{:<id_width$}{}", choice.value, choice.label);
        current_row = write_line(out, current_row, 2, &line, tokens.dim(), tokens.background(), cols)?;
    }
    Ok(current_row)
}

/// Draws a bordered box around `lines` and returns the row below it.
fn render_box<W: Write + ?Sized>(
    out: &mut W,
    row: usize,
    lines: &[String],
    tokens: &ThemeTokens,
    cols: usize,
) -> io::Result<usize> {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN.min(cols / 2));
    let trailing = " ".repeat(cols.saturating_sub(margin.len() * 2 + inner_width + 2));
    let border = tokens.border().fg();
    let bg = tokens.background().bg();

    position_cursor(out, row, 1)?;
    write!(
        out,
        "{bg}{margin}{border}┌{}┐{margin}{trailing}{}",
        "─".repeat(inner_width),
        theme::reset()
    )?;

    let mut current_row = row + 1;
    for line in lines {
        let text = truncate(line, inner_width);
        let padding = inner_width - text.chars().count();

        position_cursor(out, current_row, 1)?;
        write!(
            out,
            "{bg}{margin}{border}│{}{text}{}{border}│{margin}{trailing}{}",
            tokens.text().fg(),
            " ".repeat(padding),
            theme::reset()
        )?;
        current_row += 1;
    }

    position_cursor(out, current_row, 1)?;
    write!(
        out,
        "{bg}{margin}{border}└{}┘{margin}{trailing}{}",
        "─".repeat(inner_width),
        theme::reset()
    )?;

    Ok(current_row + 1)
}
