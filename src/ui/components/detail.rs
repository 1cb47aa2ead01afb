//! Detail overlay renderer.
//!
//! A terminal cannot blur an image behind the card, so the backdrop is shown
//! as a dimmed band carrying the cover URI, followed by the card itself:
//! bold title, dimmed subtitle, and the word-wrapped description.

use super::write_line;
use crate::ui::helpers::{position_cursor, truncate, wrap};
use crate::ui::theme::{self, ThemeTokens};
use crate::ui::viewmodel::DetailView;
use std::io::{self, Write};

const CARD_INDENT: usize = 4;

/// Renders the card starting at `row`, using at most `max_rows` rows.
///
/// Description lines beyond the available rows are dropped, the last kept
/// line ending with `…`.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_detail_overlay<W: Write + ?Sized>(
    out: &mut W,
    row: usize,
    detail: &DetailView,
    tokens: &ThemeTokens,
    cols: usize,
    max_rows: usize,
) -> io::Result<usize> {
    let end = row + max_rows;
    let mut current_row = row;

    if current_row < end {
        current_row = render_backdrop(out, current_row, &detail.backdrop, tokens, cols)?;
    }
    if current_row < end {
        current_row = write_line(out, current_row, 0, "", tokens.text(), tokens.background(), cols)?;
    }
    if current_row < end {
        position_cursor(out, current_row, 1)?;
        let title = truncate(&detail.title, cols.saturating_sub(CARD_INDENT));
        let padding = cols.saturating_sub(CARD_INDENT + title.chars().count());
        write!(
            out,
            "{}{}{}{}{title}{}{}",
            tokens.background().bg(),
            " ".repeat(CARD_INDENT.min(cols)),
            theme::bold(),
            tokens.text().fg(),
            " ".repeat(padding),
            theme::reset()
        )?;
        current_row += 1;
    }
    if current_row < end {
        current_row = write_line(
            out,
            current_row,
            CARD_INDENT,
            &detail.subtitle,
            tokens.dim(),
            tokens.background(),
            cols,
        )?;
    }
    if current_row < end {
        current_row = write_line(out, current_row, 0, "", tokens.text(), tokens.background(), cols)?;
    }

    let width = cols.saturating_sub(CARD_INDENT * 2);
    let mut lines = wrap(&detail.description, width);
    let room = end.saturating_sub(current_row);
    if lines.len() > room {
        lines.truncate(room);
        if let Some(last) = lines.last_mut() {
            let clipped = truncate(last, width.saturating_sub(1));
            *last = format!("{clipped}…");
        }
    }

    for line in &lines {
        current_row = write_line(out, current_row, CARD_INDENT, line, tokens.text(), tokens.background(), cols)?;
    }

    Ok(current_row)
}

fn render_backdrop<W: Write + ?Sized>(
    out: &mut W,
    row: usize,
    image: &str,
    tokens: &ThemeTokens,
    cols: usize,
) -> io::Result<usize> {
    write_line(
        out,
        row,
        1,
        &format!("cover: {image}"),
        tokens.dim(),
        tokens.surface(),
        cols,
    )
}
