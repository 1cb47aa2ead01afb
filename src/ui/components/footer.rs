//! Footer component renderer.
//!
//! Renders the "show more" control and the command hints on one centered
//! line. The control is drawn in reverse video while it is enabled and as
//! dimmed text once everything is shown.

use crate::ui::helpers::{center_padding, position_cursor, truncate};
use crate::ui::theme::{self, ThemeTokens};
use crate::ui::viewmodel::ShowMoreLabel;
use std::io::{self, Write};

pub const HINTS: &str = "more · open <n> · find · settings · help · quit";

/// Text of the "show more" control.
#[must_use]
pub fn label_text(label: &ShowMoreLabel) -> String {
    if label.enabled {
        format!(" Show more ({}) ", label.remaining)
    } else {
        " All books shown ".to_string()
    }
}

/// Renders the footer at `row` and returns `row + 1`.
///
/// # Truncation
///
/// The hints are shortened first; the label is only clipped when the
/// terminal cannot fit it on its own.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_footer<W: Write + ?Sized>(
    out: &mut W,
    row: usize,
    label: &ShowMoreLabel,
    tokens: &ThemeTokens,
    cols: usize,
) -> io::Result<usize> {
    let label_text = truncate(&label_text(label), cols);
    let label_len = label_text.chars().count();

    let hints_room = cols.saturating_sub(label_len + 3);
    let hints = if hints_room > 0 {
        format!("   {}", truncate(HINTS, hints_room))
    } else {
        String::new()
    };
    let hints_len = hints.chars().count();

    let padding = center_padding(label_len + hints_len, cols);
    let trailing = cols.saturating_sub(padding + label_len + hints_len);

    let label_style = if label.enabled {
        theme::reverse()
    } else {
        ""
    };
    let label_fg = if label.enabled {
        tokens.text()
    } else {
        tokens.dim()
    };

    position_cursor(out, row, 1)?;
    write!(
        out,
        "{}{}{}{}{}{label_text}{}{}{}{hints}{}{}",
        label_fg.fg(),
        tokens.background().bg(),
        " ".repeat(padding),
        label_style,
        theme::bold(),
        theme::reset(),
        tokens.dim().fg(),
        tokens.background().bg(),
        " ".repeat(trailing),
        theme::reset()
    )?;

    Ok(row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::tests::{plain, tokens};

    #[test]
    fn enabled_label_shows_remaining() {
        let mut out = Vec::new();
        render_footer(&mut out, 10, &ShowMoreLabel::new(3), &tokens(), 80).unwrap();

        let text = plain(&out);
        assert!(text.contains("Show more (3)"));
        assert!(text.contains("find · settings"));
        assert_eq!(text.chars().count(), 80);
    }

    #[test]
    fn exhausted_label_is_plain_text() {
        let label = ShowMoreLabel::new(0);
        assert_eq!(label_text(&label), " All books shown ");

        let mut out = Vec::new();
        render_footer(&mut out, 10, &label, &tokens(), 80).unwrap();
        let raw = String::from_utf8(out).unwrap();
        assert!(!raw.contains(theme::reverse()));
    }

    #[test]
    fn narrow_terminal_keeps_label() {
        let mut out = Vec::new();
        render_footer(&mut out, 1, &ShowMoreLabel::new(12), &tokens(), 18).unwrap();
        assert_eq!(plain(&out), "  Show more (12)  ");
    }
}
