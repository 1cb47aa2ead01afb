//! Settings overlay renderer: the day/night choice with the active mode
//! marked.

use super::write_line;
use crate::ui::theme::{ThemeMode, ThemeTokens};
use std::io::{self, Write};

/// Renders the settings overlay at `row` and returns the next free row.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_settings_overlay<W: Write + ?Sized>(
    out: &mut W,
    row: usize,
    mode: ThemeMode,
    tokens: &ThemeTokens,
    cols: usize,
) -> io::Result<usize> {
    let mut current_row = write_line(out, row, 0, "Settings", tokens.text(), tokens.background(), cols)?;
    current_row = write_line(out, current_row, 2, "Theme", tokens.dim(), tokens.background(), cols)?;

    for choice in [ThemeMode::Day, ThemeMode::Night] {
        let marker = if choice == mode { "(•)" } else { "( )" };
        let line = format!("{marker} {:<6} theme {choice}", choice.as_str());
        let fg = if choice == mode { tokens.text() } else { tokens.dim() };
        current_row = write_line(out, current_row, 4, &line, fg, tokens.background(), cols)?;
    }

    write_line(
        out,
        current_row,
        2,
        "close settings to cancel",
        tokens.dim(),
        tokens.background(),
        cols,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::tests::{plain, tokens};

    #[test]
    fn marks_the_active_mode() {
        let mut out = Vec::new();
        let next = render_settings_overlay(&mut out, 3, ThemeMode::Night, &tokens(), 40).unwrap();

        assert_eq!(next, 8);
        let text = plain(&out);
        assert!(text.contains("( ) day    theme day"));
        assert!(text.contains("(•) night  theme night"));
    }
}
