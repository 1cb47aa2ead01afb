//! What the host terminal tells us: its size and its ambient color scheme.
//!
//! Many terminals (rxvt, Konsole, iTerm2 and others) export `COLORFGBG` as
//! `"<fg>;<bg>"` or `"<fg>;<default>;<bg>"`, where each part is an ANSI color
//! index. A background of 0-6 or 8 is a dark color.

use crate::ui::theme::ThemeMode;
use std::env;

/// Screen height used when neither a flag nor the terminal gives one.
pub const DEFAULT_ROWS: usize = 24;

/// Screen width used when neither a flag nor the terminal gives one.
pub const DEFAULT_COLS: usize = 80;

/// Queries the terminal for its size as `(cols, rows)`. `None` when stdout is
/// not a terminal or it reports a zero dimension.
#[must_use]
pub fn terminal_size() -> Option<(u16, u16)> {
    match crossterm::terminal::size() {
        Ok((cols, rows)) if cols > 0 && rows > 0 => Some((cols, rows)),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(error = %e, "terminal size unavailable");
            None
        }
    }
}

/// Resolves `(rows, cols)`, per dimension: the explicit value, then the
/// detected `(cols, rows)`, then 24x80.
///
/// # Examples
///
/// ```
/// use book_browser::infrastructure::screen_size;
///
/// assert_eq!(screen_size(None, None, Some((120, 40))), (40, 120));
/// assert_eq!(screen_size(Some(30), None, None), (30, 80));
/// ```
#[must_use]
pub fn screen_size(rows: Option<u16>, cols: Option<u16>, detected: Option<(u16, u16)>) -> (usize, usize) {
    let rows = rows
        .or_else(|| detected.map(|(_, rows)| rows))
        .map_or(DEFAULT_ROWS, usize::from);
    let cols = cols
        .or_else(|| detected.map(|(cols, _)| cols))
        .map_or(DEFAULT_COLS, usize::from);
    (rows, cols)
}

/// Reads `COLORFGBG` and maps it to a theme mode, if it says anything.
#[must_use]
pub fn detect_color_scheme() -> Option<ThemeMode> {
    let hint = env::var("COLORFGBG").ok()?;
    let mode = parse_colorfgbg(&hint);
    tracing::debug!(colorfgbg = %hint, mode = ?mode, "terminal color hint");
    mode
}

/// Interprets a `COLORFGBG` value. Returns `None` when the background part is
/// missing or not a color index.
///
/// # Examples
///
/// ```
/// use book_browser::infrastructure::parse_colorfgbg;
/// use book_browser::ui::theme::ThemeMode;
///
/// assert_eq!(parse_colorfgbg("15;0"), Some(ThemeMode::Night));
/// assert_eq!(parse_colorfgbg("0;default;15"), Some(ThemeMode::Day));
/// assert_eq!(parse_colorfgbg("default"), None);
/// ```
#[must_use]
pub fn parse_colorfgbg(value: &str) -> Option<ThemeMode> {
    let mut parts = value.split(';');
    parts.next()?;
    let background: u8 = parts.last()?.trim().parse().ok()?;

    match background {
        0..=6 | 8 => Some(ThemeMode::Night),
        _ => Some(ThemeMode::Day),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_backgrounds_mean_night() {
        for bg in ["0", "4", "6", "8"] {
            assert_eq!(parse_colorfgbg(&format!("7;{bg}")), Some(ThemeMode::Night), "bg {bg}");
        }
    }

    #[test]
    fn light_backgrounds_mean_day() {
        for bg in ["7", "9", "15"] {
            assert_eq!(parse_colorfgbg(&format!("0;{bg}")), Some(ThemeMode::Day), "bg {bg}");
        }
    }

    #[test]
    fn unusable_hints_are_ignored() {
        assert_eq!(parse_colorfgbg(""), None);
        assert_eq!(parse_colorfgbg("15"), None);
        assert_eq!(parse_colorfgbg("15;default"), None);
    }

    #[test]
    fn screen_size_prefers_explicit_then_detected_then_default() {
        let detected = Some((132, 50));

        assert_eq!(screen_size(Some(30), Some(90), detected), (30, 90));
        assert_eq!(screen_size(None, None, detected), (50, 132));
        assert_eq!(screen_size(Some(30), None, detected), (30, 132));
        assert_eq!(screen_size(None, None, None), (DEFAULT_ROWS, DEFAULT_COLS));
        assert_eq!(screen_size(None, Some(100), None), (DEFAULT_ROWS, 100));
    }
}
