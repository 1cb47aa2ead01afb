//! Path utilities: the per-user data directory and tilde expansion.
//!
//! The data directory holds the rotating log file. It follows the XDG base
//! directory convention: `$XDG_DATA_HOME/book-browser` when that variable is
//! set to an absolute path, `~/.local/share/book-browser` otherwise.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "book-browser";

/// Returns the data directory for log files.
///
/// Falls back to a relative `.book-browser` directory when neither
/// `XDG_DATA_HOME` nor `HOME` is usable.
///
/// # Examples
///
/// ```
/// use book_browser::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert!(data_dir.ends_with("book-browser") || data_dir.ends_with(".book-browser"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    data_dir_from(env::var("XDG_DATA_HOME").ok(), env::var("HOME").ok())
}

fn data_dir_from(xdg_data_home: Option<String>, home: Option<String>) -> PathBuf {
    if let Some(xdg) = xdg_data_home.filter(|p| p.starts_with('/')) {
        return PathBuf::from(xdg).join(APP_DIR);
    }

    home.filter(|h| !h.is_empty()).map_or_else(
        || PathBuf::from(format!(".{APP_DIR}")),
        |h| PathBuf::from(h).join(".local").join("share").join(APP_DIR),
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and every path when `HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use book_browser::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    env::var("HOME").map_or_else(|_| path.to_string(), |home| expand_with_home(path, &home))
}

fn expand_with_home(path: &str, home: &str) -> String {
    if path == "~" {
        home.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_absolute_xdg_data_home() {
        assert_eq!(
            data_dir_from(Some("/var/data".to_string()), Some("/home/reader".to_string())),
            PathBuf::from("/var/data/book-browser")
        );
    }

    #[test]
    fn ignores_relative_xdg_data_home() {
        assert_eq!(
            data_dir_from(Some("data".to_string()), Some("/home/reader".to_string())),
            PathBuf::from("/home/reader/.local/share/book-browser")
        );
    }

    #[test]
    fn falls_back_without_home() {
        assert_eq!(data_dir_from(None, None), PathBuf::from(".book-browser"));
    }

    #[test]
    fn expands_leading_tilde_only() {
        assert_eq!(expand_with_home("~/books.json", "/home/reader"), "/home/reader/books.json");
        assert_eq!(expand_with_home("~", "/home/reader"), "/home/reader");
        assert_eq!(expand_with_home("a/~/b", "/home/reader"), "a/~/b");
        assert_eq!(expand_with_home("~/x", "/home/reader/"), "/home/reader/x");
    }
}
