//! Command-line interface.
//!
//! Flags map one to one onto [`Config`] fields and are layered on top of the
//! optional `--config` TOML file. `--rows`/`--cols` only pin the screen size;
//! see [`crate::infrastructure::screen_size`].

use crate::{infrastructure, Config, Result};
use clap::Parser;
use std::collections::BTreeMap;

#[derive(Debug, Default, Parser)]
#[command(name = "book-browser", version, about)]
pub struct Cli {
    /// JSON catalog file (default: the bundled sample catalog).
    #[arg(long)]
    pub catalog: Option<String>,

    /// TOML configuration file; flags given here override it.
    #[arg(long)]
    pub config: Option<String>,

    /// Books revealed per page.
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Initial theme: day or night.
    #[arg(long)]
    pub theme: Option<String>,

    /// Built-in palette: classic or sepia.
    #[arg(long)]
    pub palette: Option<String>,

    /// TOML palette file (wins over --palette).
    #[arg(long)]
    pub palette_file: Option<String>,

    /// Log filter directive, e.g. `debug` or `book_browser=trace`.
    #[arg(long)]
    pub trace_level: Option<String>,

    /// Log file location.
    #[arg(long)]
    pub log_file: Option<String>,

    /// Screen height (default: detected from the terminal).
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub rows: Option<u16>,

    /// Screen width (default: detected from the terminal).
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub cols: Option<u16>,
}

impl Cli {
    /// The configuration keys set on the command line.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let page_size = self.page_size.map(|n| n.to_string());
        [
            ("catalog", self.catalog.as_ref()),
            ("page_size", page_size.as_ref()),
            ("theme", self.theme.as_ref()),
            ("palette", self.palette.as_ref()),
            ("palette_file", self.palette_file.as_ref()),
            ("trace_level", self.trace_level.as_ref()),
            ("log_file", self.log_file.as_ref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v.clone())))
        .collect()
    }

    /// Builds the effective configuration: the `--config` file, if any, with
    /// the flags layered on top.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BrowserError::Config`] for invalid flag values or an
    /// invalid config file, and [`crate::BrowserError::Io`] if the file
    /// cannot be read.
    pub fn load_config(&self) -> Result<Config> {
        let overrides = Config::from_map(&self.to_map())?;
        match &self.config {
            Some(path) => Ok(Config::from_file(infrastructure::expand_tilde(path))?.merge(overrides)),
            None => Ok(overrides),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BrowserError;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("book-browser").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_map_onto_config() {
        let config = cli(&["--catalog", "/srv/books.json", "--page-size", "8", "--theme", "night"])
            .load_config()
            .unwrap();

        assert_eq!(config.catalog_file.as_deref(), Some("/srv/books.json"));
        assert_eq!(config.page_size, Some(8));
        assert_eq!(config.theme.as_deref(), Some("night"));
        assert_eq!(config.palette, None);
    }

    #[test]
    fn unset_flags_leave_map_empty() {
        assert!(cli(&[]).to_map().is_empty());
        assert!(cli(&["--rows", "40", "--cols", "100"]).to_map().is_empty());
    }

    #[test]
    fn flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = 12\ntheme = \"night\"").unwrap();
        let path = file.path().display().to_string();

        let config = cli(&["--config", &path, "--theme", "day"]).load_config().unwrap();

        assert_eq!(config.page_size, Some(12));
        assert_eq!(config.theme.as_deref(), Some("day"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(Cli::try_parse_from(["book-browser", "--page-size", "twelve"]).is_err());
        assert!(Cli::try_parse_from(["book-browser", "--rows", "0"]).is_err());
        assert!(matches!(
            cli(&["--page-size", "0"]).load_config(),
            Err(BrowserError::Config(_))
        ));
        assert!(matches!(
            cli(&["--theme", "sunset"]).load_config(),
            Err(BrowserError::Config(_))
        ));
    }

    #[test]
    fn help_is_available() {
        let err = Cli::try_parse_from(["book-browser", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
