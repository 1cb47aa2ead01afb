//! Book Browser: a terminal catalog browser with filtering, incremental
//! pagination and a day/night theme.
//!
//! Book Browser provides:
//! - Title (case-insensitive substring), author and genre filtering
//! - Cumulative "show more" pagination over the filtered result
//! - A detail overlay for any listed book
//! - Day/night theming with swappable color roles and TOML palettes
//! - A line-driven terminal front end over a presentation-agnostic core

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shell (main.rs, input)                    │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Controller
//! │  - Event handling                                   │  ← Filter, pages
//! │  - Action emission                                  │
//! │  - Detail resolution                                │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Dataset Layer │
//! │ (ui/)         │   │ (dataset/)    │
//! │ - View trait  │   │ - JSON load   │
//! │ - Terminal    │   │ - Embedded    │
//! │ - Theming     │   │   sample      │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data directory, terminal hints (infrastructure/) │
//! │  - Error types (domain/error)                       │
//! │  - Book and catalog (domain/book, domain/catalog)   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing to a rotating log file                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Controller state, events and actions
//! - [`cli`]: Command-line flags
//! - [`dataset`]: Catalog loading (JSON file or embedded sample)
//! - [`domain`]: Core domain types (Book, Catalog, errors)
//! - [`infrastructure`]: Data directory and terminal environment
//! - [`input`]: Line command parsing for the terminal shell
//! - [`ui`]: View trait, terminal rendering and theming
//! - [`observability`]: Log file setup
//!
//! # Configuration
//!
//! Settings are layered, lowest priority first:
//!
//! 1. Built-in defaults
//! 2. A TOML file (`--config <path>` on the command line)
//! 3. Command-line flags ([`cli::Cli`])
//!
//! ```toml
//! # ~/.config/book-browser.toml
//! catalog_file = "~/books/catalog.json"
//! page_size = 12
//! theme = "night"
//! palette = "sepia"
//! trace_level = "debug"
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configure** (`main.rs`): merge file and argument configuration
//! 2. **Trace**: install the log file subscriber
//! 3. **Load**: read the catalog from `catalog_file` or the embedded sample
//! 4. **Initialize**: resolve palette, theme mode and page size into an
//!    [`AppState`]
//! 5. **Loop**: dispatch actions to the terminal view, render, read a command
//!
//! # Example
//!
//! ```rust
//! use book_browser::{dispatch, handle_event, initialize, load_catalog};
//! use book_browser::{Config, Event, TerminalView};
//! use std::sync::Arc;
//!
//! let config = Config {
//!     page_size: Some(4),
//!     theme: Some("day".to_string()),
//!     ..Default::default()
//! };
//! let catalog = Arc::new(load_catalog(&config)?);
//! let mut state = initialize(&config, catalog)?;
//!
//! let mut view = TerminalView::default();
//! dispatch(&mut view, &state.initial_actions());
//!
//! let (_, actions) = handle_event(&mut state, &Event::ShowMore);
//! dispatch(&mut view, &actions);
//! assert_eq!(view.items().len(), 8);
//! # Ok::<(), book_browser::BrowserError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## One controller, no globals
//!
//! All mutable browse state lives in one [`AppState`]. The catalog sits
//! behind an `Arc`, so several controllers can browse it independently.
//!
//! ## Actions, not callbacks
//!
//! The handler returns a list of [`Action`]s instead of calling into the
//! display. The same core drives the terminal view and the test doubles.
//!
//! ## Silent no-ops
//!
//! Empty results, unknown identifiers and an exhausted "show more" are
//! normal states, not errors. Only setup can fail.

pub mod app;
pub mod cli;
pub mod dataset;
pub mod domain;
pub mod infrastructure;
pub mod input;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, FilterCriteria, Overlay};
pub use domain::{Book, BrowserError, Catalog, Result};
pub use ui::{dispatch, TerminalView, ThemeMode, View};

use app::DEFAULT_PAGE_SIZE;
use dataset::{CatalogSource, EmbeddedCatalog, JsonCatalog};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use ui::theme::{Palette, ThemeState};

/// Browser configuration.
///
/// Every field is optional; unset fields fall through to the next source
/// (see [`Config::merge`]) and finally to built-in behavior.
///
/// # Example
///
/// ```toml
/// catalog_file = "/srv/books.json"
/// page_size = 24
/// theme = "night"
/// palette_file = "~/.config/book-browser/palette.toml"
/// trace_level = "book_browser=debug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path to a JSON dataset. The embedded sample catalog is used when
    /// unset.
    pub catalog_file: Option<String>,

    /// Books per page. Overrides the dataset's `books_per_page`; the
    /// fallback is 36.
    pub page_size: Option<usize>,

    /// Initial mode: `day` or `night` (`light`/`dark` accepted).
    ///
    /// When unset, the terminal's `COLORFGBG` hint decides, then day.
    pub theme: Option<String>,

    /// Built-in palette name: `classic` or `sepia`. Ignored if
    /// `palette_file` is set.
    pub palette: Option<String>,

    /// Path to a TOML palette. Takes precedence over `palette`. See
    /// [`ui::theme`] for the format.
    pub palette_file: Option<String>,

    /// `EnvFilter` directive for the log file. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file location. Default: `<data dir>/book-browser.log`
    pub log_file: Option<String>,
}

impl Config {
    /// Parses configuration from key/value pairs (the command-line flags,
    /// see [`cli::Cli::to_map`]).
    ///
    /// Keys the browser does not know are ignored, so callers can pass their
    /// whole argument map.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Config`] for a zero or non-numeric
    /// `page_size` and for an unknown theme.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use book_browser::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "12".to_string());
    /// map.insert("theme".to_string(), "night".to_string());
    ///
    /// let config = Config::from_map(&map)?;
    /// assert_eq!(config.page_size, Some(12));
    /// assert_eq!(config.theme.as_deref(), Some("night"));
    /// # Ok::<(), book_browser::BrowserError>(())
    /// ```
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let text = |key: &str| {
            map.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let page_size = text("page_size")
            .map(|raw| {
                raw.parse::<usize>().map_err(|_| {
                    BrowserError::Config(format!("page_size must be a positive integer, got {raw:?}"))
                })
            })
            .transpose()?;

        let config = Self {
            catalog_file: text("catalog"),
            page_size,
            theme: text("theme"),
            palette: text("palette"),
            palette_file: text("palette_file"),
            trace_level: text("trace_level"),
            log_file: text("log_file"),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Io`] if the file cannot be read and
    /// [`BrowserError::Config`] if it is not valid configuration.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| BrowserError::Config(format!("failed to parse config TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Layers `overrides` on top of `self`; set fields in `overrides` win.
    #[must_use]
    pub fn merge(self, overrides: Self) -> Self {
        Self {
            catalog_file: overrides.catalog_file.or(self.catalog_file),
            page_size: overrides.page_size.or(self.page_size),
            theme: overrides.theme.or(self.theme),
            palette: overrides.palette.or(self.palette),
            palette_file: overrides.palette_file.or(self.palette_file),
            trace_level: overrides.trace_level.or(self.trace_level),
            log_file: overrides.log_file.or(self.log_file),
        }
    }

    /// Checks the page size and theme name.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Config`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == Some(0) {
            return Err(BrowserError::Config(
                "page_size must be a positive integer, got 0".to_string(),
            ));
        }
        self.theme_mode()?;
        Ok(())
    }

    /// The configured theme mode, if any.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Config`] for an unknown theme name.
    pub fn theme_mode(&self) -> Result<Option<ThemeMode>> {
        self.theme.as_deref().map(str::parse).transpose()
    }

    /// Page size: configuration, then the dataset's `books_per_page`, then
    /// [`DEFAULT_PAGE_SIZE`].
    #[must_use]
    pub fn resolve_page_size(&self, catalog: &Catalog) -> usize {
        self.page_size
            .or_else(|| catalog.books_per_page())
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Initial mode: the configured theme, then the terminal's `hint`, then
    /// day.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Config`] for an unknown theme name.
    pub fn resolve_mode(&self, hint: Option<ThemeMode>) -> Result<ThemeMode> {
        Ok(self.theme_mode()?.or(hint).unwrap_or_default())
    }

    /// Loads the configured palette, or the default one.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Config`] for an unknown palette name and the
    /// errors of [`Palette::from_file`] for a palette file.
    pub fn resolve_palette(&self) -> Result<Palette> {
        if let Some(file) = &self.palette_file {
            return Palette::from_file(infrastructure::expand_tilde(file));
        }
        self.palette.as_deref().map_or_else(
            || Ok(Palette::default()),
            |name| {
                Palette::from_name(name)
                    .ok_or_else(|| BrowserError::Config(format!("unknown palette: {name}")))
            },
        )
    }
}

/// The catalog source selected by `config.catalog_file`.
#[must_use]
pub fn catalog_source(config: &Config) -> Box<dyn CatalogSource> {
    match config.catalog_file.as_deref() {
        Some(path) => Box::new(JsonCatalog::new(infrastructure::expand_tilde(path))),
        None => Box::new(EmbeddedCatalog),
    }
}

/// Loads the configured catalog.
///
/// # Errors
///
/// Returns the source's load error (I/O or dataset validation).
pub fn load_catalog(config: &Config) -> Result<Catalog> {
    let source = catalog_source(config);
    tracing::info!(source = %source.describe(), "loading catalog");
    source.load()
}

/// Builds the controller for a loaded catalog.
///
/// Resolves:
/// - Palette: `palette_file`, then `palette`, then classic
/// - Mode: `theme`, then the terminal's `COLORFGBG` hint, then day
/// - Page size: see [`Config::resolve_page_size`]
///
/// # Errors
///
/// Returns configuration and palette errors; see [`Config::validate`] and
/// [`Config::resolve_palette`].
pub fn initialize(config: &Config, catalog: Arc<Catalog>) -> Result<AppState> {
    let _span = tracing::debug_span!("initialize").entered();

    let palette = config.resolve_palette()?;
    let hint = config
        .theme
        .is_none()
        .then(infrastructure::detect_color_scheme)
        .flatten();
    let mode = config.resolve_mode(hint)?;
    let page_size = config.resolve_page_size(&catalog);

    tracing::info!(
        books = catalog.len(),
        page_size,
        mode = %mode,
        palette = %palette.name,
        "browser initialized"
    );

    Ok(AppState::new(catalog, page_size, ThemeState::new(palette, mode)))
}
