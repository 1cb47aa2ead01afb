//! Infrastructure layer for filesystem and environment interactions.
//!
//! - [`paths`]: data directory resolution and tilde expansion
//! - [`environment`]: terminal size and ambient light/dark preference

pub mod environment;
pub mod paths;

pub use environment::{
    detect_color_scheme, parse_colorfgbg, screen_size, terminal_size, DEFAULT_COLS, DEFAULT_ROWS,
};
pub use paths::{expand_tilde, get_data_dir};
