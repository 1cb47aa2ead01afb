//! Structured logging to a rotating file.
//!
//! The terminal is owned by the UI, so log output never goes to stdout or
//! stderr. Events from `tracing` macros are formatted as plain text lines and
//! appended to a size-rotated file in the data directory.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → book-browser.log
//! ```
//!
//! # Configuration
//!
//! The level comes from `trace_level` (default `"info"`) and accepts full
//! `EnvFilter` directives such as `book_browser::app=debug`. `log_file`
//! overrides the file location.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, log_file_path};
