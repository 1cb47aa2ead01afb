//! Domain layer for the book browser.
//!
//! Core types independent of any presentation or loading concern.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`book`]: The immutable book record
//! - [`catalog`]: The book collection with its author and genre tables

pub mod book;
pub mod catalog;
pub mod error;

pub use book::Book;
pub use catalog::{Catalog, UNKNOWN_AUTHOR};
pub use error::{BrowserError, Result};
