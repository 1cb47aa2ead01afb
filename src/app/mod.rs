//! Application layer coordinating state, events, and actions.
//!
//! This module is the logical core of the browser. It sits between the
//! presentation layer (anything implementing [`View`](crate::ui::View)) and
//! the immutable catalog, and owns every piece of mutable browse state.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Event → handle_event → State Mutations → Actions → View
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Presentation commands emitted by the event handler
//! - [`detail`]: Identifier resolution and detail projection
//! - [`filter`]: Title/author/genre filter engine
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Overlay surfaces and their open/closed flags
//! - [`state`]: Central application state and cumulative pagination
//!
//! # Example
//!
//! ```rust
//! use book_browser::app::{handle_event, AppState, Event, FilterCriteria};
//! use book_browser::dataset::{CatalogSource, EmbeddedCatalog};
//! use book_browser::ui::theme::ThemeState;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(EmbeddedCatalog.load()?);
//! let mut state = AppState::new(catalog, 6, ThemeState::default());
//! let criteria = FilterCriteria::from_form("dune", "any", "any");
//! let (_, actions) = handle_event(&mut state, &Event::SubmitSearch(criteria));
//! assert!(!actions.is_empty());
//! # Ok::<(), book_browser::BrowserError>(())
//! ```

pub mod actions;
pub mod detail;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use filter::{FilterCriteria, Selection};
pub use handler::{handle_event, Event};
pub use modes::{Overlay, Overlays};
pub use state::{AppState, BrowseState, DEFAULT_PAGE_SIZE};
