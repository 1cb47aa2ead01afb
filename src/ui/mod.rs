//! User interface layer: the presentation boundary and a terminal adapter.
//!
//! The core talks to the screen only through [`View`]. This module defines
//! that trait, the display-ready projections it receives, the day/night theme,
//! and one concrete implementation, [`TerminalView`], which draws ANSI-styled
//! output through composable components.
//!
//! # Architecture
//!
//! ```text
//! Vec<Action> → dispatch → View (TerminalView) → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`view`]: The `View` trait and action dispatch
//! - [`viewmodel`]: Projections crossing the boundary (preview, detail, label)
//! - [`renderer`]: Retained terminal view and screen layout
//! - [`components`]: Composable component renderers
//! - [`helpers`]: Cursor positioning, truncation, wrapping
//! - [`theme`]: Day/night mode, palettes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod view;
pub mod viewmodel;

pub use renderer::TerminalView;
pub use theme::{Palette, ThemeMode, ThemeState, ThemeTokens};
pub use view::{dispatch, View};
pub use viewmodel::{DetailView, EmptyState, FilterOption, FilterOptions, PreviewItem, ShowMoreLabel};
