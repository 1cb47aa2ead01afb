//! Actions: presentation commands produced by the event handler.
//!
//! The handler returns a `Vec<Action>` for every event; the caller hands them
//! to [`dispatch`](crate::ui::dispatch), which replays them onto a
//! [`View`](crate::ui::View) in order. Actions are the only way the core
//! reaches the presentation layer.
//!
//! # Example
//!
//! ```rust
//! use book_browser::app::{Action, Overlay};
//! use book_browser::ui::viewmodel::ShowMoreLabel;
//!
//! let actions = vec![
//!     Action::RenderShowMoreLabel(ShowMoreLabel::new(3)),
//!     Action::CloseOverlay(Overlay::Search),
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::app::modes::Overlay;
use crate::ui::theme::{ThemeMode, ThemeTokens};
use crate::ui::viewmodel::{DetailView, FilterOptions, PreviewItem, ShowMoreLabel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Draws preview entries.
    ///
    /// With `append == false` the list is cleared first; otherwise the items
    /// are added after what is already shown.
    RenderPreviewList {
        items: Vec<PreviewItem>,
        append: bool,
    },

    /// Updates the "show more" control.
    RenderShowMoreLabel(ShowMoreLabel),

    /// Fills the detail overlay.
    RenderDetail(DetailView),

    /// Empties the detail overlay.
    ClearDetail,

    /// Shows or hides the "no results" message.
    RenderEmptyState(bool),

    /// Applies the color roles for a theme mode.
    ApplyThemeTokens {
        mode: ThemeMode,
        tokens: ThemeTokens,
    },

    /// Fills the author and genre selectors of the search form.
    PopulateFilterOptions(FilterOptions),

    /// Shows an overlay. Opening search also focuses its title field.
    OpenOverlay(Overlay),

    /// Hides an overlay.
    CloseOverlay(Overlay),

    /// Scrolls the preview list back to its first entry.
    ScrollToTop,
}
