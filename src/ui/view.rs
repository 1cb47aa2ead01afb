//! The presentation boundary.
//!
//! The core never touches a concrete display. It emits [`Action`]s, and
//! [`dispatch`] replays them onto any [`View`] implementation in order. A
//! view is free to draw immediately or to retain what it was told and draw
//! later (the terminal view does the latter).
//!
//! # Example
//!
//! ```rust
//! use book_browser::app::{AppState, Overlay};
//! use book_browser::dataset::{CatalogSource, EmbeddedCatalog};
//! use book_browser::ui::theme::{ThemeMode, ThemeState, ThemeTokens};
//! use book_browser::ui::viewmodel::{DetailView, FilterOptions, PreviewItem, ShowMoreLabel};
//! use book_browser::ui::{dispatch, View};
//! use std::sync::Arc;
//!
//! #[derive(Default)]
//! struct Counter(usize);
//!
//! impl View for Counter {
//!     fn render_preview_list(&mut self, items: &[PreviewItem], append: bool) {
//!         if !append {
//!             self.0 = 0;
//!         }
//!         self.0 += items.len();
//!     }
//!     fn render_show_more_label(&mut self, _label: &ShowMoreLabel) {}
//!     fn render_detail(&mut self, _detail: &DetailView) {}
//!     fn clear_detail(&mut self) {}
//!     fn render_empty_state(&mut self, _is_empty: bool) {}
//!     fn apply_theme_tokens(&mut self, _mode: ThemeMode, _tokens: &ThemeTokens) {}
//!     fn populate_filter_options(&mut self, _options: &FilterOptions) {}
//!     fn open_overlay(&mut self, _overlay: Overlay) {}
//!     fn close_overlay(&mut self, _overlay: Overlay) {}
//! }
//!
//! let catalog = Arc::new(EmbeddedCatalog.load()?);
//! let state = AppState::new(catalog, 4, ThemeState::default());
//! let mut view = Counter::default();
//! dispatch(&mut view, &state.initial_actions());
//! assert_eq!(view.0, 4);
//! # Ok::<(), book_browser::BrowserError>(())
//! ```

use crate::app::{Action, Overlay};
use crate::ui::theme::{ThemeMode, ThemeTokens};
use crate::ui::viewmodel::{DetailView, FilterOptions, PreviewItem, ShowMoreLabel};

/// Presentation operations the controller can request.
pub trait View {
    /// Draws preview entries, clearing the list first unless `append`.
    fn render_preview_list(&mut self, items: &[PreviewItem], append: bool);

    /// Updates the "show more" control with the remaining count.
    fn render_show_more_label(&mut self, label: &ShowMoreLabel);

    fn render_detail(&mut self, detail: &DetailView);

    fn clear_detail(&mut self);

    /// Shows the "no results" message when `is_empty`, hides it otherwise.
    fn render_empty_state(&mut self, is_empty: bool);

    fn apply_theme_tokens(&mut self, mode: ThemeMode, tokens: &ThemeTokens);

    fn populate_filter_options(&mut self, options: &FilterOptions);

    fn open_overlay(&mut self, overlay: Overlay);

    fn close_overlay(&mut self, overlay: Overlay);

    /// Brings the first preview entry back into view. Views without a scroll
    /// position can ignore it.
    fn scroll_to_top(&mut self) {}
}

/// Applies actions to a view, in order.
#[tracing::instrument(level = "debug", skip_all, fields(action_count = actions.len()))]
pub fn dispatch<V: View + ?Sized>(view: &mut V, actions: &[Action]) {
    for action in actions {
        match action {
            Action::RenderPreviewList { items, append } => {
                view.render_preview_list(items, *append);
            }
            Action::RenderShowMoreLabel(label) => view.render_show_more_label(label),
            Action::RenderDetail(detail) => view.render_detail(detail),
            Action::ClearDetail => view.clear_detail(),
            Action::RenderEmptyState(is_empty) => view.render_empty_state(*is_empty),
            Action::ApplyThemeTokens { mode, tokens } => view.apply_theme_tokens(*mode, tokens),
            Action::PopulateFilterOptions(options) => view.populate_filter_options(options),
            Action::OpenOverlay(overlay) => view.open_overlay(*overlay),
            Action::CloseOverlay(overlay) => view.close_overlay(*overlay),
            Action::ScrollToTop => view.scroll_to_top(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every call by name.
    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl View for Recorder {
        fn render_preview_list(&mut self, items: &[PreviewItem], append: bool) {
            self.0.push(format!("list:{}:{append}", items.len()));
        }
        fn render_show_more_label(&mut self, label: &ShowMoreLabel) {
            self.0.push(format!("label:{}", label.remaining));
        }
        fn render_detail(&mut self, detail: &DetailView) {
            self.0.push(format!("detail:{}", detail.id));
        }
        fn clear_detail(&mut self) {
            self.0.push("clear".to_string());
        }
        fn render_empty_state(&mut self, is_empty: bool) {
            self.0.push(format!("empty:{is_empty}"));
        }
        fn apply_theme_tokens(&mut self, mode: ThemeMode, _tokens: &ThemeTokens) {
            self.0.push(format!("theme:{mode}"));
        }
        fn populate_filter_options(&mut self, options: &FilterOptions) {
            self.0.push(format!("options:{}", options.authors.len()));
        }
        fn open_overlay(&mut self, overlay: Overlay) {
            self.0.push(format!("open:{overlay}"));
        }
        fn close_overlay(&mut self, overlay: Overlay) {
            self.0.push(format!("close:{overlay}"));
        }
    }

    #[test]
    fn dispatch_preserves_order() {
        let mut view = Recorder::default();
        dispatch(
            &mut view,
            &[
                Action::RenderEmptyState(false),
                Action::RenderPreviewList { items: vec![], append: false },
                Action::RenderShowMoreLabel(ShowMoreLabel::new(2)),
                Action::ScrollToTop,
                Action::CloseOverlay(Overlay::Search),
                Action::ClearDetail,
            ],
        );

        assert_eq!(
            view.0,
            vec!["empty:false", "list:0:false", "label:2", "close:search", "clear"]
        );
    }
}
