//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow:
//! 1. A user action arrives as an [`Event`]
//! 2. [`handle_event`] mutates [`AppState`]
//! 3. The presentation commands it produced are returned as [`Action`]s
//!
//! Every degenerate input (an empty result, an unknown identifier, "show
//! more" with nothing left) is a silent no-op, never an error.
//!
//! # Example
//!
//! ```rust
//! use book_browser::app::{handle_event, AppState, Event};
//! use book_browser::dataset::{CatalogSource, EmbeddedCatalog};
//! use book_browser::ui::theme::ThemeState;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(EmbeddedCatalog.load()?);
//! let mut state = AppState::new(catalog, 4, ThemeState::default());
//! let (redraw, actions) = handle_event(&mut state, &Event::ShowMore);
//! assert!(redraw);
//! assert!(!actions.is_empty());
//! # Ok::<(), book_browser::BrowserError>(())
//! ```

use super::actions::Action;
use super::detail;
use super::filter::FilterCriteria;
use super::modes::Overlay;
use super::state::AppState;
use crate::ui::theme::ThemeMode;

/// User input routed into the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Search form submitted.
    SubmitSearch(FilterCriteria),
    /// Settings form submitted.
    SubmitTheme(ThemeMode),
    /// "Show more" clicked.
    ShowMore,
    /// A preview entry clicked.
    ClickItem(String),
    /// Header search/settings buttons.
    OpenOverlay(Overlay),
    /// Close and cancel controls.
    CloseOverlay(Overlay),
}

/// Processes an event, mutates state and returns the presentation commands.
///
/// # Returns
///
/// `(redraw, actions)`: `redraw` is `true` when anything visible changed; the
/// actions are to be dispatched in order. Both may be empty/false when the
/// event was a no-op.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SubmitSearch(criteria) => {
            tracing::debug!(
                title = %criteria.title,
                author = criteria.author.as_form(),
                genre = criteria.genre.as_form(),
                "search submitted"
            );

            state.apply_filter(criteria.clone());

            let mut actions = state.first_page_actions();
            actions.push(Action::ScrollToTop);
            state.overlays.set(Overlay::Search, false);
            actions.push(Action::CloseOverlay(Overlay::Search));

            (true, actions)
        }
        Event::SubmitTheme(mode) => {
            let mut actions = vec![];

            if state.theme.set(*mode) {
                actions.push(Action::ApplyThemeTokens {
                    mode: state.theme.mode(),
                    tokens: state.theme.tokens(),
                });
            }

            state.overlays.set(Overlay::Settings, false);
            actions.push(Action::CloseOverlay(Overlay::Settings));
            (true, actions)
        }
        Event::ShowMore => {
            let Some(slice) = state.browse.show_more() else {
                tracing::debug!("nothing left to show");
                return (false, vec![]);
            };
            let slice = slice.to_vec();

            tracing::debug!(
                appended = slice.len(),
                page = state.browse.page(),
                remaining = state.browse.remaining(),
                "revealed next page"
            );

            (
                true,
                vec![
                    Action::RenderPreviewList {
                        items: state.preview_items(&slice),
                        append: true,
                    },
                    Action::RenderShowMoreLabel(state.show_more_label()),
                ],
            )
        }
        Event::ClickItem(id) => {
            let Some(book) = detail::resolve(&state.catalog, id) else {
                return (false, vec![]);
            };

            let view = detail::compose(book, &state.catalog);
            tracing::debug!(book_id = %view.id, title = %view.title, "opening detail");

            state.active_book = Some(view.id.clone());
            state.overlays.set(Overlay::Detail, true);
            (
                true,
                vec![Action::RenderDetail(view), Action::OpenOverlay(Overlay::Detail)],
            )
        }
        Event::OpenOverlay(overlay) => {
            if !state.overlays.set(*overlay, true) {
                return (false, vec![]);
            }
            tracing::debug!(overlay = %overlay, "overlay opened");
            (true, vec![Action::OpenOverlay(*overlay)])
        }
        Event::CloseOverlay(overlay) => {
            if !state.overlays.set(*overlay, false) {
                return (false, vec![]);
            }
            tracing::debug!(overlay = %overlay, "overlay closed");

            let mut actions = vec![Action::CloseOverlay(*overlay)];
            if *overlay == Overlay::Detail {
                state.active_book = None;
                actions.push(Action::ClearDetail);
            }
            (true, actions)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::tests::book;
    use crate::domain::{Book, Catalog};
    use crate::ui::theme::ThemeState;
    use crate::ui::viewmodel::ShowMoreLabel;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    fn state_with(books: Vec<Book>, page_size: usize) -> AppState {
        let catalog = Catalog::new(
            books,
            BTreeMap::from([("author_01".to_string(), "Frank Herbert".to_string())]),
            BTreeMap::from([("scifi".to_string(), "Science Fiction".to_string())]),
        )
        .unwrap();
        AppState::new(Arc::new(catalog), page_size, ThemeState::default())
    }

    fn five_books() -> Vec<Book> {
        (1..=5)
            .map(|n| book(&format!("b{n}"), &format!("Book {n}"), "author_01", &["scifi"]))
            .collect()
    }

    fn preview_ids(action: &Action) -> (Vec<String>, bool) {
        match action {
            Action::RenderPreviewList { items, append } => {
                (items.iter().map(|i| i.id.clone()).collect(), *append)
            }
            other => panic!("expected preview list, got {other:?}"),
        }
    }

    #[test]
    fn show_more_walks_through_five_books() {
        let mut state = state_with(five_books(), 2);

        let (redraw, actions) = handle_event(&mut state, &Event::ShowMore);
        assert!(redraw);
        assert_eq!(preview_ids(&actions[0]), (vec!["b3".to_string(), "b4".to_string()], true));
        assert_eq!(actions[1], Action::RenderShowMoreLabel(ShowMoreLabel::new(1)));

        let (_, actions) = handle_event(&mut state, &Event::ShowMore);
        assert_eq!(preview_ids(&actions[0]), (vec!["b5".to_string()], true));
        assert_eq!(
            actions[1],
            Action::RenderShowMoreLabel(ShowMoreLabel { remaining: 0, enabled: false })
        );

        let (redraw, actions) = handle_event(&mut state, &Event::ShowMore);
        assert!(!redraw);
        assert!(actions.is_empty());
        assert_eq!(state.browse.page(), 3);
    }

    #[test]
    fn search_matches_case_insensitive_title() {
        let mut state = state_with(
            vec![
                book("b1", "Emma", "author_02", &[]),
                book("b2", "Dune Messiah", "author_01", &["scifi"]),
            ],
            36,
        );
        state.overlays.set(Overlay::Search, true);

        let criteria = FilterCriteria::from_form("dune", "any", "any");
        let (redraw, actions) = handle_event(&mut state, &Event::SubmitSearch(criteria));

        assert!(redraw);
        assert_eq!(actions[0], Action::RenderEmptyState(false));
        assert_eq!(preview_ids(&actions[1]), (vec!["b2".to_string()], false));
        assert_eq!(actions[2], Action::RenderShowMoreLabel(ShowMoreLabel::new(0)));
        assert_eq!(actions[3], Action::ScrollToTop);
        assert_eq!(actions[4], Action::CloseOverlay(Overlay::Search));
        assert!(!state.overlays.is_open(Overlay::Search));
    }

    #[test]
    fn search_with_absent_author_signals_empty_state() {
        let mut state = state_with(five_books(), 2);

        let criteria = FilterCriteria::from_form("", "author_07", "any");
        let (_, actions) = handle_event(&mut state, &Event::SubmitSearch(criteria));

        assert!(state.browse.is_empty());
        assert_eq!(actions[0], Action::RenderEmptyState(true));
        assert_eq!(preview_ids(&actions[1]), (vec![], false));
        assert_eq!(
            actions[2],
            Action::RenderShowMoreLabel(ShowMoreLabel { remaining: 0, enabled: false })
        );
    }

    #[test]
    fn search_resets_to_first_page() {
        let mut state = state_with(five_books(), 2);
        handle_event(&mut state, &Event::ShowMore);
        assert_eq!(state.browse.page(), 2);

        let criteria = FilterCriteria::from_form("book", "any", "scifi");
        handle_event(&mut state, &Event::SubmitSearch(criteria.clone()));

        assert_eq!(state.browse.page(), 1);
        assert_eq!(state.browse.remaining(), 3);
        assert_eq!(state.criteria, criteria);
    }

    #[test]
    fn unknown_item_click_is_a_no_op() {
        let mut state = state_with(five_books(), 2);
        let before = (state.browse.clone(), state.overlays, state.active_book.clone());

        let (redraw, actions) = handle_event(&mut state, &Event::ClickItem("stale".to_string()));

        assert!(!redraw);
        assert!(actions.is_empty());
        assert_eq!((state.browse.clone(), state.overlays, state.active_book.clone()), before);
    }

    #[test]
    fn item_click_opens_detail() {
        let mut state = state_with(five_books(), 2);

        let (redraw, actions) = handle_event(&mut state, &Event::ClickItem("b4".to_string()));

        assert!(redraw);
        match &actions[0] {
            Action::RenderDetail(view) => {
                assert_eq!(view.title, "Book 4");
                assert_eq!(view.subtitle, "Frank Herbert (1965)");
            }
            other => panic!("expected detail, got {other:?}"),
        }
        assert_eq!(actions[1], Action::OpenOverlay(Overlay::Detail));
        assert_eq!(state.active_book.as_deref(), Some("b4"));

        let (_, actions) = handle_event(&mut state, &Event::CloseOverlay(Overlay::Detail));
        assert_eq!(
            actions,
            vec![Action::CloseOverlay(Overlay::Detail), Action::ClearDetail]
        );
        assert!(state.active_book.is_none());
    }

    #[test]
    fn theme_submission_is_idempotent() {
        let mut state = state_with(five_books(), 2);

        let (_, first) = handle_event(&mut state, &Event::SubmitTheme(ThemeMode::Night));
        let tokens = state.theme.tokens();
        assert!(matches!(
            first[0],
            Action::ApplyThemeTokens { mode: ThemeMode::Night, .. }
        ));
        assert_eq!(first[1], Action::CloseOverlay(Overlay::Settings));

        let (_, second) = handle_event(&mut state, &Event::SubmitTheme(ThemeMode::Night));
        assert_eq!(second, vec![Action::CloseOverlay(Overlay::Settings)]);
        assert_eq!(state.theme.tokens(), tokens);
    }

    #[test]
    fn reopening_an_open_overlay_is_a_no_op() {
        let mut state = state_with(five_books(), 2);

        let (redraw, actions) = handle_event(&mut state, &Event::OpenOverlay(Overlay::Search));
        assert!(redraw);
        assert_eq!(actions, vec![Action::OpenOverlay(Overlay::Search)]);

        let (redraw, actions) = handle_event(&mut state, &Event::OpenOverlay(Overlay::Search));
        assert!(!redraw);
        assert!(actions.is_empty());

        let (_, actions) = handle_event(&mut state, &Event::CloseOverlay(Overlay::Settings));
        assert!(actions.is_empty());
    }
}
