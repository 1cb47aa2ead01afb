//! Application state and pagination.
//!
//! [`AppState`] is the single controller-owned state container: the shared
//! catalog, the current match set with its page cursor ([`BrowseState`]), the
//! theme and the overlay flags. It replaces the page-level globals a browser
//! widget would normally keep, so several independent instances can browse
//! the same catalog side by side.
//!
//! # Pagination model
//!
//! Pages accumulate. Page 1 shows `[0, N)`; each "show more" appends the next
//! `[page*N, (page+1)*N)` slice and bumps the page. A new filter resets to
//! page 1 and the list is redrawn from scratch.
//!
//! # Example
//!
//! ```rust
//! use book_browser::app::AppState;
//! use book_browser::dataset::{CatalogSource, EmbeddedCatalog};
//! use book_browser::ui::theme::ThemeState;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(EmbeddedCatalog.load()?);
//! let state = AppState::new(catalog, 4, ThemeState::default());
//! assert_eq!(state.browse.visible_slice().len(), 4);
//! # Ok::<(), book_browser::BrowserError>(())
//! ```

use super::actions::Action;
use super::filter::{self, FilterCriteria, ANY};
use super::modes::Overlays;
use crate::domain::{Book, Catalog};
use crate::ui::theme::ThemeState;
use crate::ui::viewmodel::{FilterOption, FilterOptions, PreviewItem, ShowMoreLabel};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Page size used when neither the configuration nor the dataset sets one.
pub const DEFAULT_PAGE_SIZE: usize = 36;

/// The active match set and how much of it has been revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    matches: Vec<Book>,
    page: usize,
    page_size: usize,
}

impl BrowseState {
    /// Starts at page 1. A zero page size is bumped to 1.
    #[must_use]
    pub fn new(matches: Vec<Book>, page_size: usize) -> Self {
        Self {
            matches,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub fn matches(&self) -> &[Book] {
        &self.matches
    }

    /// Current page, starting at 1.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    fn revealed(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    /// Everything revealed so far: `matches[0 .. page*N]`, clipped to the
    /// match count.
    #[must_use]
    pub fn visible_slice(&self) -> &[Book] {
        let end = self.revealed().min(self.matches.len());
        &self.matches[..end]
    }

    /// Books not yet revealed, floored at zero.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.matches.len().saturating_sub(self.revealed())
    }

    #[must_use]
    pub fn can_show_more(&self) -> bool {
        self.remaining() > 0
    }

    /// Reveals the next page.
    ///
    /// Returns the newly revealed slice and advances the page, or `None`
    /// without touching the page once everything is shown.
    pub fn show_more(&mut self) -> Option<&[Book]> {
        if !self.can_show_more() {
            return None;
        }

        let start = self.revealed();
        let end = start.saturating_add(self.page_size).min(self.matches.len());
        self.page += 1;

        Some(&self.matches[start..end])
    }

    /// Replaces the match set and returns to page 1.
    pub fn reset(&mut self, matches: Vec<Book>) {
        self.matches = matches;
        self.page = 1;
    }
}

/// Central controller state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Shared immutable dataset.
    pub catalog: Arc<Catalog>,

    /// Current match set and page cursor.
    pub browse: BrowseState,

    /// Criteria of the last search submission (unrestricted initially).
    pub criteria: FilterCriteria,

    pub theme: ThemeState,

    pub overlays: Overlays,

    /// Identifier of the book shown in the detail overlay.
    pub active_book: Option<String>,
}

impl AppState {
    /// Creates a controller showing the full catalog at page 1.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, page_size: usize, theme: ThemeState) -> Self {
        let browse = BrowseState::new(catalog.books().to_vec(), page_size);
        Self {
            catalog,
            browse,
            criteria: FilterCriteria::default(),
            theme,
            overlays: Overlays::default(),
            active_book: None,
        }
    }

    /// Recomputes the match set from the catalog and resets to page 1.
    pub fn apply_filter(&mut self, criteria: FilterCriteria) {
        let _span = tracing::debug_span!("apply_filter",
            total_books = self.catalog.len(),
            previous_matches = self.browse.matches().len()
        )
        .entered();

        let matches = filter::filter(self.catalog.books(), &criteria);
        self.browse.reset(matches);
        self.criteria = criteria;

        tracing::debug!(
            match_count = self.browse.matches().len(),
            remaining = self.browse.remaining(),
            "browse state reset"
        );
    }

    /// Projects books into preview entries.
    #[must_use]
    pub fn preview_items(&self, books: &[Book]) -> Vec<PreviewItem> {
        books
            .iter()
            .map(|book| PreviewItem::from_book(book, &self.catalog))
            .collect()
    }

    #[must_use]
    pub fn show_more_label(&self) -> ShowMoreLabel {
        ShowMoreLabel::new(self.browse.remaining())
    }

    /// Search form selector contents: the `any` sentinel followed by every
    /// author/genre ordered by display name.
    #[must_use]
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            authors: Self::options("All Authors", self.catalog.authors()),
            genres: Self::options("All Genres", self.catalog.genres()),
        }
    }

    fn options(any_label: &str, table: &BTreeMap<String, String>) -> Vec<FilterOption> {
        let mut entries: Vec<(&String, &String)> = table.iter().collect();
        entries.sort_by(|(a_id, a_name), (b_id, b_name)| a_name.cmp(b_name).then(a_id.cmp(b_id)));

        std::iter::once(FilterOption {
            value: ANY.to_string(),
            label: any_label.to_string(),
        })
        .chain(entries.into_iter().map(|(id, name)| FilterOption {
            value: id.clone(),
            label: name.clone(),
        }))
        .collect()
    }

    /// Actions that redraw the list from page 1: empty-state flag, the first
    /// page (replacing whatever was shown) and the "show more" label.
    #[must_use]
    pub fn first_page_actions(&self) -> Vec<Action> {
        vec![
            Action::RenderEmptyState(self.browse.is_empty()),
            Action::RenderPreviewList {
                items: self.preview_items(self.browse.visible_slice()),
                append: false,
            },
            Action::RenderShowMoreLabel(self.show_more_label()),
        ]
    }

    /// Everything a fresh view needs: selector options, theme tokens and the
    /// first page.
    #[must_use]
    pub fn initial_actions(&self) -> Vec<Action> {
        let mut actions = vec![
            Action::PopulateFilterOptions(self.filter_options()),
            Action::ApplyThemeTokens {
                mode: self.theme.mode(),
                tokens: self.theme.tokens(),
            },
        ];
        actions.extend(self.first_page_actions());
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::tests::book;

    fn five_books() -> Vec<Book> {
        (1..=5)
            .map(|n| book(&format!("b{n}"), &format!("Book {n}"), "a1", &["g1"]))
            .collect()
    }

    fn ids(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn cumulative_pages_over_five_books() {
        let mut browse = BrowseState::new(five_books(), 2);
        assert_eq!(ids(browse.visible_slice()), vec!["b1", "b2"]);
        assert_eq!(browse.remaining(), 3);
        assert!(browse.can_show_more());

        let appended = browse.show_more().map(ids_owned);
        assert_eq!(appended, Some(vec!["b3".to_string(), "b4".to_string()]));
        assert_eq!(browse.visible_slice().len(), 4);
        assert_eq!(browse.remaining(), 1);

        let appended = browse.show_more().map(ids_owned);
        assert_eq!(appended, Some(vec!["b5".to_string()]));
        assert_eq!(browse.visible_slice().len(), 5);
        assert_eq!(browse.remaining(), 0);
        assert!(!browse.can_show_more());
    }

    fn ids_owned(books: &[Book]) -> Vec<String> {
        books.iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn show_more_is_inert_when_exhausted() {
        let mut browse = BrowseState::new(five_books(), 10);
        assert_eq!(browse.remaining(), 0);
        assert!(browse.show_more().is_none());
        assert!(browse.show_more().is_none());
        assert_eq!(browse.page(), 1);
        assert_eq!(browse.visible_slice().len(), 5);
    }

    #[test]
    fn remaining_never_goes_negative() {
        let mut browse = BrowseState::new(five_books(), 3);
        browse.show_more();
        assert_eq!(browse.page(), 2);
        assert_eq!(browse.remaining(), 0);

        let empty = BrowseState::new(vec![], 3);
        assert_eq!(empty.remaining(), 0);
        assert!(empty.visible_slice().is_empty());
    }

    #[test]
    fn growth_is_min_of_page_size_and_rest() {
        let mut browse = BrowseState::new(five_books(), 2);
        while browse.can_show_more() {
            let before = browse.visible_slice().len();
            let expected = browse.page_size().min(browse.matches().len() - before);
            browse.show_more();
            assert_eq!(browse.visible_slice().len() - before, expected);
        }
    }

    #[test]
    fn reset_returns_to_first_page() {
        let mut browse = BrowseState::new(five_books(), 2);
        browse.show_more();
        browse.reset(five_books()[..3].to_vec());
        assert_eq!(browse.page(), 1);
        assert_eq!(ids(browse.visible_slice()), vec!["b1", "b2"]);
        assert_eq!(browse.remaining(), 1);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let browse = BrowseState::new(five_books(), 0);
        assert_eq!(browse.page_size(), 1);
    }

    #[test]
    fn filter_options_start_with_sentinel_and_sort_by_name() {
        let catalog = Catalog::new(
            five_books(),
            BTreeMap::from([
                ("a1".to_string(), "Zadie Smith".to_string()),
                ("a2".to_string(), "Anne Carson".to_string()),
            ]),
            BTreeMap::from([("g1".to_string(), "Poetry".to_string())]),
        )
        .unwrap();
        let state = AppState::new(Arc::new(catalog), 2, ThemeState::default());

        let options = state.filter_options();
        let labels: Vec<&str> = options.authors.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["All Authors", "Anne Carson", "Zadie Smith"]);
        assert_eq!(options.authors[0].value, ANY);
        assert_eq!(options.genres.len(), 2);
        assert_eq!(options.genres[0].label, "All Genres");
    }

    #[test]
    fn initial_actions_render_first_page() {
        let catalog = Catalog::new(five_books(), BTreeMap::new(), BTreeMap::new()).unwrap();
        let state = AppState::new(Arc::new(catalog), 2, ThemeState::default());

        let actions = state.initial_actions();
        assert!(matches!(actions[0], Action::PopulateFilterOptions(_)));
        assert!(matches!(actions[1], Action::ApplyThemeTokens { .. }));
        assert_eq!(actions[2], Action::RenderEmptyState(false));
        match &actions[3] {
            Action::RenderPreviewList { items, append } => {
                assert!(!append);
                assert_eq!(items.len(), 2);
            }
            other => panic!("unexpected action: {other:?}"),
        }
        assert_eq!(actions[4], Action::RenderShowMoreLabel(ShowMoreLabel::new(3)));
    }
}
