//! Terminal view: a retained-mode [`View`] that draws with ANSI sequences.
//!
//! [`TerminalView`] records what the controller tells it (entries, label,
//! overlays, tokens) and paints the whole screen on [`TerminalView::render`].
//! Exactly one surface fills the body, chosen by priority:
//!
//! 1. Detail overlay
//! 2. Settings overlay
//! 3. Search overlay
//! 4. Empty state (when the filter matched nothing)
//! 5. Preview list
//!
//! # Example
//!
//! ```rust
//! use book_browser::app::AppState;
//! use book_browser::dataset::{CatalogSource, EmbeddedCatalog};
//! use book_browser::ui::theme::ThemeState;
//! use book_browser::ui::{dispatch, TerminalView};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(EmbeddedCatalog.load()?);
//! let state = AppState::new(catalog, 6, ThemeState::default());
//! let mut view = TerminalView::default();
//! dispatch(&mut view, &state.initial_actions());
//!
//! let mut screen = Vec::new();
//! view.render(&mut screen, 24, 80)?;
//! assert_eq!(view.item_at(1), Some("b001"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::app::{Overlay, Overlays};
use crate::ui::components::{self, detail, empty, footer, header, list, search, settings};
use crate::ui::helpers::position_cursor;
use crate::ui::theme::{self, ThemeMode, ThemeState, ThemeTokens};
use crate::ui::view::View;
use crate::ui::viewmodel::{DetailView, EmptyState, FilterOptions, PreviewItem, ShowMoreLabel};
use std::io::{self, Write};

/// Rows taken by header, two borders and footer.
const CHROME_ROWS: usize = 4;

/// Retained presentation state for an ANSI terminal.
#[derive(Debug, Clone)]
pub struct TerminalView {
    items: Vec<PreviewItem>,
    label: ShowMoreLabel,
    detail: Option<DetailView>,
    empty: bool,
    empty_state: EmptyState,
    mode: ThemeMode,
    tokens: ThemeTokens,
    options: FilterOptions,
    overlays: Overlays,
    first_visible: usize,
    title_focused: bool,
}

impl Default for TerminalView {
    fn default() -> Self {
        let theme = ThemeState::default();
        Self {
            items: Vec::new(),
            label: ShowMoreLabel::new(0),
            detail: None,
            empty: false,
            empty_state: EmptyState::default(),
            mode: theme.mode(),
            tokens: theme.tokens(),
            options: FilterOptions::default(),
            overlays: Overlays::default(),
            first_visible: 0,
            title_focused: false,
        }
    }
}

impl TerminalView {
    #[must_use]
    pub fn items(&self) -> &[PreviewItem] {
        &self.items
    }

    #[must_use]
    pub const fn overlays(&self) -> &Overlays {
        &self.overlays
    }

    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub const fn label(&self) -> &ShowMoreLabel {
        &self.label
    }

    #[must_use]
    pub const fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.empty
    }

    /// Index of the first entry drawn.
    #[must_use]
    pub const fn first_visible(&self) -> usize {
        self.first_visible
    }

    /// Book identifier shown at 1-based list position `number`.
    #[must_use]
    pub fn item_at(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|index| self.items.get(index))
            .map(|item| item.id.as_str())
    }

    /// Paints the full screen.
    ///
    /// Leaves the last row free for the caller's prompt.
    ///
    /// # Errors
    ///
    /// Propagates write errors from `out`.
    pub fn render<W: Write + ?Sized>(&self, out: &mut W, rows: usize, cols: usize) -> io::Result<()> {
        let _span = tracing::debug_span!("render", rows, cols, items = self.items.len()).entered();

        let tokens = &self.tokens;
        write!(out, "{}\u{1b}[2J", tokens.background().bg())?;

        let mut current_row = 1;
        current_row = header::render_header(out, current_row, self.mode, tokens, cols)?;
        current_row = components::render_border(out, current_row, tokens, cols)?;

        let body_rows = Self::body_rows(rows);
        let body_end = current_row + body_rows;
        let drawn_to = self.render_body(out, current_row, body_rows, cols)?;
        components::render_blank_rows(out, drawn_to, body_end, tokens, cols)?;

        current_row = components::render_border(out, body_end, tokens, cols)?;
        footer::render_footer(out, current_row, &self.label, tokens, cols)?;

        position_cursor(out, rows.max(1), 1)?;
        write!(out, "{}", theme::reset())?;
        out.flush()
    }

    const fn body_rows(rows: usize) -> usize {
        rows.saturating_sub(CHROME_ROWS + 1)
    }

    fn render_body<W: Write + ?Sized>(
        &self,
        out: &mut W,
        row: usize,
        body_rows: usize,
        cols: usize,
    ) -> io::Result<usize> {
        let tokens = &self.tokens;

        match self.overlays.topmost() {
            Some(Overlay::Detail) => match &self.detail {
                Some(view) => detail::render_detail_overlay(out, row, view, tokens, cols, body_rows),
                None => Ok(row),
            },
            Some(Overlay::Settings) => {
                if body_rows < 5 {
                    return Ok(row);
                }
                settings::render_settings_overlay(out, row, self.mode, tokens, cols)
            }
            Some(Overlay::Search) => search::render_search_overlay(
                out,
                row,
                &self.options,
                self.title_focused,
                tokens,
                cols,
                body_rows,
            ),
            None if self.empty => {
                if body_rows < 3 {
                    return Ok(row);
                }
                empty::render_empty_state(out, row, &self.empty_state, tokens, cols)
            }
            None => list::render_list(
                out,
                row,
                &self.items,
                self.first_visible,
                body_rows,
                tokens,
                cols,
            ),
        }
    }
}

impl View for TerminalView {
    fn render_preview_list(&mut self, items: &[PreviewItem], append: bool) {
        if append {
            // Bring the newly revealed page into view.
            self.first_visible = self.items.len();
            self.items.extend_from_slice(items);
        } else {
            self.items = items.to_vec();
            self.first_visible = 0;
        }
    }

    fn render_show_more_label(&mut self, label: &ShowMoreLabel) {
        self.label = *label;
    }

    fn render_detail(&mut self, detail: &DetailView) {
        self.detail = Some(detail.clone());
    }

    fn clear_detail(&mut self) {
        self.detail = None;
    }

    fn render_empty_state(&mut self, is_empty: bool) {
        self.empty = is_empty;
    }

    fn apply_theme_tokens(&mut self, mode: ThemeMode, tokens: &ThemeTokens) {
        self.mode = mode;
        self.tokens = *tokens;
    }

    fn populate_filter_options(&mut self, options: &FilterOptions) {
        self.options = options.clone();
    }

    fn open_overlay(&mut self, overlay: Overlay) {
        self.overlays.set(overlay, true);
        if overlay == Overlay::Search {
            self.title_focused = true;
        }
    }

    fn close_overlay(&mut self, overlay: Overlay) {
        self.overlays.set(overlay, false);
        if overlay == Overlay::Search {
            self.title_focused = false;
        }
    }

    fn scroll_to_top(&mut self) {
        self.first_visible = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, AppState, Event, FilterCriteria};
    use crate::dataset::{CatalogSource, EmbeddedCatalog};
    use crate::ui::components::tests::plain;
    use crate::ui::view::dispatch;
    use std::sync::Arc;

    fn setup(page_size: usize) -> (AppState, TerminalView) {
        let catalog = Arc::new(EmbeddedCatalog.load().unwrap());
        let state = AppState::new(catalog, page_size, ThemeState::default());
        let mut view = TerminalView::default();
        dispatch(&mut view, &state.initial_actions());
        (state, view)
    }

    fn screen(view: &TerminalView) -> String {
        let mut out = Vec::new();
        view.render(&mut out, 24, 80).unwrap();
        plain(&out)
    }

    #[test]
    fn initial_screen_lists_first_page() {
        let (_, view) = setup(6);

        assert_eq!(view.items().len(), 6);
        assert_eq!(view.label().remaining, 8);
        let text = screen(&view);
        assert!(text.contains("Book Browser"));
        assert!(text.contains("   1. Dune"));
        assert!(text.contains("Show more (8)"));
    }

    #[test]
    fn show_more_appends_and_scrolls_to_new_page() {
        let (mut state, mut view) = setup(6);

        let (_, actions) = handle_event(&mut state, &Event::ShowMore);
        dispatch(&mut view, &actions);

        assert_eq!(view.items().len(), 12);
        assert_eq!(view.first_visible(), 6);
        assert_eq!(view.item_at(7), state.browse.visible_slice().get(6).map(|b| b.id.as_str()));
        assert!(screen(&view).contains("   7. "));
    }

    #[test]
    fn search_replaces_list_and_scrolls_to_top() {
        let (mut state, mut view) = setup(6);
        let (_, actions) = handle_event(&mut state, &Event::ShowMore);
        dispatch(&mut view, &actions);

        let criteria = FilterCriteria::from_form("dune", "any", "any");
        let (_, actions) = handle_event(&mut state, &Event::SubmitSearch(criteria));
        dispatch(&mut view, &actions);

        assert_eq!(view.first_visible(), 0);
        let titles: Vec<&str> = view.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Dune Messiah", "Children of Dune"]);
        assert!(screen(&view).contains("All books shown"));
    }

    #[test]
    fn empty_result_shows_message() {
        let (mut state, mut view) = setup(6);
        let criteria = FilterCriteria::from_form("", "author_07", "any");
        let (_, actions) = handle_event(&mut state, &Event::SubmitSearch(criteria));
        dispatch(&mut view, &actions);

        assert!(view.is_empty());
        assert!(view.items().is_empty());
        assert!(screen(&view).contains("No results found."));
    }

    #[test]
    fn detail_overlay_takes_priority() {
        let (mut state, mut view) = setup(6);
        dispatch(&mut view, &handle_event(&mut state, &Event::OpenOverlay(Overlay::Search)).1);
        dispatch(&mut view, &handle_event(&mut state, &Event::ClickItem("b001".to_string())).1);

        let text = screen(&view);
        assert!(text.contains("cover: "));
        assert!(!text.contains("Authors"));

        dispatch(&mut view, &handle_event(&mut state, &Event::CloseOverlay(Overlay::Detail)).1);
        assert!(view.detail().is_none());
        assert!(screen(&view).contains("Authors"));
    }

    #[test]
    fn opening_search_focuses_title() {
        let (mut state, mut view) = setup(6);
        dispatch(&mut view, &handle_event(&mut state, &Event::OpenOverlay(Overlay::Search)).1);
        assert!(screen(&view).contains("Title: ▏"));
    }

    #[test]
    fn theme_tokens_recolor_the_screen() {
        let (mut state, mut view) = setup(6);
        dispatch(&mut view, &handle_event(&mut state, &Event::SubmitTheme(ThemeMode::Night)).1);

        assert_eq!(view.mode(), ThemeMode::Night);
        let mut out = Vec::new();
        view.render(&mut out, 24, 80).unwrap();
        let raw = String::from_utf8(out).unwrap();
        assert!(raw.starts_with(&state.theme.tokens().background().bg()));
        assert!(raw.contains("night"));
    }

    #[test]
    fn item_at_is_one_based() {
        let (_, view) = setup(6);
        assert_eq!(view.item_at(0), None);
        assert_eq!(view.item_at(1), Some("b001"));
        assert_eq!(view.item_at(99), None);
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let (_, view) = setup(6);
        let mut out = Vec::new();
        view.render(&mut out, 2, 3).unwrap();
    }
}
