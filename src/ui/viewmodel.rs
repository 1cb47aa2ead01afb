//! Display-ready projections handed across the presentation boundary.
//!
//! These carry no business logic. They are computed by the controller from
//! catalog records and consumed by a [`View`](crate::ui::View) implementation.

use crate::domain::{Book, Catalog};

/// One entry in the preview list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewItem {
    /// Book identifier, echoed back on click.
    pub id: String,
    pub title: String,
    /// Author display name.
    pub author: String,
    /// Cover image URI.
    pub image: String,
}

impl PreviewItem {
    #[must_use]
    pub fn from_book(book: &Book, catalog: &Catalog) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            author: catalog.author_name(&book.author_id).to_string(),
            image: book.image.clone(),
        }
    }
}

/// State of the "show more" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowMoreLabel {
    /// Books not yet revealed; never negative.
    pub remaining: usize,
    /// Whether the control accepts clicks.
    pub enabled: bool,
}

impl ShowMoreLabel {
    #[must_use]
    pub const fn new(remaining: usize) -> Self {
        Self {
            remaining,
            enabled: remaining > 0,
        }
    }
}

/// Content of the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: String,
    /// Image shown blurred behind the card.
    pub backdrop: String,
    /// Image shown on the card itself.
    pub image: String,
    pub title: String,
    /// `"<author> (<year>)"`.
    pub subtitle: String,
    pub description: String,
}

/// A selectable value in the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    /// Submitted value (`"any"` for the leading sentinel).
    pub value: String,
    pub label: String,
}

/// Author and genre selector contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub authors: Vec<FilterOption>,
    pub genres: Vec<FilterOption>,
}

/// Message shown when the match set is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            message: "No results found.".to_string(),
            subtitle: "Your filters might be too narrow.".to_string(),
        }
    }
}
