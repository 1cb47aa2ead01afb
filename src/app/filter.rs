//! Filter engine: maps search criteria to the matching subset of the catalog.
//!
//! Filtering is a single pure pass over the books. A book is kept iff its
//! title, author and genre predicates all hold, and the result keeps catalog
//! order.

use crate::domain::Book;

/// Form value that stands for "no restriction" in the author and genre
/// selectors.
pub const ANY: &str = "any";

/// An author or genre selector value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Match every book.
    #[default]
    Any,
    /// Match books referencing this id.
    Id(String),
}

impl Selection {
    /// Parses a raw form value, mapping empty input and the `"any"` sentinel
    /// to [`Selection::Any`].
    ///
    /// # Example
    ///
    /// ```
    /// use book_browser::app::filter::Selection;
    ///
    /// assert_eq!(Selection::from_form("any"), Selection::Any);
    /// assert_eq!(Selection::from_form("a01"), Selection::Id("a01".to_string()));
    /// ```
    #[must_use]
    pub fn from_form(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ANY {
            Self::Any
        } else {
            Self::Id(value.to_string())
        }
    }

    /// The form value this selection round-trips to.
    #[must_use]
    pub fn as_form(&self) -> &str {
        match self {
            Self::Any => ANY,
            Self::Id(id) => id,
        }
    }
}

/// Criteria built from one search submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Case-insensitive title substring. Empty or whitespace-only matches all.
    pub title: String,
    pub author: Selection,
    pub genre: Selection,
}

impl FilterCriteria {
    /// Builds criteria from the three raw search form fields.
    #[must_use]
    pub fn from_form(title: &str, author: &str, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            author: Selection::from_form(author),
            genre: Selection::from_form(genre),
        }
    }

    /// Returns `true` when no field restricts the result.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.title.trim().is_empty() && self.author == Selection::Any && self.genre == Selection::Any
    }

    /// Returns `true` if the book satisfies all three predicates.
    #[must_use]
    pub fn matches(&self, book: &Book) -> bool {
        let title_match = self.title.trim().is_empty()
            || book
                .title
                .to_lowercase()
                .contains(&self.title.to_lowercase());

        let author_match = match &self.author {
            Selection::Any => true,
            Selection::Id(id) => &book.author_id == id,
        };

        let genre_match = match &self.genre {
            Selection::Any => true,
            Selection::Id(id) => book.has_genre(id),
        };

        title_match && author_match && genre_match
    }
}

/// Returns the books matching `criteria`, in their original order.
///
/// # Example
///
/// ```
/// use book_browser::app::filter::{filter, FilterCriteria};
/// use book_browser::dataset::{CatalogSource, EmbeddedCatalog};
///
/// let catalog = EmbeddedCatalog.load()?;
/// let all = filter(catalog.books(), &FilterCriteria::default());
/// assert_eq!(all.len(), catalog.len());
/// # Ok::<(), book_browser::BrowserError>(())
/// ```
#[must_use]
pub fn filter(books: &[Book], criteria: &FilterCriteria) -> Vec<Book> {
    let _span = tracing::debug_span!("filter",
        total_books = books.len(),
        title_len = criteria.title.len(),
        author = criteria.author.as_form(),
        genre = criteria.genre.as_form()
    )
    .entered();

    let matches: Vec<Book> = books
        .iter()
        .filter(|book| criteria.matches(book))
        .cloned()
        .collect();

    tracing::debug!(match_count = matches.len(), "filter applied");
    matches
}
