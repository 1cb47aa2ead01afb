//! The immutable catalog dataset.
//!
//! A [`Catalog`] owns every [`Book`] along with the author and genre lookup
//! tables. It is built once by the dataset loader and shared read-only (behind
//! an `Arc`) by every controller instance.

use crate::domain::book::Book;
use crate::domain::error::{BrowserError, Result};
use std::collections::{BTreeMap, HashMap};

/// Display name used when a book references an author missing from the table.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Immutable collection of books plus author and genre display tables.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
    index: HashMap<String, usize>,
    authors: BTreeMap<String, String>,
    genres: BTreeMap<String, String>,
    books_per_page: Option<usize>,
}

impl Catalog {
    /// Builds a catalog, indexing books by identifier.
    ///
    /// Book order is preserved exactly as given; it is the order every filter
    /// result and page is presented in.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Dataset`] if two books share an identifier.
    ///
    /// # Example
    ///
    /// ```
    /// use book_browser::Catalog;
    /// use std::collections::BTreeMap;
    ///
    /// let catalog = Catalog::new(vec![], BTreeMap::new(), BTreeMap::new())?;
    /// assert!(catalog.is_empty());
    /// # Ok::<(), book_browser::BrowserError>(())
    /// ```
    pub fn new(
        books: Vec<Book>,
        authors: BTreeMap<String, String>,
        genres: BTreeMap<String, String>,
    ) -> Result<Self> {
        let mut index = HashMap::with_capacity(books.len());

        for (position, book) in books.iter().enumerate() {
            if index.insert(book.id.clone(), position).is_some() {
                return Err(BrowserError::Dataset(format!(
                    "duplicate book id: {}",
                    book.id
                )));
            }

            if !authors.contains_key(&book.author_id) {
                tracing::warn!(
                    book_id = %book.id,
                    author_id = %book.author_id,
                    "book references unknown author"
                );
            }
            for genre_id in &book.genre_ids {
                if !genres.contains_key(genre_id) {
                    tracing::warn!(
                        book_id = %book.id,
                        genre_id = %genre_id,
                        "book references unknown genre"
                    );
                }
            }
        }

        Ok(Self {
            books,
            index,
            authors,
            genres,
            books_per_page: None,
        })
    }

    /// Attaches the page size shipped with the dataset.
    #[must_use]
    pub const fn with_books_per_page(mut self, books_per_page: Option<usize>) -> Self {
        self.books_per_page = books_per_page;
        self
    }

    /// All books, in catalog order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Looks up a book by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Book> {
        self.index.get(id).and_then(|&position| self.books.get(position))
    }

    /// Author id → display name table.
    #[must_use]
    pub const fn authors(&self) -> &BTreeMap<String, String> {
        &self.authors
    }

    /// Genre id → display name table.
    #[must_use]
    pub const fn genres(&self) -> &BTreeMap<String, String> {
        &self.genres
    }

    /// Resolves an author id to its display name, falling back to
    /// [`UNKNOWN_AUTHOR`].
    #[must_use]
    pub fn author_name(&self, author_id: &str) -> &str {
        self.authors
            .get(author_id)
            .map_or(UNKNOWN_AUTHOR, String::as_str)
    }

    /// Page size declared by the dataset, if any.
    #[must_use]
    pub const fn books_per_page(&self) -> Option<usize> {
        self.books_per_page
    }
}
