//! Book domain model.
//!
//! A [`Book`] is one immutable catalog record. Books are created once by the
//! dataset loader and never mutated afterwards; the browse state only ever
//! holds clones of them.

use chrono::{Datelike, NaiveDate};

/// A single catalog entry.
///
/// # Fields
///
/// - `id`: Opaque unique identifier
/// - `title`: Display title, matched by the title filter
/// - `author_id`: Key into the catalog's author table
/// - `genre_ids`: Keys into the catalog's genre table, in dataset order
/// - `image`: Cover image URI
/// - `description`: Long-form blurb shown in the detail overlay
/// - `published`: Publication date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author_id: String,
    pub genre_ids: Vec<String>,
    pub image: String,
    pub description: String,
    pub published: NaiveDate,
}

impl Book {
    /// Returns the publication year taken from the record's own date.
    ///
    /// # Examples
    ///
    /// ```
    /// use book_browser::Book;
    /// use chrono::NaiveDate;
    ///
    /// let book = Book {
    ///     id: "b1".to_string(),
    ///     title: "Dune".to_string(),
    ///     author_id: "a1".to_string(),
    ///     genre_ids: vec!["g1".to_string()],
    ///     image: "https://covers.example/dune.jpg".to_string(),
    ///     description: String::new(),
    ///     published: NaiveDate::from_ymd_opt(1965, 8, 1).unwrap(),
    /// };
    /// assert_eq!(book.published_year(), 1965);
    /// ```
    #[must_use]
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }

    /// Returns `true` if the book is tagged with the given genre.
    #[must_use]
    pub fn has_genre(&self, genre_id: &str) -> bool {
        self.genre_ids.iter().any(|g| g == genre_id)
    }
}
