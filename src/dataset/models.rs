//! Raw dataset record types.
//!
//! These mirror the on-disk JSON layout and are kept separate from the domain
//! [`Book`] so the file format can use its own field names (`author`,
//! `genres`) and a loosely formatted `published` string.

use crate::domain::error::{BrowserError, Result};
use crate::domain::Book;
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Top-level dataset document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetFile {
    /// Page size suggested by the dataset author.
    #[serde(default)]
    pub books_per_page: Option<usize>,

    /// Author id → display name.
    #[serde(default)]
    pub authors: BTreeMap<String, String>,

    /// Genre id → display name.
    #[serde(default)]
    pub genres: BTreeMap<String, String>,

    /// Books in presentation order.
    #[serde(default)]
    pub books: Vec<BookRecord>,
}

/// A book as stored in the dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookRecord {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    /// RFC 3339 timestamp (`1965-08-01T00:00:00.000Z`) or plain `YYYY-MM-DD`.
    pub published: String,
}

impl BookRecord {
    /// Converts the record into a domain [`Book`].
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Dataset`] if `published` is neither an RFC 3339
    /// timestamp nor a `YYYY-MM-DD` date.
    pub fn into_book(self) -> Result<Book> {
        let published = parse_published(&self.published).ok_or_else(|| {
            BrowserError::Dataset(format!(
                "book {}: invalid published date {:?}",
                self.id, self.published
            ))
        })?;

        Ok(Book {
            id: self.id,
            title: self.title,
            author_id: self.author,
            genre_ids: self.genres,
            image: self.image,
            description: self.description,
            published,
        })
    }
}

fn parse_published(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn record(published: &str) -> BookRecord {
        BookRecord {
            id: "b1".to_string(),
            title: "Dune".to_string(),
            author: "a1".to_string(),
            genres: vec!["g1".to_string()],
            image: String::new(),
            description: String::new(),
            published: published.to_string(),
        }
    }

    #[test]
    fn accepts_rfc3339_timestamps() {
        let book = record("1965-08-01T00:00:00.000Z").into_book().unwrap();
        assert_eq!(book.published.year(), 1965);
        assert_eq!(book.author_id, "a1");
        assert_eq!(book.genre_ids, vec!["g1".to_string()]);
    }

    #[test]
    fn accepts_plain_dates() {
        let book = record("1813-01-28").into_book().unwrap();
        assert_eq!(book.published, NaiveDate::from_ymd_opt(1813, 1, 28).unwrap());
    }

    #[test]
    fn rejects_garbage_dates() {
        let err = record("last tuesday").into_book().unwrap_err();
        assert!(matches!(err, BrowserError::Dataset(msg) if msg.contains("b1")));
    }

    #[test]
    fn json_record_converts_to_domain_book() {
        let raw = r#"{ "id": "b9", "title": "Kindred", "author": "a9", "published": "1979-06-01" }"#;
        let book = serde_json::from_str::<BookRecord>(raw)
            .unwrap()
            .into_book()
            .unwrap();

        assert_eq!(book.title, "Kindred");
        assert_eq!(book.published_year(), 1979);
        assert!(book.genre_ids.is_empty());
        assert!(book.description.is_empty());
    }

    #[test]
    fn dataset_tables_default_to_empty() {
        let file: DatasetFile = serde_json::from_str(r#"{ "books": [] }"#).unwrap();
        assert!(file.authors.is_empty());
        assert!(file.genres.is_empty());
        assert_eq!(file.books_per_page, None);
    }
}
