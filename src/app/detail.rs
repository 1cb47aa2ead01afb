//! Detail view controller: resolves a clicked identifier to a full record.
//!
//! An identifier that is not in the catalog (a stale reference, a typo) is not
//! an error; it simply resolves to nothing and no detail opens.

use crate::domain::{Book, Catalog};
use crate::ui::viewmodel::DetailView;

/// Looks up a book by identifier.
#[must_use]
pub fn resolve<'a>(catalog: &'a Catalog, id: &str) -> Option<&'a Book> {
    let book = catalog.get(id);
    if book.is_none() {
        tracing::debug!(book_id = %id, "detail lookup missed");
    }
    book
}

/// Projects a book into the detail overlay content.
///
/// The subtitle year always comes from the book's own publication date.
#[must_use]
pub fn compose(book: &Book, catalog: &Catalog) -> DetailView {
    DetailView {
        id: book.id.clone(),
        backdrop: book.image.clone(),
        image: book.image.clone(),
        title: book.title.clone(),
        subtitle: format!(
            "{} ({})",
            catalog.author_name(&book.author_id),
            book.published_year()
        ),
        description: book.description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::tests::book;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn catalog() -> Catalog {
        let mut emma = book("b2", "Emma", "a2", &["g1"]);
        emma.published = NaiveDate::from_ymd_opt(1815, 12, 23).unwrap();

        Catalog::new(
            vec![book("b1", "Dune", "a1", &["g1"]), emma],
            BTreeMap::from([("a2".to_string(), "Jane Austen".to_string())]),
            BTreeMap::new(),
        )
        .unwrap()
    }

    #[test]
    fn subtitle_uses_published_year() {
        let catalog = catalog();
        let emma = resolve(&catalog, "b2").unwrap();
        let detail = compose(emma, &catalog);

        assert_eq!(detail.title, "Emma");
        assert_eq!(detail.subtitle, "Jane Austen (1815)");
        assert_eq!(detail.backdrop, detail.image);
        assert_eq!(detail.description, "About Emma.");
    }

    #[test]
    fn unknown_author_in_subtitle() {
        let catalog = catalog();
        let dune = resolve(&catalog, "b1").unwrap();
        assert_eq!(compose(dune, &catalog).subtitle, "Unknown Author (1965)");
    }

    #[test]
    fn missing_id_resolves_to_none() {
        assert!(resolve(&catalog(), "stale").is_none());
    }
}
