//! Catalog source abstraction.
//!
//! The [`CatalogSource`] trait is the seam between the browser and whatever
//! supplies the dataset. The browser only ever needs one operation: produce
//! the full immutable catalog once, before the controller starts.

use crate::domain::error::Result;
use crate::domain::Catalog;

/// Something that can produce a [`Catalog`].
///
/// # Implementations
///
/// - [`JsonCatalog`](crate::dataset::JsonCatalog): a JSON dataset file on disk
/// - [`EmbeddedCatalog`](crate::dataset::EmbeddedCatalog): the sample dataset
///   compiled into the binary
///
/// # Examples
///
/// ```
/// use book_browser::dataset::{CatalogSource, EmbeddedCatalog};
///
/// let catalog = EmbeddedCatalog.load()?;
/// assert!(!catalog.is_empty());
/// # Ok::<(), book_browser::BrowserError>(())
/// ```
pub trait CatalogSource {
    /// Loads and validates the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be read, parsed or validated.
    fn load(&self) -> Result<Catalog>;

    /// Short human-readable description used in logs.
    fn describe(&self) -> String;
}
