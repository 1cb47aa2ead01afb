//! Preview list component renderer.
//!
//! Each preview entry is one numbered row: the 1-based position in the list
//! (what `open <n>` refers to), the title, and the author in dimmed text.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::{self, ThemeTokens};
use crate::ui::viewmodel::PreviewItem;
use std::io::{self, Write};

/// Width of the row-number column, separator included.
const NUMBER_WIDTH: usize = 6;

/// Renders up to `capacity` entries starting at `items[first]`.
///
/// Returns the next free row.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_list<W: Write + ?Sized>(
    out: &mut W,
    row: usize,
    items: &[PreviewItem],
    first: usize,
    capacity: usize,
    tokens: &ThemeTokens,
    cols: usize,
) -> io::Result<usize> {
    let mut current_row = row;
    for (index, item) in items.iter().enumerate().skip(first).take(capacity) {
        current_row = render_list_row(out, current_row, index + 1, item, tokens, cols)?;
    }
    Ok(current_row)
}

/// Renders one entry.
///
/// # Layout
///
/// ```text
/// [ nn. ] TITLE (60% of the rest) [padding] author [padding]
/// ```
fn render_list_row<W: Write + ?Sized>(
    out: &mut W,
    row: usize,
    number: usize,
    item: &PreviewItem,
    tokens: &ThemeTokens,
    cols: usize,
) -> io::Result<usize> {
    let number = truncate(&format!("{number:>4}. "), cols);
    let number_len = number.chars().count();

    let rest = cols.saturating_sub(number_len.max(NUMBER_WIDTH));
    let title_width = rest * 3 / 5;
    let author_width = rest - title_width;

    let title = truncate(&item.title, title_width.saturating_sub(1));
    let author = truncate(&item.author, author_width);
    let title_padding = title_width - title.chars().count();
    let author_padding = author_width - author.chars().count();

    position_cursor(out, row, 1)?;
    write!(
        out,
        "{}{}{number}{}{}{title}{}{}{author}{}{}",
        tokens.dim().fg(),
        tokens.background().bg(),
        " ".repeat(NUMBER_WIDTH.saturating_sub(number_len).min(cols - number_len)),
        tokens.text().fg(),
        " ".repeat(title_padding),
        tokens.dim().fg(),
        " ".repeat(author_padding),
        theme::reset()
    )?;

    Ok(row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::tests::{plain, tokens};

    fn item(id: &str, title: &str, author: &str) -> PreviewItem {
        PreviewItem {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            image: format!("https://covers.example/{id}.jpg"),
        }
    }

    #[test]
    fn numbers_rows_by_list_position() {
        let items = vec![
            item("b1", "Dune", "Frank Herbert"),
            item("b2", "Emma", "Jane Austen"),
            item("b3", "Solaris", "Stanisław Lem"),
        ];
        let mut out = Vec::new();

        let next = render_list(&mut out, 3, &items, 1, 5, &tokens(), 56).unwrap();

        assert_eq!(next, 5);
        let text = plain(&out);
        assert!(text.contains("   2. Emma"));
        assert!(text.contains("   3. Solaris"));
        assert!(text.contains("Stanisław Lem"));
        assert!(!text.contains("Dune"));
    }

    #[test]
    fn rows_fill_the_width() {
        let mut out = Vec::new();
        render_list(
            &mut out,
            1,
            &[item("b1", "A Very Long Title That Will Not Fit", "Someone Quite Verbose")],
            0,
            1,
            &tokens(),
            36,
        )
        .unwrap();

        assert_eq!(plain(&out).chars().count(), 36);
    }

    #[test]
    fn capacity_limits_rows() {
        let items: Vec<PreviewItem> = (1..=10)
            .map(|n| item(&format!("b{n}"), &format!("Book {n}"), "A"))
            .collect();
        let mut out = Vec::new();
        assert_eq!(render_list(&mut out, 1, &items, 0, 4, &tokens(), 40).unwrap(), 5);
    }
}
