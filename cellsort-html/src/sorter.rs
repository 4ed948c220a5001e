//! Configured column sorting over extracted cell text.

use std::cmp::Ordering;

use cellsort_common::{SorterOptions, TextOrdering};

use crate::compare::{cmp_with_ordering, compare_text, ordering_to_sign};
use crate::extract::TextExtractable;

/// Column comparator configured with [`SorterOptions`].
///
/// The sorter holds no mutable state and can be shared freely between
/// threads.
#[derive(Debug, Clone, Default)]
pub struct HtmlSorter {
    options: SorterOptions,
}

impl HtmlSorter {
    pub fn new(options: SorterOptions) -> Self {
        tracing::debug!(
            ordering = ?options.ordering,
            trim = options.trim,
            "html sorter configured"
        );
        Self { options }
    }

    pub fn options(&self) -> &SorterOptions {
        &self.options
    }

    /// Three-way result: `-1`, `0` or `1`.
    pub fn compare<A, B>(&self, a: &A, b: &B) -> i32
    where
        A: TextExtractable + ?Sized,
        B: TextExtractable + ?Sized,
    {
        ordering_to_sign(self.ordering(a, b))
    }

    pub fn ordering<A, B>(&self, a: &A, b: &B) -> Ordering
    where
        A: TextExtractable + ?Sized,
        B: TextExtractable + ?Sized,
    {
        compare_text(&a.text_content(), &b.text_content(), &self.options)
    }

    /// The precomputed key this sorter compares `cell` by.
    pub fn sort_key<C: TextExtractable + ?Sized>(&self, cell: &C) -> SortKey {
        let text = cell.text_content();
        let text = if self.options.trim {
            text.trim().to_owned()
        } else {
            text.into_owned()
        };
        SortKey {
            text,
            ordering: self.options.ordering,
        }
    }

    /// Stable ascending sort of a column; each cell is extracted once.
    pub fn sort<C: TextExtractable>(&self, cells: &mut [C]) {
        cells.sort_by_cached_key(|cell| self.sort_key(cell));
    }

    /// Stable ascending sort of rows by the cell `column` selects.
    pub fn sort_rows_by<R, C, F>(&self, rows: &mut [R], column: F)
    where
        C: TextExtractable + ?Sized,
        F: Fn(&R) -> &C,
    {
        rows.sort_by_cached_key(|row| self.sort_key(column(row)));
    }
}

/// Extracted, normalised cell text that orders the way its sorter does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    text: String,
    ordering: TextOrdering,
}

impl SortKey {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_with_ordering(&self.text, &other.text, self.ordering)
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
