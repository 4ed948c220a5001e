//! Three-way comparison of extracted cell text.

use std::borrow::Cow;
use std::cmp::Ordering;

use cellsort_common::{SorterOptions, TextOrdering};

use crate::extract::TextExtractable;

/// Compare two HTML-bearing cells by their text, with default options.
///
/// Returns `-1`, `0` or `1`, the contract table widgets expect from a
/// column sorter.
///
/// ```
/// use cellsort_html::html_sorter;
///
/// assert_eq!(html_sorter("<b>Apple</b>", "<i>Banana</i>"), -1);
/// assert_eq!(html_sorter("<b>Same</b>", "<i>Same</i>"), 0);
/// assert_eq!(html_sorter("apple", "Zebra"), 1);
/// ```
pub fn html_sorter<A, B>(a: &A, b: &B) -> i32
where
    A: TextExtractable + ?Sized,
    B: TextExtractable + ?Sized,
{
    let options = SorterOptions::default();
    ordering_to_sign(compare_text(&a.text_content(), &b.text_content(), &options))
}

/// Compare two already extracted strings.
pub fn compare_text(a: &str, b: &str, options: &SorterOptions) -> Ordering {
    let (a, b) = if options.trim {
        (a.trim(), b.trim())
    } else {
        (a, b)
    };
    cmp_with_ordering(a, b, options.ordering)
}

/// Compare two values through an explicit text extractor.
///
/// Useful when the cell type does not implement [`TextExtractable`], e.g.
/// rows that keep markup in one of several fields.
pub fn compare_with<T, F>(a: &T, b: &T, extract: F, options: &SorterOptions) -> Ordering
where
    T: ?Sized,
    F: Fn(&T) -> Cow<'_, str>,
{
    compare_text(&extract(a), &extract(b), options)
}

/// Map an [`Ordering`] onto `-1`/`0`/`1`.
pub fn ordering_to_sign(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

pub(crate) fn cmp_with_ordering(a: &str, b: &str, ordering: TextOrdering) -> Ordering {
    match ordering {
        TextOrdering::CodePoint => a.cmp(b),
        TextOrdering::Utf16 => a.encode_utf16().cmp(b.encode_utf16()),
    }
}
