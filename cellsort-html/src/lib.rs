//! Sorting table columns whose cells hold HTML.
//!
//! - [`TextExtractable`]: renders a cell (markup string, parsed [`HtmlCell`],
//!   `scraper` element, optional cell) to its text content
//! - [`html_sorter`]: drop-in `(a, b) -> -1 | 0 | 1` comparator
//! - [`HtmlSorter`]: the same comparison driven by [`SorterOptions`], plus
//!   stable column and row sorting
//!
//! Comparison is case sensitive and never fails; cells without text sort as
//! the empty string.
//!
//! ```
//! use cellsort_html::{HtmlCell, HtmlSorter, TextExtractable};
//!
//! let mut column = vec![
//!     HtmlCell::parse("<a href=\"/2\">Banana</a>"),
//!     HtmlCell::parse("<b>Apple</b>"),
//! ];
//! HtmlSorter::default().sort(&mut column);
//! assert_eq!(column[0].text_content(), "Apple");
//! ```

pub mod compare;
pub mod extract;
pub mod sorter;

pub use cellsort_common::{SorterOptions, TextOrdering};
pub use compare::{compare_text, compare_with, html_sorter, ordering_to_sign};
pub use extract::{HtmlCell, TextExtractable, parse_table_cells};
pub use sorter::{HtmlSorter, SortKey};
