//! Text extraction from HTML-bearing cells.
//!
//! Extraction follows DOM `textContent`: every descendant text node is
//! concatenated in document order, character references are decoded, and
//! tags, attributes and comments are dropped. Parsing uses the HTML5
//! algorithm via `scraper`, so malformed markup is recovered rather than
//! rejected.

use std::borrow::Cow;

use scraper::{ElementRef, Html};

/// Anything that can be rendered to plain text for comparison.
///
/// Implementations must be total: content that cannot be rendered yields an
/// empty string.
pub trait TextExtractable {
    /// The concatenated text content of this node.
    fn text_content(&self) -> Cow<'_, str>;
}

impl<T: TextExtractable + ?Sized> TextExtractable for &T {
    fn text_content(&self) -> Cow<'_, str> {
        (**self).text_content()
    }
}

impl<T: TextExtractable> TextExtractable for Option<T> {
    fn text_content(&self) -> Cow<'_, str> {
        match self {
            Some(inner) => inner.text_content(),
            None => {
                tracing::trace!("missing cell treated as empty text");
                Cow::Borrowed("")
            }
        }
    }
}

/// Raw markup; parsed as an HTML fragment on every call.
impl TextExtractable for str {
    fn text_content(&self) -> Cow<'_, str> {
        if is_plain_text(self) {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(fragment_text(self))
        }
    }
}

impl TextExtractable for String {
    fn text_content(&self) -> Cow<'_, str> {
        self.as_str().text_content()
    }
}

impl TextExtractable for ElementRef<'_> {
    fn text_content(&self) -> Cow<'_, str> {
        Cow::Owned(self.text().collect())
    }
}

/// A table cell whose markup has been parsed once up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlCell {
    markup: String,
    text: String,
}

impl HtmlCell {
    pub fn parse(markup: impl Into<String>) -> Self {
        let markup = markup.into();
        let text = markup.as_str().text_content().into_owned();
        Self::from_parts(markup, text)
    }

    fn from_parts(markup: String, text: String) -> Self {
        if text.is_empty() {
            tracing::trace!(markup = %markup, "cell has no text content");
        }
        Self { markup, text }
    }

    /// The markup this cell was built from.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// True when the cell renders to no text at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl TextExtractable for HtmlCell {
    fn text_content(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }
}

impl From<&str> for HtmlCell {
    fn from(markup: &str) -> Self {
        HtmlCell::parse(markup)
    }
}

impl From<String> for HtmlCell {
    fn from(markup: String) -> Self {
        HtmlCell::parse(markup)
    }
}

/// Split a `<table>` fragment into rows of `td`/`th` cells.
///
/// Only direct cells of each row are taken, so a nested table contributes
/// its own rows rather than being flattened into the outer cell. Rows with
/// no cells are dropped.
pub fn parse_table_cells(html: &str) -> Vec<Vec<HtmlCell>> {
    let doc = Html::parse_fragment(html);
    let rows: Vec<Vec<HtmlCell>> = doc
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "tr")
        .map(|tr| {
            tr.children()
                .filter_map(ElementRef::wrap)
                .filter(|cell| matches!(cell.value().name(), "td" | "th"))
                .map(|cell| HtmlCell::from_parts(cell.inner_html(), cell.text().collect()))
                .collect::<Vec<_>>()
        })
        .filter(|row| !row.is_empty())
        .collect();

    tracing::debug!(rows = rows.len(), "parsed table fragment");
    rows
}

fn fragment_text(markup: &str) -> String {
    Html::parse_fragment(markup).root_element().text().collect()
}

// The HTML tokenizer rewrites these (a leading BOM is dropped), so such
// input must go through the parser.
fn is_plain_text(s: &str) -> bool {
    !s.contains(['<', '&', '\r', '\0', '\u{FEFF}'])
}
