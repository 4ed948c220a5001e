mod common;

use cellsort_html::{HtmlCell, HtmlSorter, SorterOptions, TextOrdering, html_sorter};

/// Cells covering markup, entities, white space, case, empties and non-BMP text.
const CORPUS: &[&str] = &[
    "",
    "<span></span>",
    "<b>Apple</b>",
    "<i>Apple</i>",
    "  Apple  ",
    "<i>Banana</i>",
    "Zebra",
    "apple",
    "<a href=\"/x\">a&amp;b</a>",
    "a&b",
    "<td>Sample 10</td>",
    "<td>Sample 2</td>",
    "<p>\u{FF61}</p>",
    "\u{1F600}",
    "<!-- only a comment -->",
    "<b>unclosed <i>tags",
];

fn sorters() -> Vec<HtmlSorter> {
    let mut out = Vec::new();
    for ordering in [TextOrdering::CodePoint, TextOrdering::Utf16] {
        for trim in [true, false] {
            out.push(HtmlSorter::new(SorterOptions { ordering, trim }));
        }
    }
    out
}

#[test]
fn comparator_is_total() {
    common::init_test_tracing();
    for sorter in sorters() {
        for a in CORPUS {
            for b in CORPUS {
                let r = sorter.compare(*a, *b);
                assert!(matches!(r, -1..=1), "{a:?} vs {b:?} gave {r}");
            }
        }
    }
}

#[test]
fn comparator_is_reflexive() {
    for sorter in sorters() {
        for a in CORPUS {
            assert_eq!(sorter.compare(*a, *a), 0, "{a:?}");
        }
    }
}

#[test]
fn comparator_is_antisymmetric() {
    for sorter in sorters() {
        for a in CORPUS {
            for b in CORPUS {
                assert_eq!(
                    sorter.compare(*a, *b),
                    -sorter.compare(*b, *a),
                    "{a:?} vs {b:?}"
                );
            }
        }
    }
}

#[test]
fn comparator_is_transitive() {
    for sorter in sorters() {
        for a in CORPUS {
            for b in CORPUS {
                for c in CORPUS {
                    if sorter.compare(*a, *b) <= 0 && sorter.compare(*b, *c) <= 0 {
                        assert!(
                            sorter.compare(*a, *c) <= 0,
                            "{a:?} <= {b:?} <= {c:?} but not {a:?} <= {c:?}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn nested_markup_is_ignored() {
    assert_eq!(html_sorter("<b>Apple</b>", "<i>Banana</i>"), -1);
    assert_eq!(html_sorter("<i>Banana</i>", "<b>Apple</b>"), 1);
}

#[test]
fn different_markup_same_text_is_equal() {
    assert_eq!(html_sorter("<b>Same</b>", "<i>Same</i>"), 0);
    assert_eq!(html_sorter("a&amp;b", "<em>a&b</em>"), 0);
}

#[test]
fn empty_cells_sort_first() {
    common::init_test_tracing();
    let empty = HtmlCell::parse("<span></span>");
    let missing: Option<HtmlCell> = None;

    for other in CORPUS {
        assert!(html_sorter(&empty, *other) <= 0, "{other:?}");
        assert!(html_sorter(&missing, *other) <= 0, "{other:?}");
    }
    assert_eq!(html_sorter(&empty, &missing), 0);
    assert_eq!(html_sorter(&empty, ""), 0);
}

#[test]
fn uppercase_precedes_lowercase() {
    assert_eq!(html_sorter("Zebra", "apple"), -1);
    assert_eq!(html_sorter("<b>apple</b>", "<b>Zebra</b>"), 1);
}

#[test]
fn cells_and_markup_mix() {
    let cell = HtmlCell::parse("<b>Apple</b>");
    assert_eq!(html_sorter(&cell, "<i>Apple</i>"), 0);
    assert_eq!(html_sorter("Banana", &cell), 1);
    assert_eq!(html_sorter(&Some(cell), &Some("Apricot")), -1);
}
