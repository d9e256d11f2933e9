//! Structured output parsed back with an HTML5 parser
//!
//! String checks say what was written; these say what a browser builds from it.

use crate::common::{dom_items, numbering_segments, to_structured};

const OUTLINE: &str = "\
Preamble text.

1* Introduction
1** Scope
        spans two lines
1** Terms
        * an aside
1* Design
1*** Deep jump
* Closing remarks


* A second tree
    * with a child
";

#[test]
fn every_item_sits_at_its_numbering_depth() {
    let items = dom_items(&to_structured(OUTLINE));

    assert!(!items.is_empty());
    for item in &items {
        assert_eq!(
            item.list_depth,
            numbering_segments(&item.content),
            "item {} is nested wrongly",
            item.content
        );
    }
}

#[test]
fn items_appear_in_document_order() {
    let items = dom_items(&to_structured(OUTLINE));
    let contents: Vec<&str> = items.iter().map(|item| item.content.as_str()).collect();

    assert_eq!(
        contents,
        vec![
            "wit-1-1",
            "wit-1-1-1",
            "wit-1-1-2",
            "wit-1-1-2-1",
            "wit-1-2",
            "wit-1-2-1",
            "wit-1-2-1-1",
            "wit-1-3",
            "wit-2-1",
            "wit-2-1-1",
        ]
    );
}

#[test]
fn list_kind_is_fixed_by_the_line_that_opened_the_level() {
    let items = dom_items(&to_structured(OUTLINE));
    let parent = |content: &str| {
        items
            .iter()
            .find(|item| item.content == content)
            .map(|item| item.parent_list.clone())
            .unwrap()
    };

    assert_eq!(parent("wit-1-1"), "ol");
    // unnumbered child under a numbered branch stays unnumbered
    assert_eq!(parent("wit-1-1-2-1"), "ul");
    // joins the ordered root
    assert_eq!(parent("wit-1-3"), "ol");
    assert_eq!(parent("wit-2-1"), "ul");
}

#[test]
fn mixed_tree_is_well_formed_without_markup_repair() {
    let html = to_structured(OUTLINE);

    let opens = html.matches("<ol").count() + html.matches("<ul").count();
    let closes = html.matches("</ol>").count() + html.matches("</ul>").count();
    assert_eq!(opens, closes);
    assert_eq!(
        html.matches("<li ").count(),
        html.matches("</li>").count()
    );
}

#[test]
fn block_like_item_text_adds_no_lists() {
    let items = dom_items(&to_structured("1* 1986. A year\n1* - dash\n* 3) third\n"));

    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|item| item.list_depth == 1));
}
