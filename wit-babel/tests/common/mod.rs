//! Shared helpers for document level tests.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use wit_babel::{convert, ConvertError, ConvertOptions, OutputMode};

pub fn to_structured(source: &str) -> String {
    convert(source, &ConvertOptions::new(OutputMode::Structured)).unwrap()
}

pub fn to_plain(source: &str) -> String {
    convert(source, &ConvertOptions::new(OutputMode::Plain)).unwrap()
}

pub fn structured_error(source: &str) -> ConvertError {
    convert(source, &ConvertOptions::new(OutputMode::Structured)).unwrap_err()
}

/// A list item found in parsed output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomItem {
    /// Value of `data-wit-content`.
    pub content: String,
    /// Number of `ol`/`ul` ancestors.
    pub list_depth: usize,
    /// Tag of the closest list ancestor.
    pub parent_list: String,
}

/// Parse HTML output the way a browser would and collect every list item in document order.
pub fn dom_items(html: &str) -> Vec<DomItem> {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);
    let mut items = Vec::new();
    collect_items(&dom.document, &mut Vec::new(), &mut items);
    items
}

fn collect_items(handle: &Handle, lists: &mut Vec<String>, items: &mut Vec<DomItem>) {
    let mut pushed = false;
    if let NodeData::Element { name, attrs, .. } = &handle.data {
        let tag = name.local.as_ref().to_string();
        if tag == "ol" || tag == "ul" {
            lists.push(tag);
            pushed = true;
        } else if tag == "li" {
            let content = attrs
                .borrow()
                .iter()
                .find(|attr| attr.name.local.as_ref() == "data-wit-content")
                .map(|attr| attr.value.to_string())
                .unwrap_or_default();
            items.push(DomItem {
                content,
                list_depth: lists.len(),
                parent_list: lists.last().cloned().unwrap_or_default(),
            });
        }
    }

    for child in handle.children.borrow().iter() {
        collect_items(child, lists, items);
    }

    if pushed {
        lists.pop();
    }
}

/// Number of segments in a content identifier such as `wit-1-2-1` (tree index excluded).
pub fn numbering_segments(content: &str) -> usize {
    content.split('-').count().saturating_sub(2)
}
