//! Per-line classification report
//!
//! Debugging aid for the notation: shows how every line of a document is read (fence state,
//! bullet depth, numbered start, content) without converting it.

use serde::Serialize;
use wit_babel::classify::{classify, BulletClassification, FenceTracker};
use wit_babel::source::split_lines;

/// How one source line was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport<'a> {
    pub line: usize,
    /// Opens or closes a fenced region.
    pub fence: bool,
    /// Inside a fenced region (fence lines included).
    pub verbatim: bool,
    #[serde(flatten)]
    pub classification: BulletClassification<'a>,
}

/// Classify every line of `source`, tracking fences the way conversion does.
pub fn classify_document(source: &str) -> Vec<LineReport<'_>> {
    let mut fence = FenceTracker::new();
    split_lines(source)
        .into_iter()
        .map(|line| {
            let was_disabled = fence.is_disabled();
            let boundary = fence.observe(line.text);
            let verbatim = boundary || was_disabled;
            LineReport {
                line: line.number,
                fence: boundary,
                verbatim,
                classification: classify(line.text, verbatim),
            }
        })
        .collect()
}

/// Pretty JSON form of [`classify_document`].
pub fn to_json(source: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&classify_document(source))
}
