//! Plain-text output
//!
//! No structural markup: items become indented lines with a literal dotted numeral (ordered
//! levels) or the bullet glyph (unordered levels). Indentation is one four-space unit per level
//! below the first, so unnumbered output reads back as the same outline.

use crate::classify::{BULLET, INDENT_WIDTH};
use crate::formats::Formatter;
use crate::ids::ItemText;
use crate::nesting::{Continuation, ItemStep, ListKind, RunClose};
use crate::output::{Origin, OutputBuffer, OutputRecord};

fn indent(units: usize) -> String {
    " ".repeat(units * INDENT_WIDTH)
}

/// Formatter producing indented text.
#[derive(Debug, Clone, Default)]
pub struct PlainFormatter;

impl PlainFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for PlainFormatter {
    fn item(&mut self, step: &ItemStep, item: &ItemText<'_>, line: usize, out: &mut OutputBuffer) {
        let marker = match step.kind {
            ListKind::Ordered => step.numbering.to_string(),
            ListKind::Unordered => BULLET.to_string(),
        };
        let prefix = indent(step.depth - 1);
        let text = if item.text.is_empty() {
            format!("{prefix}{marker}")
        } else {
            format!("{prefix}{marker} {}", item.text)
        };
        out.push_item(OutputRecord::new(Origin::Line(line), text));
    }

    fn continuation(&mut self, continuation: &Continuation<'_>, line: usize, out: &mut OutputBuffer) {
        let text = format!("{}{}", indent(continuation.depth), continuation.text);
        out.push_item(OutputRecord::new(Origin::Line(line), text));
    }

    fn close_run(&mut self, _close: &RunClose, out: &mut OutputBuffer) {
        out.end_item();
    }

    fn finish(&mut self, _out: &mut OutputBuffer) {}

    fn reference(&self, _id: &str, section: &str) -> String {
        format!("§{section}")
    }
}
