//! Output formats
//!
//! Two interchangeable renderings of the same nesting decisions, selected once per document:
//!
//! - `structured`: nested HTML lists with collapsible items, anchors and resolved links
//! - `plain`: indented text with literal numerals and bullet glyphs
//!
//! Both implement [`Formatter`]; the transcoder drives them and never builds markup itself.

pub mod html;
pub mod plain;

use crate::ids::ItemText;
use crate::nesting::{Continuation, ItemStep, RunClose};
use crate::output::OutputBuffer;
use serde::Deserialize;

/// Output mode of a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Structured,
    Plain,
}

impl OutputMode {
    /// `"structured"` selects structured mode; any other value selects plain mode.
    pub fn from_name(name: &str) -> Self {
        match name {
            "structured" => OutputMode::Structured,
            _ => OutputMode::Plain,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputMode::Structured => "structured",
            OutputMode::Plain => "plain",
        }
    }
}

/// Renders nesting decisions into output records.
pub trait Formatter {
    /// Render one bullet. `line` is its 1-based source line.
    fn item(&mut self, step: &ItemStep, item: &ItemText<'_>, line: usize, out: &mut OutputBuffer);

    /// Merge a continuation line into the open item.
    fn continuation(&mut self, continuation: &Continuation<'_>, line: usize, out: &mut OutputBuffer);

    /// Close every level still open at the end of a run.
    fn close_run(&mut self, close: &RunClose, out: &mut OutputBuffer);

    /// Add document-level assets once all lines are processed.
    fn finish(&mut self, out: &mut OutputBuffer);

    /// Text replacing a resolved cross-reference.
    fn reference(&self, id: &str, section: &str) -> String;
}

/// Build the formatter for `mode`.
pub fn formatter_for(mode: OutputMode, collapsed: bool) -> Box<dyn Formatter> {
    match mode {
        OutputMode::Structured => Box::new(html::HtmlFormatter::new(collapsed)),
        OutputMode::Plain => Box::new(plain::PlainFormatter::new()),
    }
}
