//! Whole-document conversion driver
//!
//! Two passes over an in-memory document:
//!
//!     1. transcode: every line goes through the fence tracker and the classifier, bullets
//!        drive the nesting machine, the formatter turns its decisions into records
//!     2. resolve: cross-references are rewritten once every identifier is known
//!
//! Run boundaries are decided here. A run ends on a fence boundary, on a text line that is not
//! a continuation, on the second of two consecutive blank lines, or at the end of the document.
//! A single blank line inside a run is held back and dropped if the run goes on.
//!
//! A [`Transcoder`] holds all mutable state of one conversion and is consumed by it, so nothing
//! leaks from one document into the next.

use crate::classify::{classify, BulletClassification, FenceTracker};
use crate::error::ConvertError;
use crate::formats::{formatter_for, Formatter, OutputMode};
use crate::ids::{parse_item_text, ItemIdRegistry};
use crate::nesting::{continuation_of, NestingMachine};
use crate::output::{assemble, Origin, OutputBuffer, OutputRecord};
use crate::references;
use crate::source::{split_lines, SourceLine};
use tracing::{debug, trace};

/// Options selected once per document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub mode: OutputMode,
    /// Start with every item collapsed (structured mode only).
    pub collapsed: bool,
}

impl ConvertOptions {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            collapsed: false,
        }
    }

    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }
}

/// Convert a whole document.
pub fn convert(source: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
    let records = Transcoder::new(*options).transcode(source)?;
    Ok(assemble(&records))
}

/// Single-use conversion state.
pub struct Transcoder {
    fence: FenceTracker,
    machine: NestingMachine,
    ids: ItemIdRegistry,
    formatter: Box<dyn Formatter>,
    out: OutputBuffer,
    pending_blank: Option<(usize, String)>,
}

impl Transcoder {
    pub fn new(options: ConvertOptions) -> Self {
        Self::with_formatter(formatter_for(options.mode, options.collapsed))
    }

    pub fn with_formatter(formatter: Box<dyn Formatter>) -> Self {
        Self {
            fence: FenceTracker::new(),
            machine: NestingMachine::new(),
            ids: ItemIdRegistry::new(),
            formatter,
            out: OutputBuffer::new(),
            pending_blank: None,
        }
    }

    /// Run both passes and return the final records.
    pub fn transcode(mut self, source: &str) -> Result<Vec<OutputRecord>, ConvertError> {
        let lines = split_lines(source);
        for line in &lines {
            self.feed(line)?;
        }
        self.close_run();
        self.formatter.finish(&mut self.out);

        let mut records = self.out.into_records();
        references::resolve(&mut records, &self.ids, self.formatter.as_ref())?;
        debug!(
            lines = lines.len(),
            records = records.len(),
            identifiers = self.ids.len(),
            trees = self.machine.tree(),
            "document transcoded"
        );
        Ok(records)
    }

    fn feed(&mut self, line: &SourceLine<'_>) -> Result<(), ConvertError> {
        trace!(line = line.number, text = line.text, "feed");

        if FenceTracker::is_boundary(line.text) {
            self.close_run();
            self.fence.observe(line.text);
            self.out
                .push(OutputRecord::new(Origin::Line(line.number), line.text).verbatim());
            return Ok(());
        }

        if self.fence.is_disabled() {
            self.out
                .push(OutputRecord::new(Origin::Line(line.number), line.text).verbatim());
            return Ok(());
        }

        if line.is_blank() {
            self.blank(line);
            return Ok(());
        }

        let class = classify(line.text, self.fence.is_disabled());
        if class.is_new_bullet {
            return self.bullet(&class, line.number);
        }

        if let Some(continuation) = continuation_of(&self.machine, &class) {
            self.pending_blank = None;
            self.formatter
                .continuation(&continuation, line.number, &mut self.out);
            return Ok(());
        }

        self.close_run();
        self.out
            .push(OutputRecord::new(Origin::Line(line.number), line.text));
        Ok(())
    }

    fn bullet(
        &mut self,
        class: &BulletClassification<'_>,
        line: usize,
    ) -> Result<(), ConvertError> {
        if self.machine.starts_new_tree(class) {
            self.close_run();
        } else {
            self.pending_blank = None;
        }

        let item = parse_item_text(class.content, line)?;
        let step = self.machine.advance(class);
        if let Some(id) = item.id {
            self.ids.register(id, &step.numbering, line)?;
        }
        self.formatter.item(&step, &item, line, &mut self.out);
        Ok(())
    }

    fn blank(&mut self, line: &SourceLine<'_>) {
        if !self.machine.is_active() {
            self.out
                .push(OutputRecord::new(Origin::Line(line.number), line.text));
            return;
        }

        if self.pending_blank.is_none() {
            self.pending_blank = Some((line.number, line.text.to_string()));
            return;
        }

        // second consecutive blank: the run is over
        self.close_run();
        self.out
            .push(OutputRecord::new(Origin::Line(line.number), line.text));
    }

    /// Close the active run, if any, then flush a held-back blank line.
    fn close_run(&mut self) {
        if let Some(close) = self.machine.close() {
            self.formatter.close_run(&close, &mut self.out);
        }
        if let Some((number, text)) = self.pending_blank.take() {
            self.out.push(OutputRecord::new(Origin::Line(number), text));
        }
    }
}
