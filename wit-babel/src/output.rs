//! Output records
//!
//! The transcoder emits one record per output line, and formatters keep record text free of
//! newlines. The stylesheet and script are the exception: each is a single synthetic record
//! spanning several lines. Each record remembers where it came from
//! so errors found in the reference pass can point back at the source. An item's closing tag is
//! kept as a pending suffix on its last record instead of being baked into the text: opening a
//! nested branch or merging a continuation moves or drops the suffix rather than editing text
//! that was already emitted.

/// Where an output record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Produced while processing the given 1-based source line.
    Line(usize),
    /// Injected by the transcoder (closing tags, stylesheet, script).
    Synthetic,
}

impl Origin {
    pub fn line(&self) -> Option<usize> {
        match self {
            Origin::Line(line) => Some(*line),
            Origin::Synthetic => None,
        }
    }
}

/// One emitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub origin: Origin,
    pub text: String,
    /// Closing marker still owed by the item this record belongs to.
    pub pending_close: Option<&'static str>,
    /// Copied from a fenced region; no reference syntax applies.
    pub verbatim: bool,
}

impl OutputRecord {
    pub fn new(origin: Origin, text: impl Into<String>) -> Self {
        Self {
            origin,
            text: text.into(),
            pending_close: None,
            verbatim: false,
        }
    }

    pub fn with_pending_close(mut self, close: &'static str) -> Self {
        self.pending_close = Some(close);
        self
    }

    pub fn verbatim(mut self) -> Self {
        self.verbatim = true;
        self
    }

    /// Final text including any pending close.
    pub fn render(&self) -> String {
        match self.pending_close {
            Some(close) => format!("{}{close}", self.text),
            None => self.text.clone(),
        }
    }
}

/// Ordered collection of records with a handle on the currently open item.
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer {
    records: Vec<OutputRecord>,
    open_item: Option<usize>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: OutputRecord) {
        self.records.push(record);
    }

    /// Push the (last) record of an item; later branches and continuations refer to it.
    pub fn push_item(&mut self, record: OutputRecord) {
        self.open_item = Some(self.records.len());
        self.records.push(record);
    }

    /// Take the pending close off the open item's last record.
    pub fn retract_close(&mut self) -> Option<&'static str> {
        let index = self.open_item?;
        self.records
            .get_mut(index)
            .and_then(|record| record.pending_close.take())
    }

    /// Forget the open item; it was closed by the caller.
    pub fn end_item(&mut self) {
        self.open_item = None;
    }

    pub fn prepend(&mut self, record: OutputRecord) {
        self.records.insert(0, record);
        if let Some(index) = self.open_item.as_mut() {
            *index += 1;
        }
    }

    pub fn records(&self) -> &[OutputRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<OutputRecord> {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Join records into the final document, one line each.
pub fn assemble(records: &[OutputRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.render());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_close_is_rendered() {
        let record = OutputRecord::new(Origin::Line(1), "<li>a").with_pending_close("</li>");
        assert_eq!(record.render(), "<li>a</li>");
    }

    #[test]
    fn retract_moves_close_off_the_open_item() {
        let mut buffer = OutputBuffer::new();
        buffer.push_item(OutputRecord::new(Origin::Line(1), "<li>a").with_pending_close("</li>"));
        assert_eq!(buffer.retract_close(), Some("</li>"));
        assert_eq!(buffer.retract_close(), None);
        assert_eq!(buffer.records()[0].render(), "<li>a");
    }

    #[test]
    fn prepend_keeps_open_item_handle() {
        let mut buffer = OutputBuffer::new();
        buffer.push_item(OutputRecord::new(Origin::Line(1), "<li>a").with_pending_close("</li>"));
        buffer.prepend(OutputRecord::new(Origin::Synthetic, "<style></style>"));
        assert_eq!(buffer.retract_close(), Some("</li>"));
        assert_eq!(buffer.records()[1].text, "<li>a");
    }

    #[test]
    fn ended_item_cannot_be_retracted() {
        let mut buffer = OutputBuffer::new();
        buffer.push_item(OutputRecord::new(Origin::Line(1), "<li>a").with_pending_close("</li>"));
        buffer.end_item();
        assert_eq!(buffer.retract_close(), None);
    }

    #[test]
    fn assemble_terminates_every_line() {
        let records = vec![
            OutputRecord::new(Origin::Line(1), "a"),
            OutputRecord::new(Origin::Synthetic, ""),
        ];
        assert_eq!(assemble(&records), "a\n\n");
        assert_eq!(assemble(&[]), "");
    }
}
