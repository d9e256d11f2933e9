//! Source lines of an outline document

/// One raw input line together with its 1-based position in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

impl<'a> SourceLine<'a> {
    pub fn new(number: usize, text: &'a str) -> Self {
        Self { number, text }
    }

    /// True when the line holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Split a document into numbered lines.
///
/// Line terminators (`\n` and `\r\n`) are dropped; a trailing terminator does not produce an
/// extra empty line.
pub fn split_lines(source: &str) -> Vec<SourceLine<'_>> {
    source
        .lines()
        .enumerate()
        .map(|(idx, text)| SourceLine::new(idx + 1, text))
        .collect()
}
