//! Item identifiers and the document-wide identifier registry
//!
//! A bullet may name itself right after its marker:
//!
//!     *{intro} Some item
//!     1**{details} A numbered child
//!
//! The identifier maps to the item's dotted section number (`1.2`) so cross-references can
//! display it. Identifiers are unique per document.

use crate::counters::Numbering;
use crate::error::ConvertError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

/// Characters allowed in an identifier.
pub static ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("identifier pattern is valid"));

const MARKER_OPEN: char = '{';
const MARKER_CLOSE: char = '}';
const SEPARATOR: char = ' ';

/// Item content split into its optional identifier and the text to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemText<'a> {
    pub id: Option<&'a str>,
    pub text: &'a str,
}

/// Split the text after a bullet marker into identifier and item text.
///
/// Without a marker only the separator following the glyph is stripped.
pub fn parse_item_text(content: &str, line: usize) -> Result<ItemText<'_>, ConvertError> {
    let Some(marker) = content.strip_prefix(MARKER_OPEN) else {
        return Ok(ItemText {
            id: None,
            text: strip_separator(content),
        });
    };

    let Some(close) = marker.find(MARKER_CLOSE) else {
        return Err(ConvertError::MalformedIdentifier {
            marker: content.to_string(),
            line,
        });
    };

    let id = &marker[..close];
    if !ID_PATTERN.is_match(id) {
        return Err(ConvertError::MalformedIdentifier {
            marker: format!("{MARKER_OPEN}{id}{MARKER_CLOSE}"),
            line,
        });
    }

    Ok(ItemText {
        id: Some(id),
        text: strip_separator(&marker[close + MARKER_CLOSE.len_utf8()..]),
    })
}

fn strip_separator(text: &str) -> &str {
    text.strip_prefix(SEPARATOR).unwrap_or(text)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Registration {
    section: String,
    line: usize,
}

/// Identifier → dotted section number, unique per document.
#[derive(Debug, Clone, Default)]
pub struct ItemIdRegistry {
    entries: HashMap<String, Registration>,
}

impl ItemIdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` for the item numbered `numbering` on `line`.
    pub fn register(
        &mut self,
        id: &str,
        numbering: &Numbering,
        line: usize,
    ) -> Result<(), ConvertError> {
        if let Some(existing) = self.entries.get(id) {
            return Err(ConvertError::DuplicateIdentifier {
                id: id.to_string(),
                line,
                first_line: existing.line,
            });
        }

        let section = numbering.section();
        debug!(id, %section, line, "registered item identifier");
        self.entries
            .insert(id.to_string(), Registration { section, line });
        Ok(())
    }

    /// Dotted section number registered for `id`.
    pub fn section(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(|entry| entry.section.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
