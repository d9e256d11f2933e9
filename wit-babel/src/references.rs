//! Cross-reference resolution
//!
//! Runs over the assembled records after the whole document has been transcoded, so a
//! reference may point at an item defined further down. Every `@{id}` token is replaced with
//! the formatter's rendering of the item's section number. Records copied from fenced regions
//! are left alone.

use crate::error::ConvertError;
use crate::formats::Formatter;
use crate::ids::ItemIdRegistry;
use crate::output::OutputRecord;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `@{identifier}` cross-reference token.
pub static REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@\{([A-Za-z0-9_-]+)\}").expect("reference pattern is valid"));

/// Resolve every reference token in `records`.
pub fn resolve(
    records: &mut [OutputRecord],
    registry: &ItemIdRegistry,
    formatter: &dyn Formatter,
) -> Result<(), ConvertError> {
    for record in records.iter_mut().filter(|record| !record.verbatim) {
        if !REFERENCE.is_match(&record.text) {
            continue;
        }
        let line = record.origin.line();
        record.text = resolve_text(&record.text, line, registry, formatter)?;
    }
    Ok(())
}

fn resolve_text(
    text: &str,
    line: Option<usize>,
    registry: &ItemIdRegistry,
    formatter: &dyn Formatter,
) -> Result<String, ConvertError> {
    let mut missing: Option<String> = None;
    let resolved = REFERENCE.replace_all(text, |captures: &Captures<'_>| {
        let id = &captures[1];
        match registry.section(id) {
            Some(section) => formatter.reference(id, section),
            None => {
                missing.get_or_insert_with(|| id.to_string());
                captures[0].to_string()
            }
        }
    });

    match missing {
        Some(id) => Err(ConvertError::UndefinedReference { id, line }),
        None => Ok(resolved.into_owned()),
    }
}
