//! Error types for conversion operations
//!
//! Every condition is fatal for the document being converted. Variants carry the 1-based
//! source line they originate from so the CLI can report them without further context.

use thiserror::Error;

/// Errors that can occur while converting a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Invalid or missing invocation arguments
    #[error("invalid arguments: {0}")]
    Argument(String),

    /// The input file is not of a supported type
    #[error("unsupported input file '{path}' (expected extension: {expected})")]
    InputFormat { path: String, expected: String },

    /// An item identifier was registered twice
    #[error("line {line}: identifier '{id}' is already defined on line {first_line}")]
    DuplicateIdentifier {
        id: String,
        line: usize,
        first_line: usize,
    },

    /// An identifier marker is unterminated or contains disallowed characters
    #[error("line {line}: malformed identifier marker '{marker}'")]
    MalformedIdentifier { marker: String, line: usize },

    /// A cross-reference names an identifier that was never registered
    #[error("{}: reference to undefined identifier '{id}'", at(.line))]
    UndefinedReference { id: String, line: Option<usize> },

    /// Any other failure surfacing while resolving references
    #[error("{}: unexpected processing failure: {message}", at(.line))]
    Unexpected {
        message: String,
        line: Option<usize>,
    },
}

impl ConvertError {
    /// The 1-based source line the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ConvertError::DuplicateIdentifier { line, .. }
            | ConvertError::MalformedIdentifier { line, .. } => Some(*line),
            ConvertError::UndefinedReference { line, .. }
            | ConvertError::Unexpected { line, .. } => *line,
            ConvertError::Argument(_) | ConvertError::InputFormat { .. } => None,
        }
    }
}

fn at(line: &Option<usize>) -> String {
    match line {
        Some(line) => format!("line {line}"),
        None => "no source line".to_string(),
    }
}
