//! Line classification
//!
//! Turns one raw line into the facts the nesting state machine needs: whether it starts a new
//! bullet, at which depth, whether it opens a numbered branch, and what follows the marker.
//!
//! Notation recap:
//!
//!     * item              depth 1
//!         * item          depth 2 (one indent unit)
//!     ** item             depth 2 (marker stars add depth too)
//!     1* item             depth 1, numbered start
//!
//! An indent unit is four columns; a tab counts as one full unit. Inside a fenced code region
//! nothing is a bullet.

use serde::Serialize;

/// Fence delimiter opening and closing a code region.
pub const FENCE: &str = "```";
/// Bullet glyph.
pub const BULLET: char = '*';
/// Digit that marks a numbered-branch start when it directly precedes the glyph.
pub const NUMBERED_PREFIX: char = '1';
/// Width of one indent unit, in columns.
pub const INDENT_WIDTH: usize = 4;

/// Per-line facts derived from one line and the current fence state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulletClassification<'a> {
    pub is_new_bullet: bool,
    /// Outline depth, `>= 1` for bullets and `0` otherwise.
    pub depth: usize,
    pub is_numbered_start: bool,
    /// Whole indent units of leading whitespace.
    pub indent: usize,
    /// Text after the marker for bullets, the trimmed line otherwise.
    pub content: &'a str,
}

/// Tracks whether we are inside a fenced code region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FenceTracker {
    disabled: bool,
}

impl FenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `line` opens or closes a fenced region.
    pub fn is_boundary(line: &str) -> bool {
        line.trim_start().starts_with(FENCE)
    }

    /// Feed a line; toggles the disabled flag on fence boundaries.
    ///
    /// Returns true when the line was a boundary.
    pub fn observe(&mut self, line: &str) -> bool {
        let boundary = Self::is_boundary(line);
        if boundary {
            self.disabled = !self.disabled;
        }
        boundary
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Leading whitespace width in columns and the byte offset where content starts.
fn leading_width(line: &str) -> (usize, usize) {
    let mut width = 0;
    for (offset, ch) in line.char_indices() {
        match ch {
            '\t' => width += INDENT_WIDTH,
            c if c.is_whitespace() => width += 1,
            _ => return (width, offset),
        }
    }
    (width, line.len())
}

/// Classify one line.
///
/// When `disabled` is set (inside a fence) the line is never a bullet and its depth is 0.
pub fn classify(line: &str, disabled: bool) -> BulletClassification<'_> {
    let (width, offset) = leading_width(line);
    let indent = width / INDENT_WIDTH;
    let trimmed = &line[offset..];

    let not_bullet = BulletClassification {
        is_new_bullet: false,
        depth: 0,
        is_numbered_start: false,
        indent,
        content: trimmed.trim_end(),
    };
    if disabled {
        return not_bullet;
    }

    let (is_numbered_start, marker) = match trimmed.strip_prefix(NUMBERED_PREFIX) {
        Some(rest) if rest.starts_with(BULLET) => (true, rest),
        _ if trimmed.starts_with(BULLET) => (false, trimmed),
        _ => return not_bullet,
    };

    let stars = marker.chars().take_while(|c| *c == BULLET).count();
    let content = &marker[stars..];

    BulletClassification {
        is_new_bullet: true,
        depth: indent + stars,
        is_numbered_start,
        indent,
        content: content.trim_end(),
    }
}
