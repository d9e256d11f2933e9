//! Continuation lines
//!
//! A non-bullet line indented exactly one level under the previous bullet's marker belongs to
//! that item:
//!
//!     * first line of the item
//!         second line of the same item
//!
//! Depth and counters are left untouched.

use super::NestingMachine;
use crate::classify::BulletClassification;

/// Text merged into the preceding item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Continuation<'a> {
    pub depth: usize,
    pub text: &'a str,
}

/// The continuation carried by `line`, if it is one.
pub fn continuation_of<'a>(
    machine: &NestingMachine,
    line: &BulletClassification<'a>,
) -> Option<Continuation<'a>> {
    let depth = machine.depth();
    let continues = machine.is_active()
        && !line.is_new_bullet
        && !line.content.is_empty()
        && line.indent == depth;

    continues.then_some(Continuation {
        depth,
        text: line.content,
    })
}
