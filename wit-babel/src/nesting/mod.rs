//! Nesting state machine
//!
//! Consumes bullet classifications one at a time and decides, for each bullet, which nesting
//! levels close (end branch), which open (new branch), and which number the item gets. It owns
//! the per-run state: the stack of open levels, the depth counters, the tree index and the
//! sticky numbered flag. Rendering the decisions is the formatter's job.
//!
//! Invariants:
//!
//!     - `levels.len()` equals the previous bullet's depth while a run is active, 0 otherwise
//!     - the counters hold exactly the keys `1..=levels.len()`
//!     - levels closed by an end branch are purged from the counters before the current depth
//!       is registered

mod continuation;

pub use continuation::{continuation_of, Continuation};

use crate::classify::BulletClassification;
use crate::counters::{DepthCounters, Numbering};
use tracing::debug;

/// Kind of an open list level, fixed when the level is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    fn for_line(is_numbered_start: bool) -> Self {
        if is_numbered_start {
            ListKind::Ordered
        } else {
            ListKind::Unordered
        }
    }
}

/// Everything the formatter needs to render one bullet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStep {
    pub tree: usize,
    pub depth: usize,
    pub previous_depth: usize,
    pub numbering: Numbering,
    /// Kind of the list holding the item.
    pub kind: ListKind,
    /// Levels closed before the item, innermost first.
    pub closed: Vec<ListKind>,
    /// Levels opened for the item, outermost first (depths `previous_depth + 1..=depth`).
    pub opened: Vec<ListKind>,
}

impl ItemStep {
    /// True when this bullet starts a new tree.
    pub fn starts_run(&self) -> bool {
        self.previous_depth == 0
    }

    pub fn is_new_branch(&self) -> bool {
        self.depth > self.previous_depth && self.depth > 1
    }

    pub fn is_end_branch(&self) -> bool {
        !self.closed.is_empty()
    }
}

/// Levels still open when a run ends, innermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunClose {
    pub tree: usize,
    pub closed: Vec<ListKind>,
    pub numbered: bool,
}

/// Depth, counter and branch bookkeeping for one document.
#[derive(Debug, Clone, Default)]
pub struct NestingMachine {
    levels: Vec<ListKind>,
    counters: DepthCounters,
    tree: usize,
    numbered: bool,
}

impl NestingMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !self.levels.is_empty()
    }

    /// Depth of the previous bullet in the active run, 0 when no run is active.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Index of the most recently started tree.
    pub fn tree(&self) -> usize {
        self.tree
    }

    pub fn is_numbered(&self) -> bool {
        self.numbered
    }

    /// A numbered start at depth 1 cannot join an unordered root: it begins a fresh tree.
    pub fn starts_new_tree(&self, line: &BulletClassification<'_>) -> bool {
        line.is_new_bullet
            && line.is_numbered_start
            && line.depth == 1
            && self.levels.first() == Some(&ListKind::Unordered)
    }

    /// Advance over a bullet line.
    pub fn advance(&mut self, line: &BulletClassification<'_>) -> ItemStep {
        debug_assert!(line.is_new_bullet && line.depth >= 1);
        let depth = line.depth;
        let previous_depth = self.levels.len();

        if previous_depth == 0 {
            self.tree += 1;
            self.numbered = false;
            debug!(tree = self.tree, depth, "tree started");
        }
        if line.is_numbered_start {
            self.numbered = true;
        }

        let purged = self.counters.purge_above(depth);
        let closed: Vec<ListKind> = if depth < previous_depth {
            self.levels.drain(depth..).rev().collect()
        } else {
            Vec::new()
        };
        debug_assert_eq!(purged, closed.len());
        self.counters.register(depth);

        let kind = ListKind::for_line(line.is_numbered_start);
        let opened = vec![kind; depth.saturating_sub(previous_depth)];
        self.levels.extend_from_slice(&opened);

        ItemStep {
            tree: self.tree,
            depth,
            previous_depth,
            numbering: self.counters.numbering(depth),
            kind: self.levels[depth - 1],
            closed,
            opened,
        }
    }

    /// End the active run, returning the levels left open.
    pub fn close(&mut self) -> Option<RunClose> {
        if !self.is_active() {
            return None;
        }
        let closed = self.levels.drain(..).rev().collect();
        let numbered = std::mem::take(&mut self.numbered);
        self.counters.clear();
        debug!(tree = self.tree, numbered, "tree closed");
        Some(RunClose {
            tree: self.tree,
            closed,
            numbered,
        })
    }
}
