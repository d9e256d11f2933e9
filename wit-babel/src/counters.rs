//! Per-depth running counts for hierarchical numbering
//!
//! The registry is sparse and keyed by depth. After every bullet its key set is exactly
//! `1..=depth`: deeper entries are purged before the current depth is touched, so returning to
//! a shallower level never sees stale state.

use std::collections::BTreeMap;
use std::fmt;

/// Running counts of one active tree, keyed by depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepthCounters {
    counts: BTreeMap<usize, usize>,
}

impl DepthCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every entry deeper than `depth`; returns how many were removed.
    pub fn purge_above(&mut self, depth: usize) -> usize {
        let purged = self.counts.split_off(&(depth + 1));
        purged.len()
    }

    /// Register a bullet at `depth`.
    ///
    /// Missing entries at `1..=depth` start at 1; an existing entry is only incremented at
    /// `depth` itself, shallower ones keep their value.
    pub fn register(&mut self, depth: usize) {
        for level in 1..=depth {
            self.counts
                .entry(level)
                .and_modify(|count| {
                    if level == depth {
                        *count += 1;
                    }
                })
                .or_insert(1);
        }
    }

    /// Numbering for the item at `depth`, most significant segment first.
    pub fn numbering(&self, depth: usize) -> Numbering {
        Numbering(
            (1..=depth)
                .map(|level| self.counts.get(&level).copied().unwrap_or(0))
                .collect(),
        )
    }

    pub fn depth(&self) -> usize {
        self.counts.keys().next_back().copied().unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Hierarchical section number such as `1.2.`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Numbering(Vec<usize>);

impl Numbering {
    pub fn segments(&self) -> &[usize] {
        &self.0
    }

    /// Numbering truncated to its first `depth` segments.
    pub fn prefix(&self, depth: usize) -> Numbering {
        Numbering(self.0[..depth.min(self.0.len())].to_vec())
    }

    /// Dotted form without the trailing separator (`1.2`), as stored for identifiers.
    pub fn section(&self) -> String {
        self.join(".")
    }

    /// Dash-joined form (`1-2`) for use inside element identifiers.
    pub fn dashed(&self) -> String {
        self.join("-")
    }

    fn join(&self, separator: &str) -> String {
        self.0
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for Numbering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in &self.0 {
            write!(f, "{n}.")?;
        }
        Ok(())
    }
}
