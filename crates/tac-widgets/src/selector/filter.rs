#![forbid(unsafe_code)]

//! Case-insensitive prefix filter.

use super::entry::Entry;

/// Whether `entry` passes `query`: the lowercased match key starts with the
/// lowercased query. The empty query matches everything.
pub fn may_show(entry: &Entry, query: &str) -> bool {
    PrefixFilter::new(query).matches(entry)
}

/// A query folded once and reused across a whole reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixFilter {
    folded: String,
}

impl PrefixFilter {
    pub fn new(query: &str) -> Self {
        Self {
            folded: query.to_lowercase(),
        }
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        if self.folded.is_empty() {
            return true;
        }
        entry.match_key().to_lowercase().starts_with(&self.folded)
    }
}
