#![forbid(unsafe_code)]

//! Candidate entries and the append-only pool that holds them.

/// A single candidate.
///
/// Entries have no identity beyond structural equality: two entries with the
/// same key, display text and highlight flag are the same entry as far as
/// selection carry-over is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    match_key: String,
    display_text: String,
    highlighted: bool,
}

impl Entry {
    /// Create a highlighted entry displayed as its own match key.
    pub fn new(match_key: impl Into<String>) -> Self {
        let match_key = match_key.into();
        Self {
            display_text: match_key.clone(),
            match_key,
            highlighted: true,
        }
    }

    /// Set the text shown instead of the match key (builder).
    #[must_use]
    pub fn with_display(mut self, display_text: impl Into<String>) -> Self {
        self.display_text = display_text.into();
        self
    }

    /// Set the highlight flag (builder).
    #[must_use]
    pub fn with_highlight(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    /// Key the query is matched against. Never displayed.
    pub fn match_key(&self) -> &str {
        &self.match_key
    }

    /// Text rendered in the entry's slot.
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Caller-supplied emphasis flag, independent of selection.
    pub fn highlighted(&self) -> bool {
        self.highlighted
    }
}

impl From<&str> for Entry {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for Entry {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

/// Ordered, append-only collection of entries. Duplicates are allowed.
#[derive(Debug, Clone, Default)]
pub struct Pool {
    entries: Vec<Entry>,
}

impl Pool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}

impl std::ops::Index<usize> for Pool {
    type Output = Entry;

    fn index(&self, index: usize) -> &Entry {
        &self.entries[index]
    }
}
