#![forbid(unsafe_code)]

//! Bounded display window over the shown list.

use std::num::NonZeroUsize;

use super::config::ConfigError;

/// Fixed slot capacity plus the number of slots in use after the last pass.
///
/// # Invariants
///
/// `active_count <= capacity` at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    capacity: NonZeroUsize,
    active_count: usize,
}

impl Viewport {
    /// Create a viewport with `capacity` slots, none active.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(ConfigError::ZeroCapacity)?;
        Ok(Self {
            capacity,
            active_count: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Slots filled by the last [`fit`](Self::fit).
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// Number of lines of a `shown_len` list that fit in the window.
    pub fn limit(&self, shown_len: usize) -> usize {
        shown_len.min(self.capacity.get())
    }

    /// Record a new shown length and return the resulting active count.
    pub fn fit(&mut self, shown_len: usize) -> usize {
        self.active_count = self.limit(shown_len);
        self.active_count
    }

    /// Clamp a line into the window for a `shown_len` list; `None` if nothing fits.
    pub fn clamp_line(&self, line: Option<usize>, shown_len: usize) -> Option<usize> {
        let last = self.limit(shown_len).checked_sub(1)?;
        line.map(|line| line.min(last))
    }

    /// Whether `line` addresses an active slot for a `shown_len` list.
    pub fn contains(&self, line: usize, shown_len: usize) -> bool {
        line < self.limit(shown_len)
    }
}
