#![forbid(unsafe_code)]

//! Incremental selection list.
//!
//! A [`Selector`] owns an append-only [`Pool`] of entries, re-derives the
//! subset matching the current query on every relevant change, keeps a
//! stable notion of "the selected entry" across those changes, and pushes the
//! visible window of the result into a [`SlotDisplay`].
//!
//! # Usage
//!
//! ```ignore
//! let mut selector = Selector::headless(SelectorConfig::new().with_capacity(3))?;
//! selector.add("firefox");
//! selector.add(Entry::new("ff").with_display("Firefox (alias)"));
//! selector.on_query_changed("f");
//! selector.on_move(1);
//! assert_eq!(selector.selected_item(), Some("ff"));
//! ```
//!
//! # Reconciliation
//!
//! Every pass re-filters the whole pool (pools are human-sized), then:
//!
//! 1. If the previously selected entry is still shown, its new line wins.
//! 2. Otherwise, with no prior line, the selection falls back to line 0 (or
//!    none when nothing is shown). With a prior line, [`VanishPolicy`] decides:
//!    keep the number, or reset to the top.
//! 3. The line is clamped to the active window.
//!
//! Steps 1-3 are skipped while the selector is disabled; a line that no
//! longer addresses an active slot is then dropped.

pub mod config;
pub mod entry;
pub mod filter;
pub mod viewport;

pub use config::{ConfigError, DEFAULT_CAPACITY, SelectorConfig, VanishPolicy};
pub use entry::{Entry, Pool};
pub use filter::{PrefixFilter, may_show};
pub use viewport::Viewport;

use crate::display::{SlotBuffer, SlotDisplay, SlotFlags};

/// Incremental selection-list engine.
///
/// # Invariants
///
/// 1. `selected_line` is `Some(i)` iff `selected_entry` is `Some(e)`, and then
///    `shown[i]` is `e` and `i < viewport.active_count()`.
/// 2. An empty shown list means no selection.
/// 3. `shown` holds pool indices in pool order.
#[derive(Debug)]
pub struct Selector<D> {
    pool: Pool,
    /// Pool indices of the entries passing the filter.
    shown: Vec<usize>,
    query: String,
    selected_line: Option<usize>,
    selected_entry: Option<Entry>,
    viewport: Viewport,
    vanish_policy: VanishPolicy,
    enabled: bool,
    display: D,
}

impl Selector<SlotBuffer> {
    /// Create a selector rendering into a [`SlotBuffer`] sized to the capacity.
    pub fn headless(config: SelectorConfig) -> Result<Self, ConfigError> {
        let display = SlotBuffer::new(config.capacity);
        Self::new(config, display)
    }
}

impl<D: SlotDisplay> Selector<D> {
    /// Create a selector and run the initial pass, so `display` starts out
    /// reflecting the (empty) pool.
    pub fn new(config: SelectorConfig, display: D) -> Result<Self, ConfigError> {
        let viewport = Viewport::new(config.capacity)?;
        let mut selector = Self {
            pool: Pool::new(),
            shown: Vec::new(),
            query: config.initial_query,
            selected_line: None,
            selected_entry: None,
            viewport,
            vanish_policy: config.vanish_policy,
            enabled: true,
            display,
        };
        selector.reconcile();
        Ok(selector)
    }

    // --- Pool ---

    /// Append an entry.
    ///
    /// While the pool still fits in the window every add reconciles, so the
    /// panel stays live during population. Past that point adds are silent
    /// until the next query change or move.
    pub fn add(&mut self, entry: impl Into<Entry>) {
        self.pool.push(entry.into());
        if self.pool.len() <= self.viewport.capacity() {
            self.reconcile();
        } else {
            tac_core::trace!(pool = self.pool.len(), "add past capacity, reconcile deferred");
        }
    }

    /// Drop every entry and reset the view.
    pub fn clear(&mut self) {
        self.pool.clear();
        self.reconcile();
    }

    // --- Input ---

    /// The query text changed.
    pub fn on_query_changed(&mut self, query: &str) {
        self.query.clear();
        self.query.push_str(query);
        self.reconcile();
    }

    /// Move the selection by `delta` lines, clamped to the active window.
    ///
    /// No-op while disabled. Otherwise the shown list is re-filtered first,
    /// so entries added since the last pass are reachable by this move.
    pub fn on_move(&mut self, delta: i32) {
        if !self.enabled {
            tac_core::debug!(delta, "move ignored while disabled");
            return;
        }
        self.reconcile();
        let limit = self.viewport.limit(self.shown.len());
        if limit == 0 {
            return;
        }

        let current = self.selected_line.map_or(-1, |line| line as i64);
        let target = (current + i64::from(delta)).clamp(0, limit as i64 - 1) as usize;
        tac_core::trace!(delta, from = current, to = target, "move");
        self.selected_line = Some(target);
        self.selected_entry = Some(self.pool[self.shown[target]].clone());
        self.render();
    }

    /// Re-enable selection tracking. Takes effect on the next pass.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Freeze selection: moves are ignored and passes only re-filter.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    // --- Accessors ---

    /// Match key of the selected entry, if any.
    pub fn selected_item(&self) -> Option<&str> {
        self.selected_entry.as_ref().map(Entry::match_key)
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selected_entry.as_ref()
    }

    /// Line of the selection within the shown list.
    pub fn selected_line(&self) -> Option<usize> {
        self.selected_line
    }

    /// Query the last pass filtered with.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Length of the shown list as of the last pass.
    pub fn shown_len(&self) -> usize {
        self.shown.len()
    }

    /// Entries of the shown list as of the last pass, in pool order.
    pub fn shown(&self) -> impl Iterator<Item = &Entry> {
        self.shown.iter().map(|&i| &self.pool[i])
    }

    /// Slots filled by the last pass.
    pub fn active_count(&self) -> usize {
        self.viewport.active_count()
    }

    pub fn capacity(&self) -> usize {
        self.viewport.capacity()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn vanish_policy(&self) -> VanishPolicy {
        self.vanish_policy
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Mutable access to the display. The selector never reads it back.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    // --- Reconciliation ---

    fn reconcile(&mut self) {
        let span = tac_core::debug_span!(
            "reconcile",
            pool = self.pool.len(),
            query = %self.query,
            enabled = self.enabled
        );
        let _guard = span.enter();

        let filter = PrefixFilter::new(&self.query);
        self.shown.clear();
        self.shown.extend(
            self.pool
                .iter()
                .enumerate()
                .filter(|(_, entry)| filter.matches(entry))
                .map(|(i, _)| i),
        );

        if self.enabled {
            let line = self.carry_over();
            self.selected_line = self.viewport.clamp_line(line, self.shown.len());
        } else if let Some(line) = self.selected_line
            && !self.viewport.contains(line, self.shown.len())
        {
            tac_core::debug!(line, shown = self.shown.len(), "frozen selection fell off");
            self.selected_line = None;
        }

        self.selected_entry = self
            .selected_line
            .map(|line| self.pool[self.shown[line]].clone());
        tac_core::debug!(
            shown = self.shown.len(),
            line = ?self.selected_line,
            "reconciled"
        );
        self.render();
    }

    /// Line the selection should land on before clamping.
    ///
    /// The selected entry keeps its current line if that line still holds an
    /// equal entry; otherwise it moves to the first equal entry shown.
    fn carry_over(&self) -> Option<usize> {
        if let Some(entry) = &self.selected_entry {
            if let Some(line) = self.selected_line
                && self.shown.get(line).is_some_and(|&i| self.pool[i] == *entry)
            {
                return Some(line);
            }
            if let Some(line) = self.shown.iter().position(|&i| self.pool[i] == *entry) {
                return Some(line);
            }
        }
        match (self.selected_line, self.vanish_policy) {
            (Some(line), VanishPolicy::RetainLine) => Some(line),
            (Some(_), VanishPolicy::ResetToTop) | (None, _) => {
                (!self.shown.is_empty()).then_some(0)
            }
        }
    }

    fn render(&mut self) {
        let active = self.viewport.fit(self.shown.len());
        for (slot, &index) in self.shown.iter().take(active).enumerate() {
            let entry = &self.pool[index];
            let mut flags = SlotFlags::empty();
            flags.set(SlotFlags::HIGHLIGHTED, entry.highlighted());
            flags.set(SlotFlags::SELECTED, self.selected_line == Some(slot));
            self.display.set_slot_text(slot, entry.display_text());
            self.display.set_slot_style(slot, flags);
        }
        self.display.set_visible_count(active);
    }
}
