#![forbid(unsafe_code)]

//! Display adapter contract and a headless slot buffer.
//!
//! The selector drives a fixed column of text slots through [`SlotDisplay`].
//! It only ever writes: text, two style flags per slot, and the number of
//! slots that should be visible. [`SlotBuffer`] records those writes in
//! memory, which is all tests and diffing frontends need.

use bitflags::bitflags;

bitflags! {
    /// Per-slot styling requested by the selector.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SlotFlags: u8 {
        /// Foreground emphasis: the entry was added as highlighted.
        const HIGHLIGHTED = 0b01;
        /// Background emphasis: the slot holds the current selection.
        const SELECTED    = 0b10;
    }
}

/// Sink for rendered selector state.
pub trait SlotDisplay {
    /// Put `text` in slot `slot`.
    fn set_slot_text(&mut self, slot: usize, text: &str);

    /// Style slot `slot`.
    fn set_slot_style(&mut self, slot: usize, flags: SlotFlags);

    /// Show the first `count` slots and hide the rest.
    fn set_visible_count(&mut self, count: usize);
}

impl<D: SlotDisplay + ?Sized> SlotDisplay for &mut D {
    fn set_slot_text(&mut self, slot: usize, text: &str) {
        (**self).set_slot_text(slot, text);
    }

    fn set_slot_style(&mut self, slot: usize, flags: SlotFlags) {
        (**self).set_slot_style(slot, flags);
    }

    fn set_visible_count(&mut self, count: usize) {
        (**self).set_visible_count(count);
    }
}

/// Contents of one slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Slot {
    pub text: String,
    pub flags: SlotFlags,
}

impl Slot {
    pub fn is_selected(&self) -> bool {
        self.flags.contains(SlotFlags::SELECTED)
    }

    pub fn is_highlighted(&self) -> bool {
        self.flags.contains(SlotFlags::HIGHLIGHTED)
    }
}

/// In-memory [`SlotDisplay`] with a fixed number of slots.
///
/// Slots past the visible count keep whatever they last held, like labels
/// that were packed once and are merely clipped by the window height.
#[derive(Debug, Clone, Default)]
pub struct SlotBuffer {
    slots: Vec<Slot>,
    visible: usize,
}

impl SlotBuffer {
    /// Create a buffer with `slots` empty slots, none visible.
    pub fn new(slots: usize) -> Self {
        Self {
            slots: vec![Slot::default(); slots],
            visible: 0,
        }
    }

    /// Total slot count.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, slot: usize) -> Option<&Slot> {
        self.slots.get(slot)
    }

    pub fn visible_count(&self) -> usize {
        self.visible
    }

    /// Slots currently on screen, top to bottom.
    pub fn visible_rows(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter().take(self.visible)
    }

    /// Texts of the visible slots.
    pub fn visible_texts(&self) -> Vec<&str> {
        self.visible_rows().map(|slot| slot.text.as_str()).collect()
    }

    /// Index of the visible slot styled as selected, if any.
    pub fn selected_row(&self) -> Option<usize> {
        self.visible_rows().position(Slot::is_selected)
    }
}

impl SlotDisplay for SlotBuffer {
    fn set_slot_text(&mut self, slot: usize, text: &str) {
        match self.slots.get_mut(slot) {
            Some(target) => {
                target.text.clear();
                target.text.push_str(text);
            }
            None => {
                tac_core::warn!(slot, len = self.slots.len(), "slot text out of range");
            }
        }
    }

    fn set_slot_style(&mut self, slot: usize, flags: SlotFlags) {
        match self.slots.get_mut(slot) {
            Some(target) => target.flags = flags,
            None => {
                tac_core::warn!(slot, len = self.slots.len(), "slot style out of range");
            }
        }
    }

    fn set_visible_count(&mut self, count: usize) {
        if count > self.slots.len() {
            tac_core::warn!(count, len = self.slots.len(), "visible count clipped");
        }
        self.visible = count.min(self.slots.len());
    }
}
