#![forbid(unsafe_code)]

//! Key events and the logical input events of the selector panel.
//!
//! Raw keys arrive as [`KeyEvent`] (optionally converted from crossterm) and
//! are decoded into the small closed set of [`InputEvent`]s the panel reacts
//! to. Nothing past this module ever looks at key codes.

use bitflags::bitflags;
#[cfg(not(target_arch = "wasm32"))]
use crossterm::event as cte;

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Whether a chord modifier (Ctrl, Alt or Super) is held.
    ///
    /// Shift is not a chord: it only changes the character produced.
    #[must_use]
    pub const fn is_chord(&self) -> bool {
        self.modifiers
            .intersects(Modifiers::CTRL.union(Modifiers::ALT).union(Modifiers::SUPER))
    }

    /// Convert a crossterm key event. Keys with no [`KeyCode`] mapping yield `None`.
    #[must_use]
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_crossterm(event: cte::KeyEvent) -> Option<Self> {
        let code = map_key_code(event.code)?;
        Some(Self {
            code,
            modifiers: map_modifiers(event.modifiers),
            kind: map_key_kind(event.kind),
        })
    }
}

/// Key codes the panel can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
    /// Function key (F1-F24).
    F(u8),
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,

    /// Key is being held (repeat event).
    Repeat,

    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const NONE  = 0b0000;
        const SHIFT = 0b0001;
        const ALT   = 0b0010;
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// Logical input event consumed by the text field and the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Append a character to the query.
    Char(char),
    /// Remove the last character of the query.
    Backspace,
    /// Accept the current selection.
    Enter,
    /// Dismiss the panel.
    Escape,
    /// Move the selection by the given number of lines.
    Move(i32),
}

impl InputEvent {
    /// Decode a key event.
    ///
    /// Releases, chords and keys with no meaning for the panel decode to `None`.
    #[must_use]
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release || key.is_chord() {
            return None;
        }
        match key.code {
            KeyCode::Escape => Some(Self::Escape),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Enter => Some(Self::Enter),
            KeyCode::Up => Some(Self::Move(-1)),
            KeyCode::Down => Some(Self::Move(1)),
            KeyCode::Char(c) if !c.is_control() => Some(Self::Char(c)),
            _ => None,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn map_key_kind(kind: cte::KeyEventKind) -> KeyEventKind {
    match kind {
        cte::KeyEventKind::Press => KeyEventKind::Press,
        cte::KeyEventKind::Repeat => KeyEventKind::Repeat,
        cte::KeyEventKind::Release => KeyEventKind::Release,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn map_key_code(code: cte::KeyCode) -> Option<KeyCode> {
    match code {
        cte::KeyCode::Backspace => Some(KeyCode::Backspace),
        cte::KeyCode::Enter => Some(KeyCode::Enter),
        cte::KeyCode::Left => Some(KeyCode::Left),
        cte::KeyCode::Right => Some(KeyCode::Right),
        cte::KeyCode::Up => Some(KeyCode::Up),
        cte::KeyCode::Down => Some(KeyCode::Down),
        cte::KeyCode::Home => Some(KeyCode::Home),
        cte::KeyCode::End => Some(KeyCode::End),
        cte::KeyCode::PageUp => Some(KeyCode::PageUp),
        cte::KeyCode::PageDown => Some(KeyCode::PageDown),
        cte::KeyCode::Tab => Some(KeyCode::Tab),
        cte::KeyCode::Delete => Some(KeyCode::Delete),
        cte::KeyCode::F(n) => Some(KeyCode::F(n)),
        cte::KeyCode::Char(c) => Some(KeyCode::Char(c)),
        cte::KeyCode::Esc => Some(KeyCode::Escape),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn map_modifiers(modifiers: cte::KeyModifiers) -> Modifiers {
    let mut mapped = Modifiers::NONE;
    if modifiers.contains(cte::KeyModifiers::SHIFT) {
        mapped |= Modifiers::SHIFT;
    }
    if modifiers.contains(cte::KeyModifiers::ALT) {
        mapped |= Modifiers::ALT;
    }
    if modifiers.contains(cte::KeyModifiers::CONTROL) {
        mapped |= Modifiers::CTRL;
    }
    if modifiers.intersects(
        cte::KeyModifiers::SUPER | cte::KeyModifiers::HYPER | cte::KeyModifiers::META,
    ) {
        mapped |= Modifiers::SUPER;
    }
    mapped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(code: KeyCode) -> Option<InputEvent> {
        InputEvent::from_key(&KeyEvent::new(code))
    }

    #[test]
    fn arrows_decode_to_moves() {
        assert_eq!(decode(KeyCode::Up), Some(InputEvent::Move(-1)));
        assert_eq!(decode(KeyCode::Down), Some(InputEvent::Move(1)));
    }

    #[test]
    fn control_keys_decode() {
        assert_eq!(decode(KeyCode::Escape), Some(InputEvent::Escape));
        assert_eq!(decode(KeyCode::Backspace), Some(InputEvent::Backspace));
        assert_eq!(decode(KeyCode::Enter), Some(InputEvent::Enter));
    }

    #[test]
    fn shifted_char_is_still_text() {
        let key = KeyEvent::new(KeyCode::Char('F')).with_modifiers(Modifiers::SHIFT);
        assert_eq!(InputEvent::from_key(&key), Some(InputEvent::Char('F')));
    }

    #[test]
    fn chords_are_ignored() {
        let key = KeyEvent::new(KeyCode::Char('c')).with_modifiers(Modifiers::CTRL);
        assert_eq!(InputEvent::from_key(&key), None);
        let key = KeyEvent::new(KeyCode::Enter).with_modifiers(Modifiers::ALT);
        assert_eq!(InputEvent::from_key(&key), None);
    }

    #[test]
    fn release_is_ignored() {
        let key = KeyEvent::new(KeyCode::Char('a')).with_kind(KeyEventKind::Release);
        assert_eq!(InputEvent::from_key(&key), None);
    }

    #[test]
    fn repeat_still_moves() {
        let key = KeyEvent::new(KeyCode::Down).with_kind(KeyEventKind::Repeat);
        assert_eq!(InputEvent::from_key(&key), Some(InputEvent::Move(1)));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert_eq!(decode(KeyCode::Tab), None);
        assert_eq!(decode(KeyCode::Left), None);
        assert_eq!(decode(KeyCode::F(5)), None);
        assert_eq!(decode(KeyCode::Char('\u{7}')), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod crossterm_mapping {
        use super::*;
        use crossterm::event as ct_event;

        #[test]
        fn esc_maps_to_escape() {
            let ct = ct_event::KeyEvent::new(ct_event::KeyCode::Esc, ct_event::KeyModifiers::NONE);
            let key = KeyEvent::from_crossterm(ct).expect("esc maps");
            assert_eq!(key.code, KeyCode::Escape);
            assert_eq!(InputEvent::from_key(&key), Some(InputEvent::Escape));
        }

        #[test]
        fn control_modifier_maps_to_chord() {
            let ct = ct_event::KeyEvent::new(
                ct_event::KeyCode::Char('u'),
                ct_event::KeyModifiers::CONTROL,
            );
            let key = KeyEvent::from_crossterm(ct).expect("char maps");
            assert!(key.is_chord());
            assert_eq!(InputEvent::from_key(&key), None);
        }

        #[test]
        fn unmapped_code_is_none() {
            let ct = ct_event::KeyEvent::new(
                ct_event::KeyCode::CapsLock,
                ct_event::KeyModifiers::NONE,
            );
            assert!(KeyEvent::from_crossterm(ct).is_none());
        }
    }
}
