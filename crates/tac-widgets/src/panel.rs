#![forbid(unsafe_code)]

//! Launcher panel: a query field on top of a selection list.
//!
//! # Usage
//!
//! ```ignore
//! let mut panel = Panel::headless(SelectorConfig::new().with_capacity(10))?;
//! for program in programs {
//!     panel.selector_mut().add(program);
//! }
//! // In your event loop:
//! if let Some(action) = panel.handle_key(&key) {
//!     match action {
//!         PanelAction::Submit(key) => { /* launch `key` */ }
//!         PanelAction::Dismiss => { /* close the panel */ }
//!     }
//! }
//! ```

use tac_core::event::{InputEvent, KeyEvent};

use crate::display::{SlotBuffer, SlotDisplay};
use crate::selector::{ConfigError, Selector, SelectorConfig};
use crate::text_field::{FieldOutcome, TextField};

/// Action returned from event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    /// The user accepted the selection (contains its match key).
    Submit(String),
    /// The user dismissed the panel (Esc).
    Dismiss,
}

/// Query field wired to a [`Selector`].
#[derive(Debug)]
pub struct Panel<D> {
    field: TextField,
    selector: Selector<D>,
}

impl Panel<SlotBuffer> {
    /// Create a panel rendering into a [`SlotBuffer`].
    pub fn headless(config: SelectorConfig) -> Result<Self, ConfigError> {
        let display = SlotBuffer::new(config.capacity);
        Self::new(config, display)
    }
}

impl<D: SlotDisplay> Panel<D> {
    /// Create a panel whose field starts out holding `config.initial_query`.
    pub fn new(config: SelectorConfig, display: D) -> Result<Self, ConfigError> {
        let field = TextField::new().with_text(config.initial_query.clone());
        let selector = Selector::new(config, display)?;
        Ok(Self { field, selector })
    }

    /// Decorate the query field (builder).
    #[must_use]
    pub fn with_decoration(
        mut self,
        decorate: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.field.set_decoration(decorate);
        self
    }

    // --- Event handling ---

    /// Handle a logical input event.
    ///
    /// Returns a [`PanelAction`] when the user submitted a selection or
    /// dismissed the panel. Enter with nothing selected does nothing.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<PanelAction> {
        match self.field.handle(event) {
            FieldOutcome::Changed => {
                self.selector.on_query_changed(self.field.text());
                None
            }
            FieldOutcome::Move(delta) => {
                self.selector.on_move(delta);
                None
            }
            FieldOutcome::Submit => {
                let selected = self.selector.selected_item().map(str::to_owned);
                if selected.is_none() {
                    tac_core::debug!("submit with nothing selected");
                }
                selected.map(PanelAction::Submit)
            }
            FieldOutcome::Dismiss => Some(PanelAction::Dismiss),
            FieldOutcome::Ignored => None,
        }
    }

    /// Decode a key event and handle it.
    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<PanelAction> {
        InputEvent::from_key(key).and_then(|event| self.handle_event(event))
    }

    // --- Access ---

    /// Replace the query text and re-filter.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.field.set_text(query);
        self.selector.on_query_changed(self.field.text());
    }

    /// Lock or unlock typing. Escape still dismisses while locked.
    pub fn set_input_enabled(&mut self, enabled: bool) {
        if enabled {
            self.field.enable();
        } else {
            self.field.disable();
        }
    }

    pub fn field(&self) -> &TextField {
        &self.field
    }

    pub fn selector(&self) -> &Selector<D> {
        &self.selector
    }

    /// Mutable access for adding entries and toggling selection.
    pub fn selector_mut(&mut self) -> &mut Selector<D> {
        &mut self.selector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tac_core::event::{KeyCode, Modifiers};

    fn panel(keys: &[&str]) -> Panel<SlotBuffer> {
        let mut panel = Panel::headless(SelectorConfig::new().with_capacity(4)).unwrap();
        for key in keys {
            panel.selector_mut().add(*key);
        }
        panel
    }

    fn type_str(panel: &mut Panel<SlotBuffer>, text: &str) {
        for c in text.chars() {
            assert_eq!(panel.handle_event(InputEvent::Char(c)), None);
        }
    }

    #[test]
    fn typing_filters_the_list() {
        let mut panel = panel(&["firefox", "gimp", "files"]);
        type_str(&mut panel, "fi");
        assert_eq!(panel.field().text(), "fi");
        assert_eq!(panel.selector().display().visible_texts(), ["firefox", "files"]);
    }

    #[test]
    fn enter_submits_selection() {
        let mut panel = panel(&["firefox", "files"]);
        panel.handle_event(InputEvent::Move(1));
        assert_eq!(
            panel.handle_event(InputEvent::Enter),
            Some(PanelAction::Submit("files".into()))
        );
    }

    #[test]
    fn enter_without_selection_does_nothing() {
        let mut panel = panel(&["firefox"]);
        type_str(&mut panel, "zz");
        assert_eq!(panel.handle_event(InputEvent::Enter), None);
    }

    #[test]
    fn escape_dismisses_even_when_locked() {
        let mut panel = panel(&["a"]);
        panel.set_input_enabled(false);
        assert_eq!(panel.handle_event(InputEvent::Char('z')), None);
        assert_eq!(panel.field().text(), "");
        assert_eq!(panel.handle_event(InputEvent::Escape), Some(PanelAction::Dismiss));
    }

    #[test]
    fn backspace_widens_the_list() {
        let mut panel = panel(&["ab", "b"]);
        type_str(&mut panel, "a");
        assert_eq!(panel.selector().shown_len(), 1);
        panel.handle_event(InputEvent::Backspace);
        assert_eq!(panel.selector().shown_len(), 2);
        assert_eq!(panel.selector().selected_item(), Some("ab"));
    }

    #[test]
    fn keys_are_decoded() {
        let mut panel = panel(&["one", "two"]);
        panel.handle_key(&KeyEvent::new(KeyCode::Down));
        assert_eq!(panel.selector().selected_item(), Some("two"));
        let chord = KeyEvent::new(KeyCode::Char('o')).with_modifiers(Modifiers::CTRL);
        assert_eq!(panel.handle_key(&chord), None);
        assert_eq!(panel.field().text(), "");
        assert_eq!(
            panel.handle_key(&KeyEvent::new(KeyCode::Enter)),
            Some(PanelAction::Submit("two".into()))
        );
    }

    #[test]
    fn initial_query_seeds_field_and_filter() {
        let config = SelectorConfig::new().with_capacity(3).with_initial_query("g");
        let mut panel = Panel::headless(config).unwrap().with_decoration(|q| format!("run: {q}"));
        panel.selector_mut().add("firefox");
        panel.selector_mut().add("gimp");
        assert_eq!(panel.field().displayed(), "run: g");
        assert_eq!(panel.selector().display().visible_texts(), ["gimp"]);
    }

    #[test]
    fn set_query_refilters() {
        let mut panel = panel(&["firefox", "gimp"]);
        panel.set_query("gi");
        assert_eq!(panel.selector().query(), "gi");
        assert_eq!(panel.selector().selected_item(), Some("gimp"));
    }
}
