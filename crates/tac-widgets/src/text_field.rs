#![forbid(unsafe_code)]

//! Query text field.
//!
//! Accumulates the typed query from [`InputEvent`]s and reports what each
//! event meant for the panel. The text shown for the field goes through an
//! injected decoration function, recomputed whenever the text or the
//! decoration changes.

use std::fmt;

use tac_core::event::InputEvent;
use unicode_segmentation::UnicodeSegmentation;

/// Turns the raw query into the text displayed for the field.
pub type Decoration = Box<dyn Fn(&str) -> String + Send + Sync>;

/// What an input event meant for the field's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
    /// The text changed; re-filter.
    Changed,
    /// Move the selection.
    Move(i32),
    /// Accept the selection.
    Submit,
    /// Close the panel.
    Dismiss,
    /// Nothing happened.
    Ignored,
}

/// Single-line query input.
pub struct TextField {
    text: String,
    displayed: String,
    decorate: Decoration,
    enabled: bool,
}

impl Default for TextField {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextField")
            .field("text", &self.text)
            .field("displayed", &self.displayed)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl TextField {
    /// Create an empty, enabled field shown verbatim.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            displayed: String::new(),
            decorate: Box::new(str::to_owned),
            enabled: true,
        }
    }

    /// Set the initial text (builder).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Set the decoration function (builder).
    #[must_use]
    pub fn with_decoration(
        mut self,
        decorate: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.set_decoration(decorate);
        self
    }

    /// Decorate with a fixed prefix and suffix (builder).
    #[must_use]
    pub fn with_affixes(self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        let (prefix, suffix) = (prefix.into(), suffix.into());
        self.with_decoration(move |text| format!("{prefix}{text}{suffix}"))
    }

    // --- Value access ---

    /// Raw query text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Decorated text for display.
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.redecorate();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.redecorate();
    }

    /// Replace the decoration and redecorate the current text.
    pub fn set_decoration(&mut self, decorate: impl Fn(&str) -> String + Send + Sync + 'static) {
        self.decorate = Box::new(decorate);
        self.redecorate();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Ignore everything except [`InputEvent::Escape`].
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    // --- Event handling ---

    /// Apply an input event.
    pub fn handle(&mut self, event: InputEvent) -> FieldOutcome {
        match event {
            InputEvent::Escape => FieldOutcome::Dismiss,
            _ if !self.enabled => FieldOutcome::Ignored,
            InputEvent::Backspace => {
                let Some((start, _)) = self.text.grapheme_indices(true).next_back() else {
                    return FieldOutcome::Ignored;
                };
                self.text.truncate(start);
                self.redecorate();
                FieldOutcome::Changed
            }
            InputEvent::Enter => FieldOutcome::Submit,
            InputEvent::Move(delta) => FieldOutcome::Move(delta),
            InputEvent::Char(c) => {
                self.text.push(c);
                self.redecorate();
                FieldOutcome::Changed
            }
        }
    }

    fn redecorate(&mut self) {
        self.displayed = (self.decorate)(&self.text);
    }
}
