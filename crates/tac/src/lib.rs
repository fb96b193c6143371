#![forbid(unsafe_code)]

//! Type-ahead selector panel facade.
//!
//! Re-exports the engine and its adapters from the internal crates and
//! offers a small prelude for applications embedding the panel.
//!
//! ```ignore
//! use tac::prelude::*;
//!
//! let mut panel = Panel::headless(SelectorConfig::new().with_capacity(10))?;
//! panel.selector_mut().add("firefox");
//! panel.handle_event(InputEvent::Char('f'));
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use tac_core::event::{InputEvent, KeyCode, KeyEvent, KeyEventKind, Modifiers};

// --- Widget re-exports -----------------------------------------------------

pub use tac_widgets::{
    ConfigError, Entry, FieldOutcome, Panel, PanelAction, Selector, SelectorConfig, Slot,
    SlotBuffer, SlotDisplay, SlotFlags, TextField, VanishPolicy,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for applications embedding the panel.
#[derive(Debug)]
pub enum Error {
    /// Rejected selector configuration.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid selector config: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for tac APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Entry, Error, InputEvent, KeyCode, KeyEvent, Modifiers, Panel, PanelAction, Result,
        Selector, SelectorConfig, SlotBuffer, SlotDisplay, VanishPolicy,
    };

    pub use crate::{core, widgets};
}

pub use tac_core as core;
pub use tac_widgets as widgets;
