#![forbid(unsafe_code)]

//! Selection-list engine and the adapters around it.
//!
//! - [`selector`]: entry pool, prefix filter, viewport, and the reconciler
//!   that keeps the selection stable while the query changes.
//! - [`display`]: the write-only slot contract the reconciler renders into.
//! - [`text_field`]: the query field fed by logical input events.
//! - [`panel`]: a field and a selector wired together.

pub mod display;
pub mod panel;
pub mod selector;
pub mod text_field;

pub use display::{Slot, SlotBuffer, SlotDisplay, SlotFlags};
pub use panel::{Panel, PanelAction};
pub use selector::{ConfigError, Entry, Selector, SelectorConfig, VanishPolicy};
pub use text_field::{FieldOutcome, TextField};
