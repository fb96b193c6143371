#![forbid(unsafe_code)]

//! Core: key events, the logical input events the selector consumes, and logging.

pub mod event;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, trace, warn};
