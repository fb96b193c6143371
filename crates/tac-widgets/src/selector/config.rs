#![forbid(unsafe_code)]

//! Construction-time configuration for the selector.

use std::fmt;

use super::viewport::Viewport;

/// Slot count of the stock launcher panel.
pub const DEFAULT_CAPACITY: usize = 20;

/// What happens to the selected line when the selected entry drops out of
/// the shown list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VanishPolicy {
    /// Keep the numeric line (clamped), selecting whatever now occupies it.
    #[default]
    RetainLine,
    /// Jump back to the first line, or to no selection if nothing is shown.
    ResetToTop,
}

/// Configuration for a [`Selector`](super::Selector).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Maximum number of display slots. Must be non-zero.
    pub capacity: usize,
    /// Query in effect before the first keystroke.
    pub initial_query: String,
    /// Selection policy when the selected entry disappears.
    pub vanish_policy: VanishPolicy,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            initial_query: String::new(),
            vanish_policy: VanishPolicy::default(),
        }
    }
}

impl SelectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the slot capacity (builder).
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the initial query (builder).
    #[must_use]
    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        self.initial_query = query.into();
        self
    }

    /// Set the vanish policy (builder).
    #[must_use]
    pub fn with_vanish_policy(mut self, policy: VanishPolicy) -> Self {
        self.vanish_policy = policy;
        self
    }

    /// Check the configuration without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Viewport::new(self.capacity).map(|_| ())
    }
}

/// Rejected selector configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A selector needs at least one display slot.
    ZeroCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "selector capacity must be at least one slot"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = SelectorConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert!(config.initial_query.is_empty());
        assert_eq!(config.vanish_policy, VanishPolicy::RetainLine);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_capacity_fails_validation() {
        let config = SelectorConfig::new().with_capacity(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroCapacity));
    }

    #[test]
    fn builders_chain() {
        let config = SelectorConfig::new()
            .with_capacity(5)
            .with_initial_query("fi")
            .with_vanish_policy(VanishPolicy::ResetToTop);
        assert_eq!(config.capacity, 5);
        assert_eq!(config.initial_query, "fi");
        assert_eq!(config.vanish_policy, VanishPolicy::ResetToTop);
    }

    #[test]
    fn error_message_mentions_capacity() {
        assert!(ConfigError::ZeroCapacity.to_string().contains("capacity"));
    }
}
