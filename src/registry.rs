//! Named-widget registry with at-most-once registration per name.

use std::collections::BTreeSet;
use std::sync::{Mutex, OnceLock};

use thiserror::Error;

/// Name under which the widget registers itself.
pub const ELEMENT_NAME: &str = "slide-text";

/// Error type for registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The name is not a valid custom element name
    #[error("invalid element name '{0}': must start with a lowercase ASCII letter and contain '-'")]
    InvalidName(String),
    /// The name was registered before
    #[error("element '{0}' is already defined")]
    AlreadyDefined(String),
}

/// A set of registered widget names.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    names: BTreeSet<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name`.
    ///
    /// Re-registering an existing name is an error; the first registration
    /// stays in place.
    pub fn define(&mut self, name: &str) -> Result<(), RegistryError> {
        if !is_valid_name(name) {
            return Err(RegistryError::InvalidName(name.to_string()));
        }
        if !self.names.insert(name.to_string()) {
            return Err(RegistryError::AlreadyDefined(name.to_string()));
        }
        tracing::debug!(name, "element defined");
        Ok(())
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Check a custom element name.
///
/// Valid names start with a lowercase ASCII letter, contain at least one
/// hyphen and no uppercase ASCII letters or whitespace.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_lower = chars.next().is_some_and(|c| c.is_ascii_lowercase());
    starts_lower
        && name.contains('-')
        && !name.chars().any(|c| c.is_ascii_uppercase() || c.is_whitespace())
}

fn global() -> &'static Mutex<Registry> {
    static GLOBAL: OnceLock<Mutex<Registry>> = OnceLock::new();
    GLOBAL.get_or_init(|| Mutex::new(Registry::new()))
}

/// Register `name` in the process-wide registry.
pub fn define_global(name: &str) -> Result<(), RegistryError> {
    global()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .define(name)
}

/// Check whether `name` is in the process-wide registry.
pub fn is_defined_global(name: &str) -> bool {
    global()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .is_defined(name)
}
