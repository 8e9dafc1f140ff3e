//! Display Preferences
//!
//! Grouping and ordering modes persisted as plain strings in a key-value
//! store. Values outside the known domain fall back to the defaults.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::mode::{GroupingMode, OrderingMode};

pub const GROUPING_KEY: &str = "grouping";
pub const ORDERING_KEY: &str = "ordering";

/// String key-value storage backing the preferences
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store, used off the browser and in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The two user-selectable display modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub grouping: GroupingMode,
    pub ordering: OrderingMode,
}

impl Preferences {
    /// Read both keys, keeping the default for any key that is absent,
    /// unreadable or outside the mode domain.
    pub fn load(store: &impl PreferenceStore) -> Self {
        let defaults = Self::default();
        let prefs = Self {
            grouping: load_mode(store, GROUPING_KEY).unwrap_or(defaults.grouping),
            ordering: load_mode(store, ORDERING_KEY).unwrap_or(defaults.ordering),
        };
        debug!(grouping = %prefs.grouping, ordering = %prefs.ordering, "preferences loaded");
        prefs
    }

    pub fn save_grouping(store: &impl PreferenceStore, mode: GroupingMode) -> Result<(), StoreError> {
        store.write(GROUPING_KEY, mode.as_str())
    }

    pub fn save_ordering(store: &impl PreferenceStore, mode: OrderingMode) -> Result<(), StoreError> {
        store.write(ORDERING_KEY, mode.as_str())
    }
}

fn load_mode<M>(store: &impl PreferenceStore, key: &str) -> Option<M>
where
    M: std::str::FromStr,
    M::Err: std::fmt::Display,
{
    let raw = match store.read(key) {
        Ok(raw) => raw?,
        Err(err) => {
            warn!(key, error = %err, "preference unreadable, using default");
            return None;
        }
    };
    match raw.parse() {
        Ok(mode) => Some(mode),
        Err(err) => {
            warn!(key, value = %raw, error = %err, "ignoring invalid stored preference");
            None
        }
    }
}
