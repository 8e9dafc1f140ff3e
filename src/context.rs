//! Board Context
//!
//! Store and configuration shared with every component, plus the
//! write-through actions the display menu and columns trigger.

use board_core::{GroupKey, GroupingMode, OrderingMode, Preferences, Priority, Status};
use leptos::prelude::*;
use tracing::{debug, warn};

use crate::assets;
use crate::config::BoardConfig;
use crate::storage::LocalStorage;
use crate::store::{BoardStateStoreFields, BoardStore};

/// Board-wide handles provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    pub store: BoardStore,
    config: StoredValue<BoardConfig>,
}

impl BoardContext {
    pub fn new(store: BoardStore, config: BoardConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    /// Switch grouping and persist it immediately
    pub fn set_grouping(&self, mode: GroupingMode) {
        debug!(grouping = %mode, "grouping changed");
        self.store.grouping().set(mode);
        if let Err(err) = Preferences::save_grouping(&LocalStorage, mode) {
            warn!(error = %err, "grouping preference not saved");
        }
    }

    /// Switch ordering and persist it immediately
    pub fn set_ordering(&self, mode: OrderingMode) {
        debug!(ordering = %mode, "ordering changed");
        self.store.ordering().set(mode);
        if let Err(err) = Preferences::save_ordering(&LocalStorage, mode) {
            warn!(error = %err, "ordering preference not saved");
        }
    }

    /// Add a client-only ticket to `column`. Returns whether it was added.
    pub fn add_ticket(&self, column: &GroupKey, title: &str) -> bool {
        match self.store.try_update(|state| state.add_local_ticket(column, title)) {
            Some(Ok(_)) => true,
            Some(Err(err)) => {
                warn!(error = %err, "task not added");
                false
            }
            None => false,
        }
    }

    pub fn asset_url(&self, file: &str) -> String {
        self.config.with_value(|config| assets::asset_url(&config.asset_base, file))
    }

    pub fn priority_icon(&self, priority: Priority) -> String {
        self.config.with_value(|config| assets::priority_icon(&config.asset_base, priority))
    }

    pub fn status_icon(&self, status: Status) -> String {
        self.config.with_value(|config| assets::status_icon(&config.asset_base, status))
    }
}

pub fn use_board_context() -> BoardContext {
    expect_context::<BoardContext>()
}
