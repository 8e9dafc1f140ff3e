//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Only source
//! data lives here; columns are derived with [`BoardState::view`].

use board_core::{
    build_board, draft_ticket, next_local_id, BoardData, BoardView, DraftError, GroupKey, GroupingMode,
    OrderingMode, Preferences, Ticket, TicketId, User,
};
use reactive_stores::Store;
use tracing::{debug, info};

/// Progress of the one-time board fetch
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Fetched tickets plus client-added ones
    pub tickets: Vec<Ticket>,
    pub users: Vec<User>,
    pub load: LoadState,
    pub grouping: GroupingMode,
    pub ordering: OrderingMode,
}

impl BoardState {
    pub fn new(prefs: Preferences) -> Self {
        Self {
            grouping: prefs.grouping,
            ordering: prefs.ordering,
            ..Default::default()
        }
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            grouping: self.grouping,
            ordering: self.ordering,
        }
    }

    /// Columns for the current tickets, users and modes
    pub fn view(&self) -> BoardView {
        build_board(&self.tickets, &self.users, self.preferences())
    }

    /// Take over a fetched board, keeping tickets added while loading
    pub fn apply_board(&mut self, data: BoardData) {
        info!(tickets = data.tickets.len(), users = data.users.len(), "board loaded");
        let added = std::mem::take(&mut self.tickets);
        self.tickets = data.tickets;
        self.tickets.extend(added);
        self.users = data.users;
        self.load = LoadState::Ready;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.load = LoadState::Failed(message.into());
    }

    /// Append a client-only ticket to the flat list; it is never sent
    /// anywhere and is gone after a reload.
    pub fn add_local_ticket(&mut self, key: &GroupKey, title: &str) -> Result<TicketId, DraftError> {
        let id = next_local_id(&self.tickets);
        let ticket = draft_ticket(key, title, id.clone())?;
        debug!(id = %id, column = ?key, "ticket added locally");
        self.tickets.push(ticket);
        Ok(id)
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;
