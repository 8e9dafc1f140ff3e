//! Kanban Board Core
//!
//! Pure board logic with no browser dependencies:
//! - models: tickets, users and their status/priority vocabularies
//! - grouping: partitions tickets into columns
//! - sorting: orders tickets inside a column
//! - board: view-model assembled from tickets, users and preferences
//! - preferences: persisted grouping/ordering modes

mod board;
mod error;
mod grouping;
mod mode;
mod models;
mod preferences;
mod sorting;

#[cfg(test)]
mod test_support;

pub use board::{build_board, draft_ticket, next_local_id, BoardView, LOCAL_ID_PREFIX};
pub use error::{DraftError, ModeParseError, StoreError};
pub use grouping::{group_by_priority, group_by_status, group_by_user, group_tickets, Group, GroupKey, Groups};
pub use mode::{GroupingMode, OrderingMode};
pub use models::{BoardData, Priority, Status, Ticket, TicketId, User, UNKNOWN_PRIORITY};
pub use preferences::{MemoryStore, PreferenceStore, Preferences, GROUPING_KEY, ORDERING_KEY};
pub use sorting::{compare_titles, sort_tickets};
