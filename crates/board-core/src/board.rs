//! Board View-Model
//!
//! The rendered board is derived from tickets, users and preferences on
//! every change; nothing here is stored separately.

use crate::error::DraftError;
use crate::grouping::{group_tickets, Group, GroupKey};
use crate::mode::{GroupingMode, OrderingMode};
use crate::models::{Priority, Status, Ticket, TicketId, User};
use crate::preferences::Preferences;
use crate::sorting::sort_tickets;

/// Prefix of ids minted for client-added tickets
pub const LOCAL_ID_PREFIX: &str = "LOCAL-";

/// Grouped and ordered columns ready for rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardView {
    pub grouping: GroupingMode,
    pub ordering: OrderingMode,
    pub columns: Vec<Group>,
}

impl BoardView {
    pub fn column(&self, key: &GroupKey) -> Option<&Group> {
        self.columns.iter().find(|column| &column.key == key)
    }
}

pub fn build_board(tickets: &[Ticket], users: &[User], prefs: Preferences) -> BoardView {
    let columns = group_tickets(tickets, users, prefs.grouping)
        .into_iter()
        .map(|group| Group {
            tickets: sort_tickets(&group.tickets, prefs.ordering),
            ..group
        })
        .collect();

    BoardView {
        grouping: prefs.grouping,
        ordering: prefs.ordering,
        columns,
    }
}

/// Id for the next client-added ticket: `LOCAL-{len + 1}`, bumped past
/// any id already taken.
pub fn next_local_id(tickets: &[Ticket]) -> TicketId {
    let mut seq = tickets.len() + 1;
    loop {
        let candidate = format!("{}{}", LOCAL_ID_PREFIX, seq);
        if !tickets.iter().any(|ticket| ticket.id.as_str() == candidate) {
            return TicketId::new(candidate);
        }
        seq += 1;
    }
}

/// Build a ticket added from a column's inline form.
///
/// The column key fixes the matching field so the ticket lands back in
/// the column it was added to; other fields take Todo / no priority /
/// unassigned.
pub fn draft_ticket(key: &GroupKey, title: &str, id: TicketId) -> Result<Ticket, DraftError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DraftError::EmptyTitle);
    }

    let ticket = match key {
        GroupKey::User(user_id) => Ticket::new(id, title, Status::Todo, Priority::NoPriority).with_user(user_id.clone()),
        GroupKey::Status(status) => Ticket::new(id, title, *status, Priority::NoPriority),
        GroupKey::Priority(priority) => Ticket::new(id, title, Status::Todo, *priority),
    };
    Ok(ticket)
}
