//! Grouping Engine
//!
//! Partitions a flat ticket list into ordered columns. Tickets whose
//! owner, status or priority is not recognized land in no column.

use std::collections::HashMap;

use crate::mode::GroupingMode;
use crate::models::{Priority, Status, Ticket, User};

/// Identifies a column under the active grouping mode
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    User(String),
    Status(Status),
    Priority(Priority),
}

/// One column: its key, display metadata and tickets
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub key: GroupKey,
    pub title: String,
    /// Avatar file name (user grouping only)
    pub image: Option<String>,
    /// Owner availability (user grouping only)
    pub available: bool,
    pub tickets: Vec<Ticket>,
}

impl Group {
    fn empty(key: GroupKey, title: impl Into<String>) -> Self {
        Self {
            key,
            title: title.into(),
            image: None,
            available: false,
            tickets: Vec::new(),
        }
    }
}

/// Columns in construction order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Groups(Vec<Group>);

impl Groups {
    pub fn get(&self, key: &GroupKey) -> Option<&Group> {
        self.0.iter().find(|group| &group.key == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.0.iter().map(|group| &group.key)
    }

    /// Number of tickets placed in any column
    pub fn ticket_count(&self) -> usize {
        self.0.iter().map(|group| group.tickets.len()).sum()
    }
}

impl IntoIterator for Groups {
    type Item = Group;
    type IntoIter = std::vec::IntoIter<Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// One column per user, in user order.
///
/// A user id listed twice keeps its first position; the later entry's
/// name and avatar win.
pub fn group_by_user(tickets: &[Ticket], users: &[User]) -> Groups {
    let mut groups: Vec<Group> = Vec::with_capacity(users.len());
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(users.len());

    for user in users {
        let slot = *index.entry(user.id.as_str()).or_insert_with(|| {
            groups.push(Group::empty(GroupKey::User(user.id.clone()), ""));
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.title = user.name.clone();
        group.image = user.image.clone();
        group.available = user.available;
    }

    for ticket in tickets {
        if let Some(&slot) = index.get(ticket.user_id.as_str()) {
            groups[slot].tickets.push(ticket.clone());
        }
    }

    Groups(groups)
}

/// Four fixed columns: Todo, In Progress, Done, Backlog.
pub fn group_by_status(tickets: &[Ticket]) -> Groups {
    let mut groups: Vec<Group> = Status::ALL
        .iter()
        .map(|status| Group::empty(GroupKey::Status(*status), status.as_str()))
        .collect();

    for ticket in tickets {
        if let Some(status) = ticket.status() {
            if let Some(slot) = Status::ALL.iter().position(|s| *s == status) {
                groups[slot].tickets.push(ticket.clone());
            }
        }
    }

    Groups(groups)
}

/// Five fixed columns: NoPriority, Urgent, High, Medium, Low.
pub fn group_by_priority(tickets: &[Ticket]) -> Groups {
    let mut groups: Vec<Group> = Priority::COLUMN_ORDER
        .iter()
        .map(|priority| Group::empty(GroupKey::Priority(*priority), priority.as_str()))
        .collect();

    for ticket in tickets {
        if let Some(priority) = ticket.priority() {
            if let Some(slot) = Priority::COLUMN_ORDER.iter().position(|p| *p == priority) {
                groups[slot].tickets.push(ticket.clone());
            }
        }
    }

    Groups(groups)
}

pub fn group_tickets(tickets: &[Ticket], users: &[User], mode: GroupingMode) -> Groups {
    match mode {
        GroupingMode::User => group_by_user(tickets, users),
        GroupingMode::Priority => group_by_priority(tickets),
        GroupingMode::Status => group_by_status(tickets),
    }
}
