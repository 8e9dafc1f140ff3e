//! Shared fixtures for unit tests.

use proptest::prelude::*;

use crate::models::{Ticket, TicketId, User};

pub fn make_ticket(id: u32, status: &str, priority: i64, user_id: &str) -> Ticket {
    Ticket {
        id: TicketId::new(id.to_string()),
        title: format!("Ticket {}", id),
        status: status.to_string(),
        priority,
        user_id: user_id.to_string(),
        kind: None,
        tag: Vec::new(),
    }
}

pub fn titled(id: u32, title: &str, priority: i64) -> Ticket {
    Ticket {
        title: title.to_string(),
        ..make_ticket(id, "Todo", priority, "u1")
    }
}

pub fn make_users(names: &[(&str, &str)]) -> Vec<User> {
    names.iter().map(|(id, name)| User::new(*id, *name)).collect()
}

/// Tickets with statuses, priorities and owners drawn from both the known
/// vocabulary and a few unrecognized values.
pub fn arb_tickets() -> impl Strategy<Value = Vec<Ticket>> {
    let status = prop::sample::select(vec!["Todo", "In Progress", "Done", "Backlog", "Blocked", ""]);
    let owner = prop::sample::select(vec!["u1", "u2", "u3", "ghost"]);
    prop::collection::vec((status, -2i64..8, owner, "[a-zA-Z ]{0,12}"), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (status, priority, owner, title))| Ticket {
                title,
                ..make_ticket(i as u32 + 1, status, priority, owner)
            })
            .collect()
    })
}
