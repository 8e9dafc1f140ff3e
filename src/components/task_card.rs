//! Task Card Component

use board_core::Ticket;
use leptos::prelude::*;

use crate::context::use_board_context;

/// One ticket: priority and status icons (when recognized), id, title,
/// type and tags
#[component]
pub fn TaskCard(ticket: Ticket) -> impl IntoView {
    let ctx = use_board_context();

    let priority_icon = ticket.priority().map(|priority| view! {
        <img class="card-icon" src=ctx.priority_icon(priority) alt=priority.label() title=priority.label() />
    });
    let status_icon = ticket.status().map(|status| view! {
        <img class="card-icon" src=ctx.status_icon(status) alt=status.as_str() title=status.as_str() />
    });
    let kind = ticket.kind.map(|kind| view! { <span class="card-type">{kind}</span> });
    let tags = ticket
        .tag
        .into_iter()
        .map(|tag| view! { <span class="card-tag">{tag}</span> })
        .collect_view();

    view! {
        <article class="task-card">
            <div class="card-icons">
                {priority_icon}
                {status_icon}
            </div>
            <div class="card-body">
                <strong class="card-id">{ticket.id.to_string()}</strong>
                <div class="card-title">{ticket.title}</div>
                {kind}
                <div class="card-tags">{tags}</div>
            </div>
        </article>
    }
}
