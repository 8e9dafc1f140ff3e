//! Board Column Component
//!
//! Header with avatar or icon, add-task toggle and the column's cards.

use board_core::{Group, GroupKey};
use leptos::prelude::*;

use crate::components::{AddTaskForm, TaskCard};
use crate::context::use_board_context;

#[component]
pub fn BoardColumn(column: Group) -> impl IntoView {
    let ctx = use_board_context();
    let (show_form, set_show_form) = signal(false);

    let Group { key, title, image, available, tickets } = column;
    let count = tickets.len();

    let header_icon = match &key {
        GroupKey::User(_) => image.map(|file| {
            let presence = if available { "presence online" } else { "presence" };
            view! {
                <span class="column-avatar">
                    <img src=ctx.asset_url(&file) alt="User" />
                    <span class=presence></span>
                </span>
            }
            .into_any()
        }),
        GroupKey::Status(status) => Some(
            view! { <img class="column-icon" src=ctx.status_icon(*status) alt=status.as_str() /> }.into_any(),
        ),
        GroupKey::Priority(priority) => Some(
            view! { <img class="column-icon" src=ctx.priority_icon(*priority) alt=priority.label() /> }.into_any(),
        ),
    };

    let cards = if tickets.is_empty() {
        view! { <p class="column-empty">"No tasks available"</p> }.into_any()
    } else {
        tickets
            .into_iter()
            .map(|ticket| view! { <TaskCard ticket=ticket /> })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="board-column">
            <h3 class="column-header">
                {header_icon}
                <span class="column-title">{title}</span>
                <span class="column-count">{count}</span>
                <button
                    type="button"
                    class="column-add"
                    title="Add task"
                    on:click=move |_| set_show_form.update(|v| *v = !*v)
                >
                    "+"
                </button>
                <span class="column-menu">"⋯"</span>
            </h3>

            <Show when=move || show_form.get()>
                <AddTaskForm column=key.clone() on_added=move || set_show_form.set(false) />
            </Show>

            <div class="column-cards">{cards}</div>
        </section>
    }
}
