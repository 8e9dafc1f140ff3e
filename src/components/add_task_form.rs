//! Add Task Form Component
//!
//! Inline form under a column header for client-only tasks.

use board_core::GroupKey;
use leptos::prelude::*;

use crate::context::use_board_context;

/// Form adding a task to `column`; calls `on_added` after a successful add
#[component]
pub fn AddTaskForm(
    column: GroupKey,
    on_added: impl Fn() + Copy + 'static,
) -> impl IntoView {
    let ctx = use_board_context();
    let (title, set_title) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add_ticket(&column, &title.get()) {
            set_title.set(String::new());
            on_added();
        }
    };

    view! {
        <form class="add-task-form" on:submit=submit>
            <input
                type="text"
                placeholder="Task Title"
                required=true
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add Task"</button>
        </form>
    }
}
