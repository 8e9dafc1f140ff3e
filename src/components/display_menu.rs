//! Display Menu Component
//!
//! Toolbar button revealing the grouping and ordering selectors.

use board_core::{GroupingMode, OrderingMode};
use leptos::prelude::*;
use tracing::warn;

use crate::context::use_board_context;
use crate::store::BoardStateStoreFields;

#[component]
pub fn DisplayMenu() -> impl IntoView {
    let ctx = use_board_context();
    let store = ctx.store;
    let (open, set_open) = signal(false);

    let on_grouping = move |ev: web_sys::Event| match event_target_value(&ev).parse::<GroupingMode>() {
        Ok(mode) => ctx.set_grouping(mode),
        Err(err) => warn!(error = %err, "ignoring grouping selection"),
    };

    let on_ordering = move |ev: web_sys::Event| match event_target_value(&ev).parse::<OrderingMode>() {
        Ok(mode) => ctx.set_ordering(mode),
        Err(err) => warn!(error = %err, "ignoring ordering selection"),
    };

    view! {
        <div class="display-menu">
            <button
                type="button"
                class="display-toggle"
                on:click=move |_| set_open.update(|v| *v = !*v)
            >
                <span class="display-icon">"☰"</span>
                <span class="display-label">"Display"</span>
                <span class="display-caret">{move || if open.get() { "▲" } else { "▼" }}</span>
            </button>

            <Show when=move || open.get()>
                <div class="display-dropdown">
                    <label class="display-row">
                        <span class="display-row-label">"Grouping"</span>
                        <select on:change=on_grouping>
                            {GroupingMode::ALL.into_iter().map(|mode| view! {
                                <option
                                    value=mode.as_str()
                                    prop:selected=move || store.grouping().get() == mode
                                >
                                    {mode.label()}
                                </option>
                            }).collect_view()}
                        </select>
                    </label>
                    <label class="display-row">
                        <span class="display-row-label">"Ordering"</span>
                        <select on:change=on_ordering>
                            {OrderingMode::ALL.into_iter().map(|mode| view! {
                                <option
                                    value=mode.as_str()
                                    prop:selected=move || store.ordering().get() == mode
                                >
                                    {mode.label()}
                                </option>
                            }).collect_view()}
                        </select>
                    </label>
                </div>
            </Show>
        </div>
    }
}
