//! Kanban Board App
//!
//! Root component: loads preferences, fetches the board once and renders
//! one column per group.

use board_core::{BoardView, Preferences};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use tracing::{debug, error};

use crate::api;
use crate::components::{BoardColumn, DisplayMenu};
use crate::config::BoardConfig;
use crate::context::BoardContext;
use crate::storage::LocalStorage;
use crate::store::{BoardState, BoardStateStoreFields, LoadState};

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    // State
    let store = Store::new(BoardState::new(Preferences::load(&LocalStorage)));
    let endpoint = config.endpoint.clone();

    // Provide context to all children
    provide_context(BoardContext::new(store, config));

    // Fetch tickets and users on mount
    Effect::new(move |_| {
        let endpoint = endpoint.clone();
        spawn_local(async move {
            let result = api::fetch_board(&endpoint).await;
            if let Err(err) = &result {
                error!(endpoint = %endpoint, error = %err, "failed to load board");
            }
            let applied = store.try_update(|state| match result {
                Ok(data) => state.apply_board(data),
                Err(err) => state.fail(err.to_string()),
            });
            if applied.is_none() {
                debug!("board unmounted before fetch completed");
            }
        });
    });

    let board = Memo::new(move |_| store.with(|state| state.view()));

    view! {
        <div class="board-page">
            {move || match store.load().get() {
                LoadState::Loading => view! {
                    <p class="board-loading">"Loading tasks..."</p>
                }.into_any(),
                load => {
                    let alert = match load {
                        LoadState::Failed(message) => Some(view! {
                            <div class="board-error" role="alert">
                                "Could not load the board: " {message}
                            </div>
                        }),
                        _ => None,
                    };
                    view! {
                        <header class="board-toolbar">
                            <DisplayMenu />
                        </header>
                        {alert}
                        <BoardColumns board=board />
                    }.into_any()
                }
            }}
        </div>
    }
}

/// Row of columns in grouping order
#[component]
fn BoardColumns(board: Memo<BoardView>) -> impl IntoView {
    view! {
        <main class="board-columns">
            {move || board
                .get()
                .columns
                .into_iter()
                .map(|column| view! { <BoardColumn column=column /> })
                .collect_view()}
        </main>
    }
}
