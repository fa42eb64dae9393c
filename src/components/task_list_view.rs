//! Task List View Component
//!
//! Renders every task as a row, or a single placeholder row when empty.
//! Rows are keyed by (id, done, text) so a toggled task gets a fresh row.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::render;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskListView() -> impl IntoView {
    let store = use_app_store();

    let rows = move || render::rows(&store.tasks().read());
    let placeholder = move || render::placeholder(&store.tasks().read());

    view! {
        <ul id="todo-list" class="todo-list">
            <Show
                when=move || placeholder().is_none()
                fallback=move || view! { <li class="todo-item placeholder">{placeholder()}</li> }
            >
                <For
                    each=rows
                    key=|task| (task.id, task.done, task.text.clone())
                    children=move |task| view! { <TaskRow task=task /> }
                />
            </Show>
        </ul>
    }
}
