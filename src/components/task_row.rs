//! Task Row Component
//!
//! One rendered task: checkbox, label and delete control.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Task;
use crate::render;
use crate::store::AppStateStoreFields;

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let id = task.id;
    let done = task.done;
    let hidden = move || render::row_hidden(store.filter().get(), done);

    view! {
        <li
            class="todo-item"
            class:completed=done
            class:hidden=hidden
        >
            <input
                class="todo-toggle"
                type="checkbox"
                prop:checked=done
                on:change=move |ev| ctx.toggle(id, event_target_checked(&ev))
            />
            <span class="todo-label">{task.text}</span>
            <button
                class="todo-delete"
                title="Delete"
                on:click=move |_| ctx.delete(id)
            >
                "×"
            </button>
        </li>
    }
}
