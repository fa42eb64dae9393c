//! New Task Form Component
//!
//! Text input with live validation and an Add button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::validation::{inline_error, validate_task_text};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let min_chars = ctx.config().min_task_chars;

    let (new_text, set_new_text) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let is_valid = move || validate_task_text(&new_text.get(), min_chars).is_ok();

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_error.set(inline_error(&value, min_chars));
        set_new_text.set(value);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctx.add(new_text.get()) {
            Ok(()) => {
                set_new_text.set(String::new());
                set_error.set(None);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <form id="add-form" class="new-task-form" on:submit=on_submit>
            <div class="new-task-row">
                <input
                    id="task-input"
                    type="text"
                    placeholder="What needs doing?"
                    autocomplete="off"
                    aria-describedby="task-error"
                    aria-invalid=move || if error.get().is_some() { "true" } else { "false" }
                    prop:value=move || new_text.get()
                    on:input=on_input
                />
                <button id="add-btn" type="submit" disabled=move || !is_valid()>"Add"</button>
            </div>
            <p id="task-error" class="task-error" role="alert">
                {move || error.get().unwrap_or_default()}
            </p>
        </form>
    }
}
