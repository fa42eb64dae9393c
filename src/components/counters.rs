//! Counters Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Done and total counts, recomputed from the task list
#[component]
pub fn Counters() -> impl IntoView {
    let store = use_app_store();
    let counts = Memo::new(move |_| store.tasks().read().counts());

    view! {
        <p class="counters">
            <span id="counter">{move || counts.get().done}</span>
            " of "
            <span id="total">{move || counts.get().total}</span>
            " done"
        </p>
    }
}
