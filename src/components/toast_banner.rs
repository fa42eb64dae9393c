//! Toast Banner Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ToastBanner() -> impl IntoView {
    let store = use_app_store();
    let message = move || store.toast().read().message.clone();
    let visible = move || store.toast().read().is_visible();

    view! {
        <div
            id="toast"
            class="toast"
            class:show=visible
            role="status"
            aria-live="polite"
        >
            {move || message().unwrap_or_default()}
        </div>
    }
}
