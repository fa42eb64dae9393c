//! Filter Bar Component
//!
//! Filter buttons (`data-filter` = all|active|done) and the print button.
//! Clicks are handled once on the bar and resolved through `data-filter`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::filter::{Filter, FILTERS};
use crate::store::AppStateStoreFields;

/// Read the `data-filter` value of the clicked button, if any
fn clicked_filter(ev: &web_sys::MouseEvent) -> Option<String> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let button = target.closest("[data-filter]").ok()??;
    button.get_attribute("data-filter")
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(raw) = clicked_filter(&ev) else { return };
        match raw.parse::<Filter>() {
            Ok(filter) => ctx.set_filter(filter),
            Err(e) => log::warn!("unknown filter button: {}", e),
        }
    };

    let print = move |_| {
        let result = web_sys::window().map(|w| w.print());
        if let Some(Err(e)) = result {
            log::error!("print failed: {:?}", e);
        }
    };

    view! {
        <div id="filter-bar" class="filter-bar" role="group" on:click=on_click>
            {FILTERS.iter().map(|(filter, label)| {
                let filter = *filter;
                let is_active = move || store.filter().get() == filter;
                view! {
                    <button
                        type="button"
                        class="filter-btn"
                        class:active=is_active
                        aria-pressed=move || if is_active() { "true" } else { "false" }
                        data-filter=filter.as_str()
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
            <button id="print-btn" type="button" class="print-btn" on:click=print>"Print"</button>
        </div>
    }
}
