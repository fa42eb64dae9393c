//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::Filter;
use crate::task_list::TaskList;
use crate::toast::Toast;

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Ordered tasks, hydrated from local storage at startup
    pub tasks: TaskList,
    /// Current filter, reapplied to every redraw
    pub filter: Filter,
    /// Transient notification
    pub toast: Toast,
}

impl AppState {
    pub fn new(tasks: TaskList) -> Self {
        Self {
            tasks,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
