//! To-Do App
//!
//! Root component: hydrates tasks from local storage and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Counters, FilterBar, NewTaskForm, TaskListView, ToastBanner};
use crate::config::TodoConfig;
use crate::context::AppContext;
use crate::persistence::{self, BrowserStorage};
use crate::store::AppState;
use crate::task_list::TaskList;

#[component]
pub fn App(config: TodoConfig) -> impl IntoView {
    let tasks = match BrowserStorage::open() {
        Ok(storage) => persistence::load_or_empty(&storage, &config.storage_key),
        Err(e) => {
            log::warn!("{}, tasks will not persist", e);
            TaskList::new()
        }
    };
    log::info!("loaded {} tasks", tasks.len());

    let store = Store::new(AppState::new(tasks));
    provide_context(store);
    provide_context(AppContext::new(store, config));

    view! {
        <main class="todo-app">
            <h1>"To-Do"</h1>
            <NewTaskForm />
            <FilterBar />
            <TaskListView />
            <Counters />
            <ToastBanner />
        </main>
    }
}
