//! Application Context
//!
//! Shared handles provided via Leptos Context API. Every page event that
//! mutates tasks goes through `AppContext`, which saves and notifies afterwards.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::TodoConfig;
use crate::error::ValidationError;
use crate::filter::Filter;
use crate::models::TaskId;
use crate::persistence::{self, BrowserStorage};
use crate::router::{self, Action, Dispatched};
use crate::store::{AppStateStoreFields, AppStore};

/// Run `action` against the store's task list
pub fn apply(store: AppStore, action: Action, config: &TodoConfig) -> Result<Dispatched, ValidationError> {
    let field = store.tasks();
    let mut tasks = field.write();
    router::dispatch(&mut tasks, action, config)
}

#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    config: StoredValue<TodoConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: TodoConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> TodoConfig {
        self.config.get_value()
    }

    /// Validate and append a task from the add form
    pub fn add(&self, text: String) -> Result<(), ValidationError> {
        self.run(Action::Add(text))
    }

    pub fn toggle(&self, id: TaskId, done: bool) {
        if let Err(e) = self.run(Action::Toggle { id, done }) {
            log::error!("toggle rejected: {}", e);
        }
    }

    pub fn delete(&self, id: TaskId) {
        if let Err(e) = self.run(Action::Delete(id)) {
            log::error!("delete rejected: {}", e);
        }
    }

    pub fn set_filter(&self, filter: Filter) {
        log::debug!("filter set to {}", filter);
        *self.store.filter().write() = filter;
    }

    fn run(&self, action: Action) -> Result<(), ValidationError> {
        let config = self.config();
        let outcome = apply(self.store, action, &config)?;

        if outcome.changed {
            self.persist(&config);
        }
        if let Some(notice) = outcome.notice {
            self.notify(notice.message(), config.toast_duration_ms);
        }
        Ok(())
    }

    fn persist(&self, config: &TodoConfig) {
        match BrowserStorage::open() {
            Ok(storage) => {
                let field = self.store.tasks();
                let tasks = field.read();
                persistence::save_best_effort(&storage, &config.storage_key, &tasks);
            }
            Err(e) => log::warn!("save skipped: {}", e),
        }
    }

    /// Show a toast and schedule its hide
    fn notify(&self, message: &str, duration_ms: u32) {
        let generation = self.store.toast().write().show(message);
        let store = self.store;
        Timeout::new(duration_ms, move || {
            store.toast().write().expire(generation);
        })
        .forget();
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use reactive_stores::Store;

    use crate::render;
    use crate::store::AppState;

    fn setup_store() -> AppStore {
        let owner = Owner::new();
        owner.set();
        // keep the owner alive for the whole test so the store isn't disposed
        std::mem::forget(owner);
        Store::new(AppState::default())
    }

    fn hidden_rows(store: AppStore) -> usize {
        let filter = store.filter().get();
        let field = store.tasks();
        let tasks = field.read();
        let hidden = render::rows(&tasks)
            .iter()
            .filter(|row| render::row_hidden(filter, row.done))
            .count();
        hidden
    }

    fn first_id(store: AppStore) -> TaskId {
        let field = store.tasks();
        let tasks = field.read();
        let id = tasks.iter().next().map(|t| t.id).unwrap();
        id
    }

    #[test]
    fn test_apply_mutates_store() {
        let store = setup_store();
        let config = TodoConfig::default();

        let outcome = apply(store, Action::Add("Buy milk".into()), &config).unwrap();
        assert!(outcome.changed);
        assert_eq!(store.tasks().read().len(), 1);
    }

    #[test]
    fn test_rejected_add_leaves_store_empty() {
        let store = setup_store();
        let config = TodoConfig::default();

        let err = apply(store, Action::Add("  ".into()), &config).unwrap_err();
        assert_eq!(err, ValidationError::Empty);
        assert!(store.tasks().read().is_empty());
    }

    #[test]
    fn test_buy_milk_through_store() {
        let store = setup_store();
        let config = TodoConfig::default();

        apply(store, Action::Add("Buy milk".into()), &config).unwrap();
        assert_eq!(render::placeholder(&store.tasks().read()), None);
        let counts = store.tasks().read().counts();
        assert_eq!((counts.total, counts.done), (1, 0));

        let id = first_id(store);
        apply(store, Action::Toggle { id, done: true }, &config).unwrap();
        assert_eq!(store.tasks().read().counts().done, 1);

        *store.filter().write() = Filter::Active;
        assert_eq!(hidden_rows(store), 1);
        *store.filter().write() = Filter::All;
        assert_eq!(hidden_rows(store), 0);

        apply(store, Action::Delete(id), &config).unwrap();
        assert_eq!(render::placeholder(&store.tasks().read()), Some("No tasks yet."));
        let counts = store.tasks().read().counts();
        assert_eq!((counts.total, counts.done), (0, 0));
    }

    #[test]
    fn test_filter_kept_across_mutations() {
        let store = setup_store();
        let config = TodoConfig::default();
        *store.filter().write() = Filter::Active;

        apply(store, Action::Add("Walk dog".into()), &config).unwrap();
        assert_eq!(hidden_rows(store), 0);

        let id = first_id(store);
        apply(store, Action::Toggle { id, done: true }, &config).unwrap();
        assert_eq!(store.filter().get(), Filter::Active);
        assert_eq!(hidden_rows(store), 1);
    }
}
