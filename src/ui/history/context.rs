//! History context
//!
//! A page provides one [`HistoryContext`] per feature. The submit handler
//! appends to it and the history panel renders its `entries` signal, so the
//! form never needs a handle on the panel.

use leptos::logging::warn;
use leptos::prelude::*;

use crate::core::{BrowserStorage, HistoryEntry, HistoryRecord, HistoryStore, Outcome};

type Store<R> = HistoryStore<R, BrowserStorage>;

/// Reactive history for one feature
pub struct HistoryContext<R>
where
    R: HistoryRecord + Send + Sync + 'static,
{
    /// Entries, newest first
    pub entries: RwSignal<Vec<HistoryEntry<R>>>,
    store: StoredValue<Option<Store<R>>>,
}

impl<R> Clone for HistoryContext<R>
where
    R: HistoryRecord + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for HistoryContext<R> where R: HistoryRecord + Send + Sync + 'static {}

impl<R> HistoryContext<R>
where
    R: HistoryRecord + Send + Sync + 'static,
{
    /// Load the stored list, unless already loaded
    pub fn hydrate(&self) {
        let entries = self.entries;
        self.store.update_value(|slot| {
            if slot.is_none() {
                *slot = Some(open_store(entries));
            }
        });
    }

    /// Record the outcome of a submitted action
    pub fn append(&self, record: R, outcome: Outcome) {
        let entries = self.entries;
        self.store.update_value(|slot| {
            let store = slot.get_or_insert_with(|| open_store(entries));
            if let Err(e) = store.append(record, outcome) {
                warn!("Failed to persist {}: {}", R::STORAGE_KEY, e);
            }
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.with(Vec::is_empty)
    }
}

fn open_store<R>(entries: RwSignal<Vec<HistoryEntry<R>>>) -> Store<R>
where
    R: HistoryRecord + Send + Sync + 'static,
{
    let mut store = HistoryStore::load(BrowserStorage);
    entries.set(store.entries().to_vec());
    store.subscribe(move |current| entries.set(current.to_vec()));
    store
}

/// Provide a history context for record type `R`
pub fn provide_history_context<R>() -> HistoryContext<R>
where
    R: HistoryRecord + Send + Sync + 'static,
{
    let ctx = HistoryContext {
        entries: RwSignal::new(Vec::new()),
        store: StoredValue::new(None),
    };

    // Storage is only readable after hydration
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            ctx.hydrate();
        });
    }

    provide_context(ctx);
    ctx
}

/// Get the history context for record type `R`
pub fn use_history_context<R>() -> HistoryContext<R>
where
    R: HistoryRecord + Send + Sync + 'static,
{
    expect_context::<HistoryContext<R>>()
}
