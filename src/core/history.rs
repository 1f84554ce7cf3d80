//! Local action history
//!
//! A bounded, most-recent-first log of action outcomes, persisted as one
//! JSON array per feature. Each feature plugs in its own record type
//! through [`HistoryRecord`]; the store assigns ids and timestamps and owns
//! the capacity limit.
//!
//! Stored data is treated as untrusted: malformed elements are dropped on
//! load instead of failing the page.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use leptos::logging::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::storage::{KeyValueStore, StorageError, read_json, write_json};

/// Maximum number of entries kept per feature
pub const HISTORY_CAPACITY: usize = 10;

/// Feature-specific payload of a history entry
pub trait HistoryRecord: Serialize + DeserializeOwned + Clone {
    /// Storage key of the feature's history list
    const STORAGE_KEY: &'static str;
}

/// Result of the action a history entry records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(String),
}

impl Outcome {
    /// Build an outcome from a backend `{success, error}` envelope
    pub fn from_envelope(success: bool, error: Option<&str>) -> Self {
        if success {
            Outcome::Success
        } else {
            Outcome::Failure(
                error
                    .filter(|e| !e.is_empty())
                    .unwrap_or("Request failed")
                    .to_string(),
            )
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// One recorded action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry<R> {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub record: R,
}

impl<R> HistoryEntry<R> {
    pub fn outcome(&self) -> Outcome {
        if self.success {
            Outcome::Success
        } else {
            Outcome::Failure(self.error.clone().unwrap_or_default())
        }
    }

    /// Error text cut to `max_chars` characters, with an ellipsis when cut
    pub fn error_preview(&self, max_chars: usize) -> Option<String> {
        let error = self.error.as_deref()?;
        if error.chars().count() <= max_chars {
            return Some(error.to_string());
        }
        let cut: String = error.chars().take(max_chars).collect();
        Some(format!("{}…", cut.trim_end()))
    }

    /// Successful entries never carry an error
    fn normalize(mut self) -> Self {
        if self.success {
            self.error = None;
        }
        self
    }

    fn id_millis(&self) -> Option<i64> {
        self.id.parse().ok()
    }
}

type Listener<R> = Arc<dyn Fn(&[HistoryEntry<R>]) + Send + Sync>;

/// Bounded history list for one feature
pub struct HistoryStore<R: HistoryRecord, S> {
    storage: S,
    entries: Vec<HistoryEntry<R>>,
    last_id: i64,
    listeners: Vec<Listener<R>>,
}

impl<R: HistoryRecord, S> fmt::Debug for HistoryStore<R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryStore")
            .field("key", &R::STORAGE_KEY)
            .field("len", &self.entries.len())
            .field("last_id", &self.last_id)
            .finish()
    }
}

impl<R: HistoryRecord, S: KeyValueStore> HistoryStore<R, S> {
    /// Hydrate the store from `storage`.
    ///
    /// Missing data gives an empty list. A corrupt blob is logged and
    /// treated as empty; individual malformed elements are skipped.
    pub fn load(storage: S) -> Self {
        let entries = match read_json::<Vec<serde_json::Value>, _>(&storage, R::STORAGE_KEY) {
            Ok(Some(values)) => parse_entries(values),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Ignoring stored {}: {}", R::STORAGE_KEY, e);
                Vec::new()
            }
        };

        // Ids ahead of the clock would pin every later id above it
        let now = Utc::now().timestamp_millis();
        let last_id = entries
            .iter()
            .filter_map(HistoryEntry::id_millis)
            .filter(|id| *id <= now)
            .max()
            .unwrap_or(0);

        Self {
            storage,
            entries,
            last_id,
            listeners: Vec::new(),
        }
    }

    /// Entries, newest first
    pub fn entries(&self) -> &[HistoryEntry<R>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register a listener called with the full list after every append
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&[HistoryEntry<R>]) + Send + Sync + 'static,
    {
        self.listeners.push(Arc::new(listener));
    }

    /// Record an action outcome, stamped with the current time
    pub fn append(&mut self, record: R, outcome: Outcome) -> Result<&HistoryEntry<R>, StorageError> {
        self.append_at(record, outcome, Utc::now())
    }

    /// Record an action outcome with an explicit timestamp.
    ///
    /// The in-memory list and listeners are updated even when persisting
    /// fails; the error is returned so the caller can log it.
    pub fn append_at(
        &mut self,
        record: R,
        outcome: Outcome,
        timestamp: DateTime<Utc>,
    ) -> Result<&HistoryEntry<R>, StorageError> {
        let id = self.next_id(timestamp);
        let (success, error) = match outcome {
            Outcome::Success => (true, None),
            Outcome::Failure(reason) => (false, Some(reason)),
        };

        self.entries.insert(
            0,
            HistoryEntry {
                id: id.to_string(),
                timestamp,
                success,
                error,
                record,
            },
        );
        self.entries.truncate(HISTORY_CAPACITY);

        let persisted = write_json(&self.storage, R::STORAGE_KEY, &self.entries);
        for listener in &self.listeners {
            listener(&self.entries);
        }

        persisted.map(|_| &self.entries[0])
    }

    /// Time-based id, bumped past the previous one on collisions
    fn next_id(&mut self, timestamp: DateTime<Utc>) -> i64 {
        let id = timestamp.timestamp_millis().max(self.last_id.saturating_add(1));
        self.last_id = id;
        id
    }
}

fn parse_entries<R: HistoryRecord>(values: Vec<serde_json::Value>) -> Vec<HistoryEntry<R>> {
    values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<HistoryEntry<R>>(value) {
            Ok(entry) => Some(entry.normalize()),
            Err(e) => {
                warn!("Dropping malformed {} entry: {}", R::STORAGE_KEY, e);
                None
            }
        })
        .take(HISTORY_CAPACITY)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStorage;
    use chrono::Duration;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        text: String,
    }

    impl HistoryRecord for Note {
        const STORAGE_KEY: &'static str = "note_history";
    }

    struct ReadOnlyStorage(MemoryStorage);

    impl KeyValueStore for ReadOnlyStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write(key.to_string()))
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            Err(StorageError::Remove(key.to_string()))
        }
    }

    fn note(text: &str) -> Note {
        Note {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_load_empty() {
        let store: HistoryStore<Note, _> = HistoryStore::load(MemoryStorage::new());
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_prepends() {
        let mut store: HistoryStore<Note, _> = HistoryStore::load(MemoryStorage::new());

        store.append(note("first"), Outcome::Success).unwrap();
        store.append(note("second"), Outcome::Success).unwrap();

        let texts: Vec<_> = store.entries().iter().map(|e| e.record.text.as_str()).collect();
        assert_eq!(texts, vec!["second", "first"]);
    }

    #[test]
    fn test_capacity_is_enforced() {
        let storage = MemoryStorage::new();
        let mut store: HistoryStore<Note, _> = HistoryStore::load(storage.clone());

        for i in 0..25 {
            store.append(note(&format!("n{}", i)), Outcome::Success).unwrap();
            assert!(store.len() <= HISTORY_CAPACITY);
        }

        let reloaded: HistoryStore<Note, _> = HistoryStore::load(storage);
        assert_eq!(reloaded.len(), HISTORY_CAPACITY);
        assert_eq!(reloaded.entries()[0].record.text, "n24");
        assert_eq!(reloaded.entries()[9].record.text, "n15");
    }

    #[test]
    fn test_same_timestamp_keeps_insertion_order() {
        let mut store: HistoryStore<Note, _> = HistoryStore::load(MemoryStorage::new());
        let now = Utc::now();

        store.append_at(note("a"), Outcome::Success, now).unwrap();
        store.append_at(note("b"), Outcome::Success, now).unwrap();

        assert_eq!(store.entries()[0].record.text, "b");
        assert_ne!(store.entries()[0].id, store.entries()[1].id);
        assert_eq!(store.entries()[0].timestamp, store.entries()[1].timestamp);
    }

    #[test]
    fn test_ids_continue_after_reload() {
        let storage = MemoryStorage::new();
        let now = Utc::now();

        let mut store: HistoryStore<Note, _> = HistoryStore::load(storage.clone());
        store.append_at(note("a"), Outcome::Success, now).unwrap();
        let first_id = store.entries()[0].id.clone();

        let mut reloaded: HistoryStore<Note, _> = HistoryStore::load(storage);
        reloaded
            .append_at(note("b"), Outcome::Success, now - Duration::seconds(5))
            .unwrap();

        let second: i64 = reloaded.entries()[0].id.parse().unwrap();
        assert!(second > first_id.parse::<i64>().unwrap());
    }

    #[test]
    fn test_stored_ids_ahead_of_clock_are_ignored() {
        for stored_id in ["9223372036854775807", "99999999999999"] {
            let storage = MemoryStorage::new();
            storage
                .set(
                    Note::STORAGE_KEY,
                    &format!(
                        r#"[{{"id":"{}","timestamp":"2025-01-01T00:00:00Z","success":true,"text":"t"}}]"#,
                        stored_id
                    ),
                )
                .unwrap();

            let mut store: HistoryStore<Note, _> = HistoryStore::load(storage);
            let now = Utc::now();
            let entry = store.append_at(note("next"), Outcome::Success, now).unwrap();

            assert_eq!(entry.id, now.timestamp_millis().to_string());
            assert_eq!(store.len(), 2);
        }
    }

    #[test]
    fn test_id_bump_saturates() {
        let mut store: HistoryStore<Note, _> = HistoryStore::load(MemoryStorage::new());
        store.last_id = i64::MAX;

        let entry = store.append(note("a"), Outcome::Success).unwrap();

        assert_eq!(entry.id, i64::MAX.to_string());
    }

    #[test]
    fn test_failure_is_recorded() {
        let mut store: HistoryStore<Note, _> = HistoryStore::load(MemoryStorage::new());

        let entry = store
            .append(note("x"), Outcome::Failure("Network error".to_string()))
            .unwrap();

        assert!(!entry.success);
        assert_eq!(entry.error.as_deref(), Some("Network error"));
        assert_eq!(entry.outcome(), Outcome::Failure("Network error".to_string()));
    }

    #[test]
    fn test_round_trip_preserves_timestamps() {
        let storage = MemoryStorage::new();
        let mut store: HistoryStore<Note, _> = HistoryStore::load(storage.clone());
        store.append(note("a"), Outcome::Success).unwrap();
        store
            .append(note("b"), Outcome::Failure("boom".to_string()))
            .unwrap();

        let reloaded: HistoryStore<Note, _> = HistoryStore::load(storage);

        assert_eq!(reloaded.entries(), store.entries());
    }

    #[test]
    fn test_corrupt_blob_loads_empty() {
        let storage = MemoryStorage::new();
        storage.set(Note::STORAGE_KEY, "{{{").unwrap();

        let store: HistoryStore<Note, _> = HistoryStore::load(storage);

        assert!(store.is_empty());
    }

    #[test]
    fn test_non_array_blob_loads_empty() {
        let storage = MemoryStorage::new();
        storage.set(Note::STORAGE_KEY, r#"{"id":"1"}"#).unwrap();

        let store: HistoryStore<Note, _> = HistoryStore::load(storage);

        assert!(store.is_empty());
    }

    #[test]
    fn test_malformed_elements_are_dropped() {
        let storage = MemoryStorage::new();
        storage
            .set(
                Note::STORAGE_KEY,
                r#"[
                    {"id":"2","timestamp":"2025-01-02T10:00:00Z","success":true,"text":"kept"},
                    {"id":"1","timestamp":"not a date","success":true,"text":"bad"},
                    42,
                    {"id":"0","timestamp":"2025-01-01T10:00:00.000Z","success":false,"error":"e","text":"old"}
                ]"#,
            )
            .unwrap();

        let store: HistoryStore<Note, _> = HistoryStore::load(storage);

        let texts: Vec<_> = store.entries().iter().map(|e| e.record.text.as_str()).collect();
        assert_eq!(texts, vec!["kept", "old"]);
    }

    #[test]
    fn test_stray_error_on_success_is_discarded() {
        let storage = MemoryStorage::new();
        storage
            .set(
                Note::STORAGE_KEY,
                r#"[{"id":"1","timestamp":"2025-01-01T00:00:00Z","success":true,"error":"stray","text":"t"}]"#,
            )
            .unwrap();

        let store: HistoryStore<Note, _> = HistoryStore::load(storage);

        assert_eq!(store.entries()[0].error, None);
    }

    #[test]
    fn test_oversized_stored_list_is_truncated() {
        let storage = MemoryStorage::new();
        let items: Vec<String> = (0..15)
            .map(|i| {
                format!(
                    r#"{{"id":"{}","timestamp":"2025-01-01T00:00:00Z","success":true,"text":"t{}"}}"#,
                    100 - i,
                    i
                )
            })
            .collect();
        storage
            .set(Note::STORAGE_KEY, &format!("[{}]", items.join(",")))
            .unwrap();

        let store: HistoryStore<Note, _> = HistoryStore::load(storage);

        assert_eq!(store.len(), HISTORY_CAPACITY);
        assert_eq!(store.entries()[0].record.text, "t0");
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let mut store: HistoryStore<Note, _> =
            HistoryStore::load(ReadOnlyStorage(MemoryStorage::new()));

        let result = store.append(note("a"), Outcome::Success);

        assert!(matches!(result, Err(StorageError::Write(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_listeners_observe_appends() {
        let seen = Arc::new(Mutex::new(Vec::<usize>::new()));
        let mut store: HistoryStore<Note, _> = HistoryStore::load(MemoryStorage::new());
        {
            let seen = seen.clone();
            store.subscribe(move |entries| seen.lock().unwrap().push(entries.len()));
        }

        store.append(note("a"), Outcome::Success).unwrap();
        store.append(note("b"), Outcome::Success).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_outcome_from_envelope() {
        assert_eq!(Outcome::from_envelope(true, Some("ignored")), Outcome::Success);
        assert_eq!(
            Outcome::from_envelope(false, Some("Quota exceeded")),
            Outcome::Failure("Quota exceeded".to_string())
        );
        assert_eq!(
            Outcome::from_envelope(false, None),
            Outcome::Failure("Request failed".to_string())
        );
    }

    #[test]
    fn test_error_preview() {
        let mut store: HistoryStore<Note, _> = HistoryStore::load(MemoryStorage::new());
        let entry = store
            .append(note("a"), Outcome::Failure("connection refused by host".to_string()))
            .unwrap()
            .clone();

        assert_eq!(entry.error_preview(100).as_deref(), Some("connection refused by host"));
        assert_eq!(entry.error_preview(10).as_deref(), Some("connection…"));
    }
}
