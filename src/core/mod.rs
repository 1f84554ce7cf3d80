//! Core client logic: session guard, action history and backend client

pub mod api;
pub mod config;
pub mod document;
pub mod email;
pub mod history;
pub mod session;
pub mod storage;
#[cfg(test)]
mod tests;

pub use api::{ApiClient, ApiError, Envelope};
pub use config::ClientConfig;
pub use document::{DocumentRecord, OutputFormat};
pub use email::EmailRecord;
pub use history::{HISTORY_CAPACITY, HistoryEntry, HistoryRecord, HistoryStore, Outcome};
pub use session::{AuthPhase, LOGIN_PATH, Navigator, Session, SessionGuard, SessionPolicy};
pub use storage::{BrowserStorage, KeyValueStore, MemoryStorage, StorageError};
