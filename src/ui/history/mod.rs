//! Action history UI: shared context and per-feature panels

mod context;
mod document_history;
mod download;
mod email_history;

pub use context::{HistoryContext, provide_history_context, use_history_context};
pub use document_history::DocumentHistory;
pub use email_history::EmailHistory;
