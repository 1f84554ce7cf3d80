//! Email composer history records

use serde::{Deserialize, Serialize};

use super::history::HistoryRecord;

/// A sent (or attempted) email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
    pub to: String,
    pub subject: String,
}

impl EmailRecord {
    pub fn new(to: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
        }
    }
}

impl HistoryRecord for EmailRecord {
    const STORAGE_KEY: &'static str = "email_history";
}
