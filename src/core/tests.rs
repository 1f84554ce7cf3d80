#[cfg(test)]
mod tests {
    use crate::core::{
        EmailRecord, HISTORY_CAPACITY, HistoryStore, LOGIN_PATH, MemoryStorage, Outcome,
        SessionGuard, SessionPolicy,
    };
    use std::cell::Cell;

    fn email_store(storage: &MemoryStorage) -> HistoryStore<EmailRecord, MemoryStorage> {
        HistoryStore::load(storage.clone())
    }

    #[test]
    fn test_eleven_emails_evict_the_oldest() {
        let storage = MemoryStorage::new();
        let mut history = email_store(&storage);

        for i in 0..=10 {
            history
                .append(EmailRecord::new("a@x.com", format!("S{}", i)), Outcome::Success)
                .unwrap();
        }

        let subjects: Vec<_> = history
            .entries()
            .iter()
            .map(|e| e.record.subject.clone())
            .collect();
        let expected: Vec<_> = (1..=10).rev().map(|i| format!("S{}", i)).collect();

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(subjects, expected);
    }

    #[test]
    fn test_failed_email_survives_reload() {
        let storage = MemoryStorage::new();
        let mut history = email_store(&storage);
        history
            .append(EmailRecord::new("a@x.com", "Hi"), Outcome::Success)
            .unwrap();
        history
            .append(
                EmailRecord::new("a@x.com", "Hi again"),
                Outcome::Failure("Network error".to_string()),
            )
            .unwrap();

        let reloaded = email_store(&storage);
        let first = &reloaded.entries()[0];

        assert!(!first.success);
        assert_eq!(first.error.as_deref(), Some("Network error"));
        assert_eq!(first, &history.entries()[0]);
    }

    #[test]
    fn test_histories_are_feature_scoped() {
        use crate::core::{DocumentRecord, OutputFormat};

        let storage = MemoryStorage::new();
        let mut emails = email_store(&storage);
        let mut documents: HistoryStore<DocumentRecord, _> = HistoryStore::load(storage.clone());

        emails
            .append(EmailRecord::new("a@x.com", "Hi"), Outcome::Success)
            .unwrap();
        documents
            .append(
                DocumentRecord {
                    topic: "Rust".to_string(),
                    urls: Vec::new(),
                    output_format: OutputFormat::Markdown,
                    file_path: None,
                },
                Outcome::Failure("Timeout".to_string()),
            )
            .unwrap();

        assert_eq!(email_store(&storage).len(), 1);
        assert_eq!(HistoryStore::<DocumentRecord, _>::load(storage.clone()).len(), 1);
        assert_eq!(storage.len(), 2);
    }

    #[test]
    fn test_login_then_reload_then_logout() {
        let storage = MemoryStorage::new();
        let redirects = Cell::new(0);
        let navigate = |path: &str| {
            assert_eq!(path, LOGIN_PATH);
            redirects.set(redirects.get() + 1);
        };

        let mut guard = SessionGuard::new(storage.clone(), SessionPolicy::never_expires());
        guard.check_auth();
        assert!(!guard.require_auth(&navigate));
        assert_eq!(redirects.get(), 1);

        guard.login("tok", "user_1").unwrap();

        let mut reloaded = SessionGuard::new(storage.clone(), SessionPolicy::never_expires());
        assert!(reloaded.require_auth(&navigate));
        reloaded.check_auth();
        assert!(reloaded.require_auth(&navigate));
        assert_eq!(reloaded.session().map(|s| s.user_id.as_str()), Some("user_1"));
        assert_eq!(redirects.get(), 1);

        reloaded.logout(&navigate);
        assert_eq!(redirects.get(), 2);
        assert!(storage.is_empty());

        let mut after_logout = SessionGuard::new(storage, SessionPolicy::never_expires());
        after_logout.check_auth();
        assert!(!after_logout.is_authenticated());
        assert!(!after_logout.is_loading());
    }
}
