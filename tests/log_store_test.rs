// tests/log_store_test.rs
//! Retention-cap behavior of the audit log store.

use std::sync::Arc;

use procheck::domain::model::log::{LogSeverity, LogType, NewLogEntry};
use procheck::repository::kv::InMemoryBackend;
use procheck::repository::log_store::{LogStore, LOG_CAPACITY};

fn entry(n: usize) -> NewLogEntry {
    NewLogEntry::simple(LogType::System, LogSeverity::Info, "System", format!("event {n}"))
}

#[tokio::test]
async fn the_cap_drops_the_oldest_entry() {
    let store = LogStore::open(Arc::new(InMemoryBackend::new())).await.unwrap();

    for n in 1..=(LOG_CAPACITY + 1) {
        store.append(entry(n)).await.unwrap();
    }

    let all = store.get_all().await;
    assert_eq!(all.len(), LOG_CAPACITY);

    // The 1001st append sits at index 0; the very first entry is gone.
    assert_eq!(all[0].message, format!("event {}", LOG_CAPACITY + 1));
    assert!(all.iter().all(|e| e.message != "event 1"));
    assert_eq!(all.last().unwrap().message, "event 2");
}

#[tokio::test]
async fn entries_stay_newest_first_across_reopen() {
    let backend: Arc<InMemoryBackend> = Arc::new(InMemoryBackend::new());

    let store = LogStore::open(backend.clone()).await.unwrap();
    for n in 1..=5 {
        store.append(entry(n)).await.unwrap();
    }

    let reopened = LogStore::open(backend).await.unwrap();
    let all = reopened.get_all().await;
    let messages: Vec<&str> = all.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, ["event 5", "event 4", "event 3", "event 2", "event 1"]);

    // Timestamps are non-increasing going down the sequence.
    assert!(all.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
}
