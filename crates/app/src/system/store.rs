//! Sink for submitted forms.
//!
//! The dashboard runs on fixture data only, so a submit does not mutate any
//! registry. Accepted payloads are handed to a [`Store`] and the services
//! stay agnostic of what happens next.

use serde_json::Value;
use std::sync::Mutex;

/// Receives validated form payloads, keyed by aggregate name
/// ("client", "mix_formula", ...).
pub trait Store {
    fn save(&self, aggregate: &str, payload: Value) -> anyhow::Result<()>;
}

/// Default sink: logs the accepted payload and drops it.
pub struct NullStore;

impl Store for NullStore {
    fn save(&self, aggregate: &str, payload: Value) -> anyhow::Result<()> {
        tracing::info!(aggregate, %payload, "accepted form submission");
        Ok(())
    }
}

/// A saved payload, as seen by [`RecordingStore`].
#[derive(Debug, Clone)]
pub struct SavedRecord {
    pub aggregate: String,
    pub payload: Value,
}

/// Test double that keeps every accepted payload.
#[derive(Default)]
pub struct RecordingStore {
    records: Mutex<Vec<SavedRecord>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<SavedRecord> {
        self.records.lock().expect("store mutex poisoned").clone()
    }
}

impl Store for RecordingStore {
    fn save(&self, aggregate: &str, payload: Value) -> anyhow::Result<()> {
        self.records
            .lock()
            .expect("store mutex poisoned")
            .push(SavedRecord {
                aggregate: aggregate.to_string(),
                payload,
            });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn recording_store_keeps_payloads_in_order() {
        let store = RecordingStore::new();
        store.save("client", json!({"nome": "A"})).unwrap();
        store.save("supplier", json!({"razaoSocial": "B"})).unwrap();

        let records = store.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].aggregate, "client");
        assert_eq!(records[1].aggregate, "supplier");
    }
}
