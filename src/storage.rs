use futures::FutureExt;
use futures::future::{self, BoxFuture};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Identifies one widget instance. Persisted records are keyed by this id,
/// and lifecycle notifications to the host carry it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(Uuid);

impl WidgetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The raw persisted record for one widget.
///
/// Both fields are kept as the unvalidated strings the user submitted;
/// parsing and default substitution happen at read time, so a malformed
/// stored value is tolerated rather than rejected on write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty: Option<String>,
}

impl StoredConfig {
    pub fn new(size: impl Into<String>, empty: impl Into<String>) -> Self {
        Self {
            size: Some(size.into()),
            empty: Some(empty.into()),
        }
    }
}

/// Result of one asynchronous load. `Failed` covers both transport errors
/// and a record that could not be decoded; the caller resolves to defaults
/// either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(StoredConfig),
    Failed,
}

/// The persistence collaborator.
///
/// Each returned future resolves exactly once. `save` reports success as a
/// plain bool because the controller never inspects the failure beyond
/// logging it.
pub trait ConfigStore {
    fn load(&self, id: WidgetId) -> BoxFuture<'_, LoadOutcome>;
    fn save(&self, id: WidgetId, record: StoredConfig) -> BoxFuture<'_, bool>;
}

impl<T: ConfigStore + ?Sized> ConfigStore for &T {
    fn load(&self, id: WidgetId) -> BoxFuture<'_, LoadOutcome> {
        (**self).load(id)
    }

    fn save(&self, id: WidgetId, record: StoredConfig) -> BoxFuture<'_, bool> {
        (**self).save(id, record)
    }
}

/// A `ConfigStore` backed by an in-process map of JSON documents.
///
/// Documents are stored serialized, the way a real widget service would hold
/// them, so a seeded malformed document exercises the same read-time
/// tolerance as a remote store returning garbage.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: Mutex<HashMap<WidgetId, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw JSON document for `id`, replacing any existing one.
    pub fn insert_document(&self, id: WidgetId, document: impl Into<String>) {
        self.documents.lock().insert(id, document.into());
    }

    /// Returns the raw stored document for `id`, if any.
    pub fn document(&self, id: WidgetId) -> Option<String> {
        self.documents.lock().get(&id).cloned()
    }
}

impl ConfigStore for InMemoryStore {
    fn load(&self, id: WidgetId) -> BoxFuture<'_, LoadOutcome> {
        let outcome = match self.documents.lock().get(&id) {
            Some(document) => match serde_json::from_str::<StoredConfig>(document) {
                Ok(record) => LoadOutcome::Loaded(record),
                Err(err) => {
                    log::warn!("Stored document for widget {} is not valid JSON: {}", id, err);
                    LoadOutcome::Failed
                }
            },
            None => LoadOutcome::Failed,
        };
        future::ready(outcome).boxed()
    }

    fn save(&self, id: WidgetId, record: StoredConfig) -> BoxFuture<'_, bool> {
        let saved = match serde_json::to_string(&record) {
            Ok(document) => {
                self.documents.lock().insert(id, document);
                true
            }
            Err(err) => {
                log::error!("Failed to encode record for widget {}: {}", id, err);
                false
            }
        };
        future::ready(saved).boxed()
    }
}
