//! Shared test fixtures.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::error::Result;
use crate::record::{ProviderKind, ProviderRecord};
use crate::store::{ConfigStore, FileStore};

/// A file store pointing at a not-yet-existing file inside a fresh temp dir.
pub fn fresh_store() -> (TempDir, FileStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join(".resolution"));
    (dir, store)
}

/// Events seen while running a closure under [`captured_events`].
#[derive(Debug, Default)]
pub struct CapturedEvents(Vec<(Level, String)>);

impl CapturedEvents {
    /// Whether any event was emitted at `level`.
    pub fn has_level(&self, level: Level) -> bool {
        self.0.iter().any(|(l, _)| *l == level)
    }

    /// Whether any event at `level` has a message containing `needle`.
    pub fn mentions(&self, level: Level, needle: &str) -> bool {
        self.0.iter().any(|(l, msg)| *l == level && msg.contains(needle))
    }
}

/// Runs `f` under a subscriber that records the level and message of every event.
pub fn captured_events<T>(f: impl FnOnce() -> T) -> (T, CapturedEvents) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(EventRecorder(Arc::clone(&events)));
    let out = tracing::subscriber::with_default(subscriber, f);
    let events = events.lock().unwrap().clone();
    (out, CapturedEvents(events))
}

struct EventRecorder(Arc<Mutex<Vec<(Level, String)>>>);

impl<S: Subscriber> Layer<S> for EventRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut message = MessageVisitor(String::new());
        event.record(&mut message);
        self.0
            .lock()
            .unwrap()
            .push((*event.metadata().level(), message.0));
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.0.push_str(value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0.push_str(&format!("{value:?}"));
        }
    }
}

/// In-memory store that counts writes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: RefCell<Option<ProviderRecord>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn with(record: ProviderRecord) -> Self {
        Self {
            record: RefCell::new(Some(record)),
            writes: Cell::new(0),
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self) -> Result<ProviderRecord> {
        Ok(self
            .record
            .borrow()
            .clone()
            .unwrap_or_else(ProviderRecord::unset))
    }

    fn set(&self, kind: ProviderKind, value: &str) -> Result<()> {
        self.writes.set(self.writes.get() + 1);
        *self.record.borrow_mut() = Some(ProviderRecord::new(kind, value));
        Ok(())
    }
}
