//! Store event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::StoreEvent;

/// Trait for receiving store events.
///
/// The store emits an event through this trait after every mutation, once
/// the new state is already visible to readers and the snapshot write has
/// been issued.
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no storage writes, no I/O)
/// - Failure to handle an event must not affect store operations
pub trait StoreEventSink: Send + Sync {
    /// Emit a single store event.
    fn emit(&self, event: StoreEvent);
}

/// No-op implementation for tests or headless contexts.
#[derive(Clone, Default)]
pub struct NoOpStoreEventSink;

impl StoreEventSink for NoOpStoreEventSink {
    fn emit(&self, _event: StoreEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockStoreEventSink {
    events: Arc<Mutex<Vec<StoreEvent>>>,
}

impl MockStoreEventSink {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<StoreEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl StoreEventSink for MockStoreEventSink {
    fn emit(&self, event: StoreEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink_does_not_panic() {
        let sink = NoOpStoreEventSink;
        sink.emit(StoreEvent::goal_changed("g1"));
        sink.emit(StoreEvent::UserChanged);
    }

    #[test]
    fn test_mock_sink_collects_events() {
        let sink = MockStoreEventSink::new();
        assert!(sink.is_empty());

        sink.emit(StoreEvent::goal_changed("g1"));
        sink.emit(StoreEvent::sub_goals_changed("g1"));
        assert_eq!(sink.len(), 2);

        sink.clear();
        assert!(sink.is_empty());
    }
}
