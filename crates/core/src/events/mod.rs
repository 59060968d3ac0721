//! Events module - store change notifications for UI subscribers.

mod sink;
mod store_event;

pub use sink::{MockStoreEventSink, NoOpStoreEventSink, StoreEventSink};
pub use store_event::StoreEvent;
