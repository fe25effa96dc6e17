//! Event system driving view refresh on state change.
//!
//! The event bus provides:
//! - Publish-subscribe registry keyed by event name
//! - Synchronous, registration-order delivery on the caller's stack
//! - Token-based subscription handles for exact unsubscribe
//!
//! # Architecture
//!
//! Events flow store → EventBus → view bindings: a mutation publishes its
//! named event after the state change has landed, and every handler runs
//! before the mutation call returns. Handlers re-query the store rather
//! than receive diffs.

mod event_bus;
pub mod event_types;

pub use event_bus::{BusEvent, EventBus, Subscription};
