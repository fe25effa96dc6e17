use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single notification delivered to subscribers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusEvent {
    pub id: String,
    pub seq: i64,
    pub event_type: String,
    pub payload: serde_json::Value,
    pub created_at: String,
}

type Handler = Arc<dyn Fn(&BusEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    /// Handlers per event name, in registration order.
    handlers: HashMap<String, Vec<(u64, Handler)>>,
}

impl Registry {
    fn remove(&mut self, event_type: &str, token: u64) {
        if let Some(entries) = self.handlers.get_mut(event_type) {
            entries.retain(|(registered, _)| *registered != token);
        }
    }
}

pub struct EventBus {
    registry: Arc<Mutex<Registry>>,
    seq: AtomicI64,
    next_token: AtomicU64,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry::default())),
            seq: AtomicI64::new(0),
            next_token: AtomicU64::new(0),
        }
    }

    /// Register `handler` for every future publish of `event_type`.
    ///
    /// The returned handle removes exactly this registration; registering
    /// the same closure twice yields two independent handles. Dropping the
    /// handle leaves the registration in place; only
    /// [`Subscription::unsubscribe`] removes it.
    pub fn subscribe(
        &self,
        event_type: impl Into<String>,
        handler: impl Fn(&BusEvent) + Send + Sync + 'static,
    ) -> Subscription {
        let event_type = event_type.into();
        let token = self.next_token.fetch_add(1, Ordering::Relaxed);
        self.registry()
            .handlers
            .entry(event_type.clone())
            .or_default()
            .push((token, Arc::new(handler)));
        Subscription {
            event_type,
            token,
            registry: Arc::clone(&self.registry),
        }
    }

    /// Publish a pre-built event onto the bus.
    ///
    /// Every handler registered for the event's name at this moment runs in
    /// registration order, on the calling stack, before `publish` returns.
    /// No registered handlers is a no-op. Handlers may subscribe,
    /// unsubscribe, or publish from inside delivery; a handler added
    /// mid-delivery first fires on the next publish of that name. A handler
    /// that republishes the event it is handling will recurse unchecked.
    pub fn publish(&self, event: BusEvent) {
        let snapshot: Vec<Handler> = {
            let registry = self.registry();
            match registry.handlers.get(&event.event_type) {
                Some(entries) => entries.iter().map(|(_, handler)| Arc::clone(handler)).collect(),
                None => return,
            }
        };
        for handler in snapshot {
            handler(&event);
        }
    }

    /// Convenience: build and publish an event in one call.
    pub fn emit(&self, event_type: impl Into<String>, payload: serde_json::Value) -> BusEvent {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let event = BusEvent {
            id: Uuid::new_v4().to_string(),
            seq,
            event_type: event_type.into(),
            payload,
            created_at: Utc::now().to_rfc3339(),
        };
        self.publish(event.clone());
        event
    }

    /// Acquire a lock on the handler registry.
    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().expect("event registry mutex poisoned")
    }
}

/// Handle to one handler registration.
pub struct Subscription {
    event_type: String,
    token: u64,
    registry: Arc<Mutex<Registry>>,
}

impl Subscription {
    /// Remove this registration. Removing twice is harmless.
    pub fn unsubscribe(&self) {
        self.registry
            .lock()
            .expect("event registry mutex poisoned")
            .remove(&self.event_type, self.token);
    }

    /// The event name this handle was registered for.
    pub fn event_type(&self) -> &str {
        &self.event_type
    }
}
