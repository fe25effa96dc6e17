//! Application wiring.
//!
//! Builds the bus, the seeded store, and the document, mounts the views in
//! document order, and keeps the view subscriptions alive for the life of
//! the instance. Instances are independent: two `App`s share nothing.

use std::sync::Arc;

use crate::bus::{EventBus, Subscription};
use crate::store::{TaskSeed, TaskStatus, TaskStore};
use crate::view::{AddTaskView, Page, TaskListView};

/// A fully wired application instance.
pub struct App {
    bus: Arc<EventBus>,
    store: Arc<TaskStore>,
    page: Arc<Page>,
    subscriptions: Vec<Subscription>,
}

impl App {
    /// Seed the store, mount the add-task widget and both task lists in
    /// document order, and wire every view subscription.
    pub fn new(seed: TaskSeed) -> Self {
        let bus = Arc::new(EventBus::new());
        let store = Arc::new(TaskStore::new(Arc::clone(&bus), seed));
        let page = Arc::new(Page::new());

        let mut subscriptions = vec![AddTaskView.bind(&bus, &page)];
        subscriptions.extend(TaskListView::new(TaskStatus::Incomplete).bind(&bus, &store, &page));
        subscriptions.extend(TaskListView::new(TaskStatus::Completed).bind(&bus, &store, &page));

        tracing::info!("taskdeck started");
        Self {
            bus,
            store,
            page,
            subscriptions,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The current document.
    pub fn render(&self) -> String {
        self.page.render()
    }

    /// Unsubscribe every view. The document stops refreshing; the store
    /// keeps working.
    pub fn detach(&mut self) {
        for subscription in self.subscriptions.drain(..) {
            subscription.unsubscribe();
        }
    }
}
