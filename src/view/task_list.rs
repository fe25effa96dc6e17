use std::sync::Arc;

use crate::bus::{event_types, BusEvent, EventBus, Subscription};
use crate::store::{Task, TaskStatus, TaskStore};
use crate::view::Page;

/// Markup and refresh wiring for one status list.
pub struct TaskListView {
    status: TaskStatus,
}

impl TaskListView {
    pub fn new(status: TaskStatus) -> Self {
        Self { status }
    }

    /// Document id of this list's container region.
    pub fn component_id(&self) -> String {
        format!("{}-task-container", self.status)
    }

    fn list_id(&self) -> String {
        format!("task-list-{}", self.status)
    }

    fn tasks(&self, store: &TaskStore) -> Vec<Task> {
        match self.status {
            TaskStatus::Completed => store.completed_tasks(),
            TaskStatus::Incomplete => store.incomplete_tasks(),
        }
    }

    /// Full container markup for the current store state.
    pub fn render(&self, store: &TaskStore) -> String {
        let rows: String = self
            .tasks(store)
            .iter()
            .map(|task| render_task(task, self.status))
            .collect();
        format!(
            "<div id=\"{component}\">\n  <h3>{heading} TASKS</h3>\n  <div id=\"{list}\">\n{rows}  </div>\n</div>",
            component = self.component_id(),
            heading = self.status.to_string().to_uppercase(),
            list = self.list_id(),
        )
    }

    /// Paint the initial markup and subscribe this list's refresh to every
    /// event that can change it.
    ///
    /// The completed list ignores `addTask`: new tasks only ever land in
    /// the incomplete list.
    pub fn bind(&self, bus: &EventBus, store: &Arc<TaskStore>, page: &Arc<Page>) -> Vec<Subscription> {
        page.mount(self.component_id(), self.render(store));

        let status = self.status;
        let refresh = {
            let store = Arc::clone(store);
            let page = Arc::clone(page);
            move |_event: &BusEvent| {
                let view = TaskListView::new(status);
                page.update(&view.component_id(), view.render(&store));
            }
        };

        let mut subscriptions = vec![
            bus.subscribe(event_types::MARK_TASK_COMPLETED, refresh.clone()),
            bus.subscribe(event_types::MARK_TASK_INCOMPLETE, refresh.clone()),
            bus.subscribe(event_types::REMOVE_TASK, refresh.clone()),
        ];
        if status == TaskStatus::Incomplete {
            subscriptions.push(bus.subscribe(event_types::ADD_TASK, refresh));
        }
        subscriptions
    }
}

fn render_task(task: &Task, status: TaskStatus) -> String {
    let switch_label = match status {
        TaskStatus::Completed => "Mark incomplete",
        TaskStatus::Incomplete => "Mark completed",
    };
    format!(
        "    <div>\n      <span>{name}</span>\n      <span><button class=\"remove-task-btn-{status}\">Remove</button></span>\n      <span><button class=\"task-status-switch-btn-{status}\">{switch_label}</button></span>\n    </div>\n",
        name = task.name,
    )
}
