use std::sync::Arc;

use crate::bus::{event_types, EventBus, Subscription};
use crate::view::Page;

/// The add-task input widget.
pub struct AddTaskView;

impl AddTaskView {
    pub const COMPONENT_ID: &'static str = "add-task-container";

    pub fn render(&self) -> String {
        format!(
            "<div id=\"{id}\">\n  <input id=\"add-task-input\" type=\"text\" value=\"\">\n  <button id=\"add-task-button\">Add task</button>\n</div>",
            id = Self::COMPONENT_ID,
        )
    }

    /// Mount the widget and clear the input whenever a task is added.
    pub fn bind(&self, bus: &EventBus, page: &Arc<Page>) -> Subscription {
        page.mount(Self::COMPONENT_ID, self.render());
        let page = Arc::clone(page);
        bus.subscribe(event_types::ADD_TASK, move |_event| {
            page.update(AddTaskView::COMPONENT_ID, AddTaskView.render());
        })
    }
}
