use crate::error::AppError;
use crate::model::{Task, TaskId, seed_tasks};
use crate::notify::{Change, ChangeListener};
use crate::transitions;
use crate::view::TaskView;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

/// Owner of the task collection and the pending input text.
///
/// `add_task`, `toggle_complete` and `delete_task` never fail: blank text and
/// unknown ids leave the store untouched and notify nobody.
#[derive(Default)]
pub struct TaskStore {
    tasks: Vec<Rc<Task>>,
    pending_input: String,
    listeners: Vec<Box<dyn ChangeListener>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self {
            tasks: seed_tasks().into_iter().map(Rc::new).collect(),
            ..Self::default()
        }
    }

    /// Builds a store from an explicit task list, keeping its order.
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self, AppError> {
        let mut seen = HashSet::with_capacity(tasks.len());
        let mut entries = Vec::with_capacity(tasks.len());

        for task in tasks {
            if !seen.insert(task.id) {
                return Err(AppError::invalid_data(format!(
                    "duplicate task id {}",
                    task.id
                )));
            }
            let text = transitions::normalize_text(&task.text)
                .ok_or_else(|| AppError::invalid_data(format!("task {} has no text", task.id)))?
                .to_string();
            entries.push(Rc::new(Task { text, ..task }));
        }

        Ok(Self {
            tasks: entries,
            ..Self::default()
        })
    }

    pub fn subscribe<L: ChangeListener + 'static>(&mut self, listener: L) {
        self.listeners.push(Box::new(listener));
    }

    pub fn tasks(&self) -> &[Rc<Task>] {
        &self.tasks
    }

    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.iter().map(|task| task.as_ref().clone()).collect()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks
            .iter()
            .find(|task| task.id == id)
            .map(|task| task.as_ref())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn view(&self) -> TaskView {
        TaskView::project(&self.tasks)
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn set_pending_input<T: Into<String>>(&mut self, text: T) {
        self.pending_input = text.into();
    }

    /// Adds the pending input as a new task, the way a form submit would.
    pub fn submit_pending(&mut self) -> Option<TaskId> {
        let raw = self.pending_input.clone();
        self.add_task(&raw)
    }

    /// Appends a task with the trimmed text and returns its id. Blank text is
    /// ignored and leaves the pending input as it was.
    pub fn add_task(&mut self, raw_text: &str) -> Option<TaskId> {
        let Some(text) = transitions::normalize_text(raw_text) else {
            tracing::trace!("ignoring blank task text");
            return None;
        };
        let Some(id) = transitions::next_id(&self.tasks) else {
            tracing::warn!("task id space exhausted, ignoring add");
            return None;
        };

        let task = Task::new(id, text);
        self.tasks = transitions::append(&self.tasks, task.clone());
        self.pending_input.clear();
        self.publish(Change::Added(task));

        Some(id)
    }

    /// Flips `completed` on the matching task. Returns whether anything changed.
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        let Some(next) = transitions::toggle(&self.tasks, id) else {
            tracing::trace!(task_id = id, "toggle on unknown task ignored");
            return false;
        };

        self.tasks = next;
        let toggled = self.get(id).cloned();
        if let Some(task) = toggled {
            self.publish(Change::Toggled(task));
        }
        true
    }

    /// Removes the matching task. Returns whether anything changed.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let Some(removed) = self.get(id).cloned() else {
            tracing::trace!(task_id = id, "delete on unknown task ignored");
            return false;
        };
        let Some(next) = transitions::remove(&self.tasks, id) else {
            return false;
        };

        self.tasks = next;
        self.publish(Change::Removed(removed));
        true
    }

    fn publish(&self, change: Change) {
        if self.listeners.is_empty() {
            return;
        }

        let view = self.view();
        for listener in &self.listeners {
            listener.on_change(&change, &view);
        }
    }
}

impl fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("pending_input", &self.pending_input)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
