use crate::model::{Task, TaskId};
use crate::view::TaskView;

/// A successful mutation, carrying the task as it looks after the change
/// (or, for removals, as it looked before).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added(Task),
    Toggled(Task),
    Removed(Task),
}

impl Change {
    pub fn task(&self) -> &Task {
        match self {
            Self::Added(task) | Self::Toggled(task) | Self::Removed(task) => task,
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task().id
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Added(_) => "added",
            Self::Toggled(_) => "toggled",
            Self::Removed(_) => "removed",
        }
    }
}

/// Observer invoked after every mutation that changed the collection.
pub trait ChangeListener {
    fn on_change(&self, change: &Change, view: &TaskView);
}

pub struct NoopListener;

impl ChangeListener for NoopListener {
    fn on_change(&self, _change: &Change, _view: &TaskView) {}
}

pub struct TracingListener;

impl ChangeListener for TracingListener {
    fn on_change(&self, change: &Change, view: &TaskView) {
        tracing::debug!(
            kind = change.kind(),
            task_id = change.task_id(),
            total = view.tasks.len(),
            remaining = view.remaining_count(),
            "task list changed"
        );
    }
}

impl<F> ChangeListener for F
where
    F: Fn(&Change, &TaskView),
{
    fn on_change(&self, change: &Change, view: &TaskView) {
        self(change, view)
    }
}
