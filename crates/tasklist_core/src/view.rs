use crate::model::{Task, TaskId};
use serde::Serialize;
use std::rc::Rc;

pub const EMPTY_STATE_MESSAGE: &str = "No tasks yet. Add one above!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

/// Renderable projection of the store. Holds no state of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    pub tasks: Vec<TaskRow>,
    pub is_empty: bool,
}

impl TaskView {
    pub fn project(tasks: &[Rc<Task>]) -> Self {
        let rows = tasks
            .iter()
            .map(|task| TaskRow {
                id: task.id,
                text: task.text.clone(),
                completed: task.completed,
            })
            .collect();

        Self {
            tasks: rows,
            is_empty: tasks.is_empty(),
        }
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|row| row.completed).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.tasks.len() - self.completed_count()
    }
}

#[cfg(test)]
mod tests {
    use super::TaskView;
    use crate::model::Task;
    use std::rc::Rc;

    #[test]
    fn empty_collection_reports_empty_state() {
        let view = TaskView::project(&[]);

        assert!(view.is_empty);
        assert!(view.tasks.is_empty());
        assert_eq!(view.remaining_count(), 0);
    }

    #[test]
    fn project_keeps_order_and_counts_completion() {
        let mut done = Task::new(2, "done");
        done.completed = true;
        let tasks = vec![Rc::new(Task::new(5, "first")), Rc::new(done)];

        let view = TaskView::project(&tasks);

        assert!(!view.is_empty);
        assert_eq!(view.tasks[0].id, 5);
        assert_eq!(view.tasks[1].text, "done");
        assert_eq!(view.completed_count(), 1);
        assert_eq!(view.remaining_count(), 1);
    }

    #[test]
    fn serializes_with_empty_flag() {
        let view = TaskView::project(&[Rc::new(Task::new(1, "a"))]);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["is_empty"], false);
        assert_eq!(json["tasks"][0]["id"], 1);
        assert_eq!(json["tasks"][0]["text"], "a");
        assert_eq!(json["tasks"][0]["completed"], false);
    }
}
