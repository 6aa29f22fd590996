use serde::{Deserialize, Serialize};

pub type TaskId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new<T: Into<String>>(id: TaskId, text: T) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Copy of this task with `completed` flipped.
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// The three tasks a fresh session starts with.
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            text: "Plan the DevOps challenge articles".to_string(),
            completed: true,
        },
        Task::new(2, "Review project READMEs"),
        Task::new(3, "Prepare for Day 20 content"),
    ]
}
