//! Pure state transitions over an ordered task collection.
//!
//! Every function takes the current collection by reference and either
//! returns the next collection or `None` when the call is a no-op. Entries
//! that a transition does not touch are carried over as the same `Rc`.

use crate::model::{Task, TaskId};
use std::rc::Rc;

/// Trimmed task text, or `None` when nothing but whitespace remains.
pub fn normalize_text(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Highest id in the collection plus one; `1` for an empty collection.
///
/// Returns `None` once the id space is exhausted.
pub fn next_id(tasks: &[Rc<Task>]) -> Option<TaskId> {
    tasks
        .iter()
        .map(|task| task.id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
}

pub fn append(tasks: &[Rc<Task>], task: Task) -> Vec<Rc<Task>> {
    let mut next = Vec::with_capacity(tasks.len() + 1);
    next.extend(tasks.iter().cloned());
    next.push(Rc::new(task));
    next
}

pub fn toggle(tasks: &[Rc<Task>], id: TaskId) -> Option<Vec<Rc<Task>>> {
    let index = tasks.iter().position(|task| task.id == id)?;
    let mut next = tasks.to_vec();
    next[index] = Rc::new(tasks[index].toggled());
    Some(next)
}

pub fn remove(tasks: &[Rc<Task>], id: TaskId) -> Option<Vec<Rc<Task>>> {
    if !tasks.iter().any(|task| task.id == id) {
        return None;
    }

    Some(
        tasks
            .iter()
            .filter(|task| task.id != id)
            .cloned()
            .collect(),
    )
}
