mod task;

pub use task::{Task, TaskId, seed_tasks};
