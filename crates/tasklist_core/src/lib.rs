pub mod config;
pub mod error;
pub mod model;
pub mod notify;
pub mod task_store;
pub mod transitions;
pub mod view;

pub use model::{Task, TaskId};
pub use task_store::TaskStore;
pub use view::{EMPTY_STATE_MESSAGE, TaskView};

#[cfg(test)]
mod tests {
    use crate::error::AppError;
    use crate::model::Task;

    #[test]
    fn task_has_required_fields() {
        let task = Task {
            id: 1,
            text: "demo".to_string(),
            completed: false,
        };

        assert_eq!(task.id, 1);
        assert_eq!(task.text, "demo");
        assert!(!task.completed);
    }

    #[test]
    fn app_error_exposes_code() {
        let err = AppError::invalid_input("missing id");
        assert_eq!(err.code(), "invalid_input");
        assert_eq!(err.to_string(), "invalid_input - missing id");
    }

    #[test]
    fn io_errors_convert() {
        let err: AppError = std::io::Error::other("broken pipe").into();
        assert_eq!(err.code(), "io_error");
    }
}
