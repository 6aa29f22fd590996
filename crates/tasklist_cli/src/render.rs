use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tasklist_core::notify::Change;
use tasklist_core::view::{EMPTY_STATE_MESSAGE, TaskRow, TaskView};
use tasklist_core::{Task, TaskId};

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub json: bool,
}

#[derive(Tabled)]
struct ListRow {
    #[tabled(rename = "ID")]
    id: TaskId,
    #[tabled(rename = "Done")]
    done: &'static str,
    #[tabled(rename = "Task")]
    text: String,
}

impl From<&TaskRow> for ListRow {
    fn from(row: &TaskRow) -> Self {
        Self {
            id: row.id,
            done: if row.completed { "x" } else { " " },
            text: row.text.clone(),
        }
    }
}

pub fn confirmation(change: &Change) -> String {
    let task = change.task();
    let verb = match change {
        Change::Added(_) => "Added",
        Change::Toggled(task) if task.completed => "Completed",
        Change::Toggled(_) => "Reopened",
        Change::Removed(_) => "Deleted",
    };
    format!("{verb} task: {} ({})", task.text, task.id)
}

fn task_json(task: &Task) -> serde_json::Value {
    json!({
        "id": task.id,
        "text": task.text,
        "completed": task.completed,
    })
}

/// Output printed after a mutation: the confirmation plus the re-rendered list.
pub fn render_change(change: &Change, view: &TaskView, options: &RenderOptions) -> String {
    if options.json {
        return json!({
            "change": change.kind(),
            "task": task_json(change.task()),
            "tasks": view.tasks,
            "is_empty": view.is_empty,
        })
        .to_string();
    }

    format!("{}\n{}", confirmation(change), render_plain(view, ""))
}

pub fn render_view(view: &TaskView, pending_input: &str, options: &RenderOptions) -> String {
    if options.json {
        return json!({
            "tasks": view.tasks,
            "is_empty": view.is_empty,
            "pending_input": pending_input,
        })
        .to_string();
    }

    render_plain(view, pending_input)
}

fn render_plain(view: &TaskView, pending_input: &str) -> String {
    let mut out = String::new();

    if view.is_empty {
        out.push_str(EMPTY_STATE_MESSAGE);
    } else {
        let rows: Vec<ListRow> = view.tasks.iter().map(ListRow::from).collect();
        let mut table = Table::new(rows);
        table.with(Style::sharp());
        out.push_str(&table.to_string());
        out.push('\n');
        out.push_str(&format!(
            "{} of {} remaining",
            view.remaining_count(),
            view.tasks.len()
        ));
    }

    if !pending_input.is_empty() {
        out.push('\n');
        out.push_str(&format!("Pending input: {pending_input}"));
    }

    out
}
