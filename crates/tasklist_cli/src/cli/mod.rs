use clap::{Parser, Subcommand};
use tasklist_core::TaskId;
use tasklist_core::config::ConfigOverrides;
use tasklist_core::error::AppError;

#[derive(Parser, Debug)]
#[command(name = "tasklist", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Override configuration values (format KEY=VALUE)
    #[arg(long = "config-override", value_name = "KEY=VALUE", global = true)]
    pub config_override: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    ///
    /// Example: tasklist add "Buy milk"
    Add { text: Vec<String> },
    /// Replace the pending input without adding a task
    ///
    /// Example: tasklist input "Buy"
    Input { text: Vec<String> },
    /// Add the pending input as a new task
    Submit,
    /// Mark a task as completed, or reopen it
    ///
    /// Example: tasklist toggle 2
    Toggle { id: TaskId },
    /// Delete a task
    ///
    /// Example: tasklist delete 1
    Delete { id: TaskId },
    /// List tasks
    List,
}

/// Parse one raw `KEY=VALUE` override and fold it into `overrides`.
pub fn apply_config_override(overrides: &mut ConfigOverrides, raw: &str) -> Result<(), AppError> {
    let (key_raw, value_raw) = raw
        .trim()
        .split_once('=')
        .ok_or_else(|| AppError::invalid_input("override must be in KEY=VALUE format"))?;

    let field = canonicalize_flag_name(key_raw)
        .ok_or_else(|| AppError::invalid_input("override key cannot be empty"))?;

    match field.as_str() {
        "seed" => {
            let seed = parse_bool(value_raw.trim())
                .ok_or_else(|| AppError::invalid_input("seed override must be true or false"))?;
            overrides.seed = Some(seed);
            Ok(())
        }
        other => Err(AppError::invalid_input(format!(
            "unknown config field '{other}'"
        ))),
    }
}

/// Folds every `--config-override` argument into one set of overrides.
pub fn collect_overrides(raw: &[String]) -> Result<ConfigOverrides, AppError> {
    let mut overrides = ConfigOverrides::default();
    for entry in raw {
        apply_config_override(&mut overrides, entry)?;
    }
    Ok(overrides)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn canonicalize_flag_name(name: &str) -> Option<String> {
    let mut cleaned = String::new();
    let mut previous_underscore = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            cleaned.push(ch.to_ascii_lowercase());
            previous_underscore = false;
        } else if !previous_underscore && !cleaned.is_empty() {
            cleaned.push('_');
            previous_underscore = true;
        }
    }

    let trimmed = cleaned.trim_matches('_');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::invalid_input(message)
}

/// Splits an interactive line into arguments, honoring double quotes and
/// `\"` / `\\` escapes inside them.
pub fn split_command_line(line: &str) -> Result<Vec<String>, AppError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut escape = false;

    for ch in line.chars() {
        if escape {
            if ch != '"' && ch != '\\' {
                current.push('\\');
            }
            current.push(ch);
            escape = false;
            continue;
        }

        if in_quotes && ch == '\\' {
            escape = true;
            continue;
        }

        if ch == '"' {
            in_quotes = !in_quotes;
            quoted = true;
            continue;
        }

        if ch.is_whitespace() && !in_quotes {
            if !current.is_empty() || quoted {
                args.push(std::mem::take(&mut current));
                quoted = false;
            }
            continue;
        }

        current.push(ch);
    }

    if in_quotes {
        return Err(AppError::invalid_input("unterminated quote in command"));
    }

    if !current.is_empty() || quoted {
        args.push(current);
    }

    Ok(args)
}
