use crate::cli::{Cli, Command, collect_overrides};
use crate::render::{self, RenderOptions};
use std::cell::Cell;
use std::rc::Rc;
use tasklist_core::TaskStore;
use tasklist_core::config::{Config, merge_overrides};
use tasklist_core::error::AppError;
use tasklist_core::notify::{Change, TracingListener};
use tasklist_core::view::TaskView;

/// One shell session: a store plus the output settings the render listener
/// reads when the store reports a change.
pub struct Session {
    store: TaskStore,
    output: Rc<Cell<RenderOptions>>,
}

impl Session {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let mut store = config.build_store()?;
        let output = Rc::new(Cell::new(RenderOptions::default()));

        let sink = Rc::clone(&output);
        store.subscribe(move |change: &Change, view: &TaskView| {
            println!("{}", render::render_change(change, view, &sink.get()));
        });
        store.subscribe(TracingListener);

        Ok(Self { store, output })
    }

    /// Builds a session from already-parsed arguments, applying their
    /// `--config-override` values before the store is constructed.
    pub fn from_cli(config: Config, cli: &Cli) -> Result<Self, AppError> {
        let overrides = collect_overrides(&cli.config_override)?;
        Self::new(merge_overrides(&config, &overrides))
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Runs a command typed into an already running session. Overrides only
    /// shape how the store is built, so they are refused here.
    pub fn run(&mut self, cli: Cli) -> Result<(), AppError> {
        let overrides = collect_overrides(&cli.config_override)?;
        if overrides.seed.is_some() {
            return Err(AppError::invalid_input(
                "seed can only be set when the session starts",
            ));
        }

        self.execute(cli.command, cli.json);
        Ok(())
    }

    pub fn execute(&mut self, command: Command, json: bool) {
        self.output.set(RenderOptions { json });

        match command {
            Command::Add { text } => {
                self.store.add_task(&text.join(" "));
            }
            Command::Input { text } => {
                self.store.set_pending_input(text.join(" "));
            }
            Command::Submit => {
                self.store.submit_pending();
            }
            Command::Toggle { id } => {
                self.store.toggle_complete(id);
            }
            Command::Delete { id } => {
                self.store.delete_task(id);
            }
            Command::List => {
                println!(
                    "{}",
                    render::render_view(
                        &self.store.view(),
                        self.store.pending_input(),
                        &self.output.get()
                    )
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use crate::cli::Cli;
    use clap::Parser;
    use tasklist_core::config::Config;

    fn run(session: &mut Session, args: &[&str]) {
        let mut argv = vec!["tasklist"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        session.run(cli).unwrap();
    }

    fn empty_config() -> Config {
        Config {
            seed: false,
            ..Config::default()
        }
    }

    #[test]
    fn session_starts_from_seed_by_default() {
        let session = Session::new(Config::default()).unwrap();
        assert_eq!(session.store().len(), 3);
    }

    #[test]
    fn commands_drive_the_store() {
        let mut session = Session::new(empty_config()).unwrap();

        run(&mut session, &["add", "  write", "tests  "]);
        run(&mut session, &["add", "ship"]);
        run(&mut session, &["toggle", "1"]);
        run(&mut session, &["delete", "2"]);

        let tasks = session.store().snapshot();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "write tests");
        assert!(tasks[0].completed);
    }

    #[test]
    fn input_and_submit_use_pending_text() {
        let mut session = Session::new(empty_config()).unwrap();

        run(&mut session, &["input", "draft", "task"]);
        assert_eq!(session.store().pending_input(), "draft task");
        assert!(session.store().is_empty());

        run(&mut session, &["submit"]);
        assert_eq!(session.store().pending_input(), "");
        assert_eq!(session.store().tasks()[0].text, "draft task");
    }

    #[test]
    fn unknown_ids_and_blank_text_are_silent() {
        let mut session = Session::new(empty_config()).unwrap();

        run(&mut session, &["add"]);
        run(&mut session, &["toggle", "4"]);
        run(&mut session, &["delete", "4"]);

        assert!(session.store().is_empty());
    }

    #[test]
    fn from_cli_applies_seed_override() {
        let cli =
            Cli::try_parse_from(["tasklist", "--config-override", "seed=false", "list"]).unwrap();
        let session = Session::from_cli(Config::default(), &cli).unwrap();

        assert!(session.store().is_empty());
    }

    #[test]
    fn run_rejects_bad_override() {
        let mut session = Session::new(empty_config()).unwrap();
        let cli =
            Cli::try_parse_from(["tasklist", "--config-override", "colour=red", "list"]).unwrap();

        let err = session.run(cli).unwrap_err();
        assert_eq!(err.code(), "invalid_input");
    }

    #[test]
    fn run_rejects_seed_override_once_started() {
        let mut session = Session::new(empty_config()).unwrap();
        let cli = Cli::try_parse_from([
            "tasklist",
            "--config-override",
            "seed=true",
            "add",
            "ignored",
        ])
        .unwrap();

        let err = session.run(cli).unwrap_err();

        assert_eq!(err.code(), "invalid_input");
        assert!(err.message().contains("seed"));
        assert!(session.store().is_empty());
    }
}
