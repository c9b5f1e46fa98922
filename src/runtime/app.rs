//! Console application loop
//!
//! Reads one command per line, routes it through [`update`], executes the
//! resulting [`Cmd`]s and writes the queued status messages.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::cli::{StartupConfig, StartupMode};
use crate::commands::Cmd;
use crate::config::EditorConfig;
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;
use crate::update::update;
use crate::util::{create_new_file, read_text_file};

use super::input::{parse_command, INVALID_COMMAND};

pub const WELCOME: &str = "Welcome to the Stack-Based Text Editor.";
pub const COMMAND_HELP: &str = "Commands: create <file>, load <file>, save <file>, \
insert <text>, delete_text <text>, undo, redo, display, quit";

/// The console application
pub struct App {
    model: AppModel,
    show_banner: bool,
    startup_msg: Option<Msg>,
    running: bool,
}

impl App {
    pub fn new(config: EditorConfig, startup: StartupConfig) -> Self {
        let (model, startup_msg) = match startup.mode {
            StartupMode::Empty => (AppModel::new(config), None),
            StartupMode::LoadFile(path) => (
                AppModel::new(config),
                Some(Msg::App(AppMsg::LoadFile(path))),
            ),
            StartupMode::NewFile(path) => (AppModel::with_path(config, path), None),
        };

        Self {
            model,
            show_banner: startup.show_banner,
            startup_msg,
            running: true,
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Route a message through update and run any resulting commands
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
    }

    /// Parse and dispatch one console line
    pub fn handle_line(&mut self, line: &str) {
        match parse_command(line) {
            Ok(msg) => self.dispatch(msg),
            Err(e) => {
                tracing::debug!("Rejected input {:?}: {}", line.trim(), e);
                self.model.ui.set_status(INVALID_COMMAND);
            }
        }
    }

    /// Drain the queued status messages
    pub fn take_output(&mut self) -> Vec<String> {
        self.model.ui.take_messages()
    }

    /// Execute a command synchronously, feeding completions back as messages
    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::CreateFile { path } => {
                let result = create_new_file(&path);
                self.dispatch(Msg::App(AppMsg::FileCreated { path, result }));
            }
            Cmd::LoadFile { path } => {
                let result = read_text_file(&path);
                self.dispatch(Msg::App(AppMsg::FileLoaded { path, result }));
            }
            Cmd::SaveFile { path, content } => {
                let result = std::fs::write(&path, content).map_err(|e| e.to_string());
                self.dispatch(Msg::App(AppMsg::SaveCompleted { path, result }));
            }
            Cmd::Quit => {
                tracing::info!("Quit requested");
                self.running = false;
            }
        }
    }

    /// Run the read-eval-print loop until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        if self.show_banner {
            writeln!(output, "{}", WELCOME)?;
            writeln!(output, "{}", COMMAND_HELP)?;
        }

        if let Some(msg) = self.startup_msg.take() {
            self.dispatch(msg);
        }

        let mut line = String::new();
        loop {
            self.flush_output(&mut output)?;
            if !self.running {
                break;
            }

            write!(output, "{}", self.model.config.prompt)?;
            output.flush().context("Failed to flush output")?;

            line.clear();
            let read = input
                .read_line(&mut line)
                .context("Failed to read command")?;
            if read == 0 {
                tracing::debug!("End of input");
                break;
            }

            self.handle_line(&line);
        }

        Ok(())
    }

    fn flush_output<W: Write>(&mut self, output: &mut W) -> Result<()> {
        for message in self.take_output() {
            writeln!(output, "{}", message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_app() -> App {
        App::new(
            EditorConfig::default(),
            StartupConfig {
                mode: StartupMode::Empty,
                show_banner: false,
            },
        )
    }

    #[test]
    fn test_handle_line_invalid_command() {
        let mut app = quiet_app();
        app.handle_line("frobnicate");
        assert_eq!(app.take_output(), vec![INVALID_COMMAND]);
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut app = quiet_app();
        app.handle_line("quit");
        assert!(!app.is_running());
    }

    #[test]
    fn test_run_writes_banner_prompt_and_messages() {
        let mut app = App::new(
            EditorConfig::default(),
            StartupConfig {
                mode: StartupMode::Empty,
                show_banner: true,
            },
        );
        let mut out = Vec::new();
        app.run("insert hi\nquit\n".as_bytes(), &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            format!(
                "{}\n{}\nEnter command: Inserted: 'hi' -> Current Text: 'hi'\nEnter command: ",
                WELCOME, COMMAND_HELP
            )
        );
    }

    #[test]
    fn test_run_stops_at_end_of_input() {
        let mut app = quiet_app();
        let mut out = Vec::new();
        app.run("insert a\n".as_bytes(), &mut out).unwrap();
        assert_eq!(app.model().document().snapshot(), "a");
        assert!(app.is_running());
    }
}
