//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use stackpad::cli::{StartupConfig, StartupMode};
use stackpad::config::EditorConfig;
use stackpad::messages::Msg;
use stackpad::model::{AppModel, Document};
use stackpad::runtime::App;
use stackpad::update::update;

/// Create a test model whose document holds `text` with an empty history
pub fn test_model(text: &str) -> AppModel {
    let mut model = AppModel::default();
    model.document = Document::with_text(text);
    model
}

/// Helper to get buffer content as string
pub fn buffer_to_string(model: &AppModel) -> String {
    model.document().snapshot()
}

/// Apply a sequence of messages, asserting none of them request a side effect
pub fn apply_all(model: &mut AppModel, msgs: impl IntoIterator<Item = Msg>) {
    for msg in msgs {
        assert!(update(model, msg).is_none());
    }
}

/// Create a console app with no banner and an empty buffer
pub fn quiet_app() -> App {
    App::new(
        EditorConfig::default(),
        StartupConfig {
            mode: StartupMode::Empty,
            show_banner: false,
        },
    )
}

/// Feed console lines to an app and collect everything it printed
pub fn run_lines(app: &mut App, lines: &[&str]) -> Vec<String> {
    let mut output = Vec::new();
    for line in lines {
        app.handle_line(line);
        output.extend(app.take_output());
    }
    output
}
