//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod ui;

pub use document::{ActionKind, Document, EditError, EditOperation, INSERT_SEPARATOR};
pub use ui::UiState;

use crate::config::EditorConfig;
use std::path::PathBuf;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// The single open document
    pub document: Document,
    /// UI state (queued status messages)
    pub ui: UiState,
    /// Persisted editor configuration
    pub config: EditorConfig,
}

impl AppModel {
    /// Create a new application model with an empty document
    pub fn new(config: EditorConfig) -> Self {
        Self {
            document: Document::new(),
            ui: UiState::new(),
            config,
        }
    }

    /// Create a model whose document targets `path` without reading it
    ///
    /// The caller is expected to follow up with a load when the file exists.
    pub fn with_path(config: EditorConfig, path: PathBuf) -> Self {
        Self {
            document: Document::new_with_path(path),
            ui: UiState::new(),
            config,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// `Current Text: '<buffer>'` line used after every edit
    pub fn current_text_line(&self) -> String {
        format!("Current Text: '{}'", self.document.snapshot())
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
