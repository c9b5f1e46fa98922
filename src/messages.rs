//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::util::FileOpenError;

/// Document-specific messages (text editing, undo/redo)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Append text to the buffer
    Insert(String),
    /// Remove every occurrence of a pattern
    DeleteAll(String),
    /// Undo last edit
    Undo,
    /// Redo last undone edit
    Redo,
    /// Print the current buffer
    Display,
}

/// App messages (file I/O, lifecycle)
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Create a new, empty file and make it the current document
    NewFile(PathBuf),
    /// Load a file into the buffer
    LoadFile(PathBuf),
    /// Save the buffer, optionally to a new path
    SaveFile(Option<PathBuf>),
    /// File creation completed
    FileCreated {
        path: PathBuf,
        result: Result<(), FileOpenError>,
    },
    /// File load completed
    FileLoaded {
        path: PathBuf,
        result: Result<String, FileOpenError>,
    },
    /// File save completed
    SaveCompleted {
        path: PathBuf,
        result: Result<(), String>,
    },
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Document messages (text editing)
    Document(DocumentMsg),
    /// App messages (file I/O)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn insert(text: impl Into<String>) -> Self {
        Msg::Document(DocumentMsg::Insert(text.into()))
    }

    pub fn delete_all(pattern: impl Into<String>) -> Self {
        Msg::Document(DocumentMsg::DeleteAll(pattern.into()))
    }

    pub fn undo() -> Self {
        Msg::Document(DocumentMsg::Undo)
    }

    pub fn redo() -> Self {
        Msg::Document(DocumentMsg::Redo)
    }
}
