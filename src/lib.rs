//! stackpad - Elm-style console text editor
//!
//! This crate provides the core types and logic for a single-buffer editor
//! with append-only insertion, delete-all and linear undo/redo, implementing
//! the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::{AppModel, Document};
