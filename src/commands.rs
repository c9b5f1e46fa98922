//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The model never touches the file system itself; the runtime executes these
//! and feeds the outcome back as an [`AppMsg`](crate::messages::AppMsg).

use std::path::PathBuf;

/// Side effect requested by an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Create an empty file (fails if it already exists)
    CreateFile { path: PathBuf },
    /// Read a file
    LoadFile { path: PathBuf },
    /// Write the buffer to a file
    SaveFile { path: PathBuf, content: String },
    /// Request application exit
    Quit,
}
