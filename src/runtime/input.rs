//! Console line to message mapping
//!
//! A line is trimmed, then split once at the first space into an action and
//! its argument. The action is case-insensitive; the argument is kept as is.

use std::fmt;
use std::path::PathBuf;

use crate::messages::{AppMsg, DocumentMsg, Msg};

/// Message printed for any line that does not parse
pub const INVALID_COMMAND: &str = "Invalid command. Try again.";

/// Why a console line did not map to a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Blank line
    Empty,
    /// Action word not recognised
    UnknownCommand(String),
    /// Action needs an argument but none was given
    MissingArgument(&'static str),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::UnknownCommand(action) => write!(f, "unknown command: {}", action),
            Self::MissingArgument(action) => write!(f, "{} needs an argument", action),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a console line into a message
pub fn parse_command(line: &str) -> Result<Msg, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    let (action, argument) = match line.split_once(' ') {
        Some((action, rest)) => (action, Some(rest)),
        None => (line, None),
    };

    let msg = match (action.to_lowercase().as_str(), argument) {
        ("create", Some(path)) => Msg::App(AppMsg::NewFile(PathBuf::from(path))),
        ("load", Some(path)) => Msg::App(AppMsg::LoadFile(PathBuf::from(path))),
        ("save", path) => Msg::App(AppMsg::SaveFile(path.map(PathBuf::from))),
        ("insert", Some(text)) => Msg::Document(DocumentMsg::Insert(text.to_string())),
        ("delete_text" | "delete", Some(text)) => {
            Msg::Document(DocumentMsg::DeleteAll(text.to_string()))
        }
        ("undo", _) => Msg::Document(DocumentMsg::Undo),
        ("redo", _) => Msg::Document(DocumentMsg::Redo),
        ("display", _) => Msg::Document(DocumentMsg::Display),
        ("quit" | "exit", _) => Msg::App(AppMsg::Quit),
        ("create", None) => return Err(ParseError::MissingArgument("create")),
        ("load", None) => return Err(ParseError::MissingArgument("load")),
        ("insert", None) => return Err(ParseError::MissingArgument("insert")),
        ("delete_text" | "delete", None) => {
            return Err(ParseError::MissingArgument("delete_text"))
        }
        (other, _) => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(msg)
}
