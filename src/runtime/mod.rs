//! Runtime module - console integration
//!
//! This module contains the code that drives the editor from a terminal:
//! - `app` - read-eval-print loop and command execution
//! - `input` - console line to message mapping

pub mod app;
pub mod input;

pub use app::App;
pub use input::{parse_command, ParseError};
