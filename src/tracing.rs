//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! history and buffer state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=history=debug,message=debug` - scoped filtering
//! - `RUST_LOG=stackpad::model=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/stackpad/logs/stackpad.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::Document;

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr and respects RUST_LOG (default `warn`).
///
/// File logging writes to `~/.config/stackpad/logs/stackpad.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "stackpad.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of document/history state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySnapshot {
    pub buffer_chars: usize,
    pub undo_depth: usize,
    pub redo_depth: usize,
    pub revision: u64,
}

impl HistorySnapshot {
    pub fn from_document(document: &Document) -> Self {
        Self {
            buffer_chars: document.len_chars(),
            undo_depth: document.undo_stack().len(),
            redo_depth: document.redo_stack().len(),
            revision: document.revision,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &HistorySnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.buffer_chars != other.buffer_chars {
            changes.push(format!(
                "chars: {} → {}",
                self.buffer_chars, other.buffer_chars
            ));
        }
        if self.undo_depth != other.undo_depth {
            changes.push(format!("undo: {} → {}", self.undo_depth, other.undo_depth));
        }
        if self.redo_depth != other.redo_depth {
            changes.push(format!("redo: {} → {}", self.redo_depth, other.redo_depth));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }

    /// Check that a step between two snapshots kept the history discipline
    ///
    /// Whenever the undo stack grows, the redo stack is either empty (a new
    /// edit) or exactly one entry shorter (a redo). Any history change bumps
    /// the revision.
    pub fn assert_transition_with_context(&self, after: &HistorySnapshot, context: &str) {
        let history_changed =
            self.undo_depth != after.undo_depth || self.redo_depth != after.redo_depth;
        debug_assert!(
            !history_changed || self.revision != after.revision,
            "[{}] history changed without a revision bump ({:?} → {:?})",
            context,
            self,
            after
        );
        if after.undo_depth > self.undo_depth && after.redo_depth > 0 {
            debug_assert_eq!(
                after.redo_depth + 1,
                self.redo_depth,
                "[{}] redo stack survived a new edit ({:?} → {:?})",
                context,
                self,
                after
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_reports_changes() {
        let mut doc = Document::new();
        let before = HistorySnapshot::from_document(&doc);
        doc.insert("abc");
        let after = HistorySnapshot::from_document(&doc);

        assert_eq!(
            before.diff(&after),
            Some("chars: 0 → 3; undo: 0 → 1".to_string())
        );
        assert_eq!(after.diff(&after), None);
    }

    #[test]
    fn test_transition_accepts_redo() {
        let mut doc = Document::new();
        doc.insert("a");
        doc.insert("b");
        doc.undo().unwrap();
        doc.undo().unwrap();

        let before = HistorySnapshot::from_document(&doc);
        doc.redo().unwrap();
        let after = HistorySnapshot::from_document(&doc);
        before.assert_transition_with_context(&after, "redo");
    }

    #[test]
    fn test_transition_accepts_load() {
        let mut doc = Document::new();
        doc.insert("a");
        doc.undo().unwrap();

        let before = HistorySnapshot::from_document(&doc);
        doc.load("fresh");
        let after = HistorySnapshot::from_document(&doc);
        assert_ne!(before.revision, after.revision);
        before.assert_transition_with_context(&after, "load");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "history changed without a revision bump")]
    fn test_transition_rejects_stale_revision() {
        let before = HistorySnapshot {
            buffer_chars: 1,
            undo_depth: 1,
            redo_depth: 0,
            revision: 1,
        };
        let after = HistorySnapshot {
            undo_depth: 0,
            redo_depth: 1,
            ..before.clone()
        };
        before.assert_transition_with_context(&after, "undo");
    }
}
