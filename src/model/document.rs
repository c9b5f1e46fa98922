//! Document model - the text buffer, its file state and the undo/redo history

use ropey::Rope;
use std::fmt;
use std::path::PathBuf;

/// Character placed in front of appended text when the buffer is non-empty
pub const INSERT_SEPARATOR: char = ' ';

/// A recorded, reversible edit
///
/// Each variant carries enough data to both revert and re-apply itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOperation {
    /// Text appended to the end of the buffer
    Insert {
        /// Exactly what was appended, including any injected separator
        text: String,
    },
    /// Removal of every occurrence of a pattern
    DeleteAll {
        /// The literal string that was removed
        pattern: String,
        /// Char offsets (in the buffer before this deletion) where `pattern`
        /// began, ascending, overlapping matches included
        positions: Vec<usize>,
    },
}

impl EditOperation {
    pub fn kind(&self) -> ActionKind {
        match self {
            EditOperation::Insert { .. } => ActionKind::Insert,
            EditOperation::DeleteAll { .. } => ActionKind::DeleteAll,
        }
    }
}

/// Which kind of edit an undo or redo acted on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Insert,
    DeleteAll,
}

impl ActionKind {
    /// Label used in user-facing messages ("Undo Insert", "Redo Delete Text")
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Insert => "Insert",
            ActionKind::DeleteAll => "Delete Text",
        }
    }
}

/// Recoverable conditions reported by the editing operations
///
/// None of these change the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Undo requested with an empty undo stack
    NothingToUndo,
    /// Redo requested with an empty redo stack
    NothingToRedo,
    /// Delete requested for a pattern that does not occur (or is empty)
    PatternNotFound(String),
}

impl EditError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::NothingToUndo => "Nothing to undo!".to_string(),
            Self::NothingToRedo => "Nothing to redo!".to_string(),
            Self::PatternNotFound(pattern) => {
                format!("Text '{}' not found in current text.", pattern)
            }
        }
    }
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingToUndo => write!(f, "nothing to undo"),
            Self::NothingToRedo => write!(f, "nothing to redo"),
            Self::PatternNotFound(pattern) => write!(f, "pattern not found: {:?}", pattern),
        }
    }
}

impl std::error::Error for EditError {}

/// Document state - the text buffer and associated file metadata
///
/// The buffer and both history stacks are only changed through
/// [`insert`](Self::insert), [`delete_all`](Self::delete_all),
/// [`undo`](Self::undo), [`redo`](Self::redo), [`reset`](Self::reset)
/// and [`load`](Self::load).
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    buffer: Rope,
    /// Undo stack
    undo_stack: Vec<EditOperation>,
    /// Redo stack
    redo_stack: Vec<EditOperation>,

    /// Path to the file on disk (None until created, loaded or saved-as)
    pub file_path: Option<PathBuf>,
    /// Document revision counter (incremented on each edit, undo and redo)
    pub revision: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from_str(text),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            file_path: None,
            revision: 0,
        }
    }

    /// Create a new empty document with a target file path
    ///
    /// Used when the path given on the command line does not exist yet.
    /// The file will be created when the user saves.
    pub fn new_with_path(path: PathBuf) -> Self {
        Self {
            file_path: Some(path),
            ..Self::new()
        }
    }

    /// Current buffer content
    pub fn snapshot(&self) -> String {
        self.buffer.to_string()
    }

    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len_chars() == 0
    }

    pub fn undo_stack(&self) -> &[EditOperation] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[EditOperation] {
        &self.redo_stack
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear the buffer and both history stacks (new document)
    pub fn reset(&mut self) {
        self.load("");
    }

    /// Replace the buffer with loaded content and start a fresh history
    pub fn load(&mut self, content: &str) {
        self.buffer = Rope::from_str(content);
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.revision = self.revision.wrapping_add(1);
        tracing::debug!(chars = self.buffer.len_chars(), "document reset");
    }

    /// Append text to the end of the buffer
    ///
    /// A separator is placed in front of `text` when the buffer is non-empty;
    /// it becomes part of the recorded edit. Returns the appended content.
    pub fn insert(&mut self, text: &str) -> String {
        let content = if self.is_empty() {
            text.to_string()
        } else {
            let mut content = String::with_capacity(text.len() + 1);
            content.push(INSERT_SEPARATOR);
            content.push_str(text);
            content
        };

        self.append(&content);
        tracing::debug!(content = %content, "insert");
        self.push_edit(EditOperation::Insert {
            text: content.clone(),
        });
        content
    }

    /// Remove every occurrence of `pattern` from the buffer
    ///
    /// Returns the number of occurrence starts recorded (overlapping matches
    /// counted). If the pattern does not occur, nothing changes, including
    /// the redo stack.
    pub fn delete_all(&mut self, pattern: &str) -> Result<usize, EditError> {
        let positions = self.find_all_occurrences(pattern);
        if positions.is_empty() {
            tracing::debug!(pattern, "delete_all: pattern not found");
            return Err(EditError::PatternNotFound(pattern.to_string()));
        }

        let count = positions.len();
        self.remove_all_occurrences(pattern);
        tracing::debug!(pattern, occurrences = count, "delete_all");
        self.push_edit(EditOperation::DeleteAll {
            pattern: pattern.to_string(),
            positions,
        });
        Ok(count)
    }

    /// Revert the most recent edit and move it to the redo stack
    pub fn undo(&mut self) -> Result<ActionKind, EditError> {
        let edit = self.undo_stack.pop().ok_or(EditError::NothingToUndo)?;

        match &edit {
            EditOperation::Insert { text } => {
                let end = self.buffer.len_chars();
                let len = text.chars().count();
                debug_assert!(
                    len <= end && self.buffer.slice(end - len..) == text.as_str(),
                    "undo insert: buffer does not end with {:?}",
                    text
                );
                let start = end.saturating_sub(len);
                self.buffer.remove(start..end);
            }
            EditOperation::DeleteAll { pattern, positions } => {
                // Reinsert back-to-front so earlier offsets stay valid
                for offset in removed_offsets(positions, pattern.chars().count())
                    .into_iter()
                    .rev()
                {
                    debug_assert!(
                        offset <= self.buffer.len_chars(),
                        "undo delete: offset {} past end of buffer ({} chars)",
                        offset,
                        self.buffer.len_chars()
                    );
                    let at = offset.min(self.buffer.len_chars());
                    self.buffer.insert(at, pattern);
                }
            }
        }

        let kind = edit.kind();
        tracing::debug!(?kind, "undo");
        self.redo_stack.push(edit);
        self.touch();
        Ok(kind)
    }

    /// Re-apply the most recently undone edit and move it back to the undo stack
    ///
    /// A redone delete rescans the current buffer for the pattern instead of
    /// replaying the recorded positions.
    pub fn redo(&mut self) -> Result<ActionKind, EditError> {
        let edit = self.redo_stack.pop().ok_or(EditError::NothingToRedo)?;

        match &edit {
            EditOperation::Insert { text } => self.append(text),
            EditOperation::DeleteAll { pattern, .. } => self.remove_all_occurrences(pattern),
        }

        let kind = edit.kind();
        tracing::debug!(?kind, "redo");
        self.undo_stack.push(edit);
        self.touch();
        Ok(kind)
    }

    /// Find every position where `needle` starts, in character indices
    ///
    /// Scans left to right advancing one character past each match start, so
    /// overlapping matches are reported. An empty needle never matches.
    pub fn find_all_occurrences(&self, needle: &str) -> Vec<usize> {
        if needle.is_empty() {
            return Vec::new();
        }

        let haystack = self.buffer.to_string();
        let mut results = Vec::new();
        let mut start_byte = 0;
        let mut scanned_byte = 0;
        let mut char_idx = 0;

        while let Some(rel_byte) = haystack[start_byte..].find(needle) {
            let match_start_byte = start_byte + rel_byte;

            char_idx += haystack[scanned_byte..match_start_byte].chars().count();
            scanned_byte = match_start_byte;
            results.push(char_idx);

            // Step over the first character of the match to stay on a char boundary
            let first_char_byte_len = haystack[match_start_byte..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(1);
            start_byte = match_start_byte + first_char_byte_len;
        }
        results
    }

    /// Push an edit operation onto the undo stack and clear redo stack
    fn push_edit(&mut self, op: EditOperation) {
        self.undo_stack.push(op);
        self.redo_stack.clear();
        self.touch();
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn append(&mut self, text: &str) {
        let end = self.buffer.len_chars();
        self.buffer.insert(end, text);
    }

    /// Global left-to-right removal of non-overlapping occurrences
    fn remove_all_occurrences(&mut self, pattern: &str) {
        if pattern.is_empty() {
            return;
        }
        let text = self.buffer.to_string();
        if text.contains(pattern) {
            self.buffer = Rope::from_str(&text.replace(pattern, ""));
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate recorded occurrence starts into offsets in the post-deletion buffer
///
/// Only the starts consumed by the left-to-right global removal are kept
/// (overlapping starts inside an already removed match are skipped). The k-th
/// removed match sits `k * pattern_len` characters earlier once the previous
/// matches are gone. The result is ascending.
fn removed_offsets(positions: &[usize], pattern_len: usize) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(positions.len());
    let mut next_free = 0;

    for &start in positions {
        if start < next_free {
            continue;
        }
        let removed_before = offsets.len() * pattern_len;
        offsets.push(start.saturating_sub(removed_before));
        next_free = start + pattern_len;
    }
    offsets
}
