//! UI state - status messages queued for the console

/// UI state - what the shell should print next
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Most recent status message
    pub status_message: String,
    /// Messages not yet written to the console, oldest first
    pending: Vec<String>,
}

impl UiState {
    /// Create a new UI state with no messages
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status message and queue it for output
    pub fn set_status(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.pending.push(message.clone());
        self.status_message = message;
    }

    /// Drain the queued messages
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }
}
