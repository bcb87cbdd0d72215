//! GitHub Actions workflow commands
//!
//! The runner parses `::error::<message>` lines on stdout into annotations.
//! [`ActionStatus`] is the process-level failure signal: once failed it
//! stays failed, and `main` turns it into the exit code.

use std::io::Write;

/// Escape message data for a workflow command
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Format an `error` workflow command
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Write an informational line to stdout
pub fn info(message: &str) {
    let _ = writeln!(std::io::stdout(), "{}", message);
}

/// Write an `error` annotation to stdout
pub fn error(message: &str) {
    let _ = writeln!(std::io::stdout(), "{}", error_command(message));
}

/// Overall success or failure of one action run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionStatus {
    failures: Vec<String>,
}

impl ActionStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the run as failed and annotate the workflow with `message`
    pub fn set_failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!(error = %message, "Action failed");
        error(&message);
        self.failures.push(message);
    }

    pub fn is_failed(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Messages passed to [`set_failed`](Self::set_failed), oldest first
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Process exit code: 0 on success, 1 once failed
    pub fn exit_code(&self) -> i32 {
        if self.is_failed() {
            1
        } else {
            0
        }
    }
}
