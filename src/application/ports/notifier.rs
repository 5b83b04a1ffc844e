//! Notification port interface

use thiserror::Error;

use crate::domain::NotificationRequest;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    /// The tool could not be started (missing or not executable).
    #[error("Failed to launch notification tool: {message} (command: {command})")]
    Launch { command: String, message: String },

    /// The tool ran but reported failure through its exit status.
    #[error("Notification tool exited with code {code} (command: {command})")]
    CommandFailed { command: String, code: i32 },

    /// The tool was terminated by a signal and produced no exit code.
    #[error("Notification tool terminated by signal (command: {command})")]
    Terminated { command: String },
}

impl NotificationError {
    /// The full command line of the failed invocation, for diagnosis
    pub fn command(&self) -> &str {
        match self {
            Self::Launch { command, .. }
            | Self::CommandFailed { command, .. }
            | Self::Terminated { command } => command,
        }
    }
}

/// Port for sending desktop notifications.
///
/// Each call is one atomic request/response cycle: the implementation
/// performs exactly one external interaction and blocks until it
/// completes. No retries, no fallback delivery mechanism.
pub trait Notifier {
    /// Send a notification, blocking until the delivery attempt finishes.
    ///
    /// Ok(()) means the tool reported success; it does not confirm that
    /// a notification was actually displayed.
    fn notify(&self, request: &NotificationRequest) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
impl Notifier for Box<dyn Notifier> {
    fn notify(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        self.as_ref().notify(request)
    }
}
