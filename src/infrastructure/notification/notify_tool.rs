//! NotifyTool notification adapter

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::NotificationRequest;

/// Location of the notifytool binary inside its app bundle, relative to
/// the user's home directory.
const BUNDLE_RELATIVE_PATH: &str =
    "Library/Application Support/NotifyTool.app/Contents/MacOS/notifytool";

/// Default path to the NotifyTool binary in the user's Application Support.
///
/// Computed at call time so tests can inject an explicit path via
/// [`NotifyToolNotifier::with_executable`] instead of fighting global state.
pub fn default_executable_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(BUNDLE_RELATIVE_PATH)
}

/// NotifyTool notification adapter
///
/// Spawns one child process per notification and blocks until it exits.
pub struct NotifyToolNotifier {
    /// Path to the notifytool executable
    executable: PathBuf,
}

impl NotifyToolNotifier {
    /// Create a notifier using the default executable path
    pub fn new() -> Self {
        Self {
            executable: default_executable_path(),
        }
    }

    /// Create a notifier with a custom executable path
    pub fn with_executable(path: impl Into<PathBuf>) -> Self {
        Self {
            executable: path.into(),
        }
    }

    /// Path to the executable this notifier will spawn
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Build the argument vector for one request, executable path first.
    ///
    /// Flag order is fixed: `--title`, `--body`, then `--subtitle` only
    /// when a non-empty subtitle is present, then `--no-sound` only when
    /// sound is disabled. The tool's parser relies on this shape.
    pub fn argv(&self, request: &NotificationRequest) -> Vec<OsString> {
        let mut argv = vec![
            self.executable.as_os_str().to_os_string(),
            OsString::from("--title"),
            OsString::from(&request.title),
            OsString::from("--body"),
            OsString::from(&request.body),
        ];

        if let Some(subtitle) = request.subtitle.as_deref() {
            if !subtitle.is_empty() {
                argv.push(OsString::from("--subtitle"));
                argv.push(OsString::from(subtitle));
            }
        }

        if !request.sound {
            argv.push(OsString::from("--no-sound"));
        }

        argv
    }

    /// Render an argument vector as a single command line for error messages
    fn render_command(argv: &[OsString]) -> String {
        argv.iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for NotifyToolNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotifyToolNotifier {
    fn notify(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let argv = self.argv(request);

        let status = Command::new(&argv[0])
            .args(&argv[1..])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| NotificationError::Launch {
                command: Self::render_command(&argv),
                message: e.to_string(),
            })?;

        if status.success() {
            return Ok(());
        }

        match status.code() {
            Some(code) => Err(NotificationError::CommandFailed {
                command: Self::render_command(&argv),
                code,
            }),
            // Killed by a signal on Unix; no exit code to report.
            None => Err(NotificationError::Terminated {
                command: Self::render_command(&argv),
            }),
        }
    }
}
