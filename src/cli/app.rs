//! Main app runner

use std::process::ExitCode;

use crate::application::ports::Notifier;
use crate::domain::NotificationRequest;
use crate::infrastructure::NotifyToolNotifier;

use super::args::Cli;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Send the notification described by the parsed arguments
pub fn run(cli: Cli) -> ExitCode {
    let presenter = Presenter::new();

    let notifier = match cli.executable {
        Some(path) => NotifyToolNotifier::with_executable(path),
        None => NotifyToolNotifier::new(),
    };

    let mut request = NotificationRequest::new(cli.title, cli.body).sound(!cli.no_sound);
    if let Some(subtitle) = cli.subtitle {
        request = request.subtitle(subtitle);
    }

    match notifier.notify(&request) {
        Ok(()) => {
            presenter.success("Notification sent");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
