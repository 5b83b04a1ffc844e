//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::Parser;

/// QuickNotify - send a desktop notification via the NotifyTool CLI
#[derive(Parser, Debug)]
#[command(name = "quick-notify")]
#[command(version)]
#[command(about = "Send a desktop notification via the NotifyTool CLI")]
#[command(long_about = None)]
pub struct Cli {
    /// Notification title
    #[arg(short = 't', long, value_name = "TEXT")]
    pub title: String,

    /// Notification body text
    #[arg(short = 'b', long, value_name = "TEXT")]
    pub body: String,

    /// Optional subtitle shown below the title
    #[arg(short = 's', long, value_name = "TEXT")]
    pub subtitle: Option<String>,

    /// Do not play the notification sound
    #[arg(long)]
    pub no_sound: bool,

    /// Path to the notifytool executable (defaults to the NotifyTool app bundle)
    #[arg(long, value_name = "PATH")]
    pub executable: Option<PathBuf>,
}
