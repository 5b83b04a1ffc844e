//! Notification infrastructure module
//!
//! Delivers notifications by shelling out to the NotifyTool CLI.

mod notify_tool;

pub use notify_tool::{default_executable_path, NotifyToolNotifier};
