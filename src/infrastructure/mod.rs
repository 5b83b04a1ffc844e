//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the external notification tool.

pub mod notification;

// Re-export adapters
pub use notification::{default_executable_path, NotifyToolNotifier};
