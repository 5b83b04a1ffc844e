//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod notifier;

// Re-export common types
pub use notifier::{NotificationError, Notifier};
