//! Domain layer - Core value objects
//!
//! Contains the notification request value object.
//! This layer has no dependencies on external systems.

pub mod request;

// Re-export common types
pub use request::NotificationRequest;
