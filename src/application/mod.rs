//! Application layer - Port interfaces
//!
//! Contains the trait definitions for external system interactions.

pub mod ports;
