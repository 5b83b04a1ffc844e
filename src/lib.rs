//! QuickNotify - desktop notification shim around the NotifyTool CLI
//!
//! This crate builds a command line for the external `notifytool` binary
//! from a structured notification request and runs it as a child process,
//! blocking until it exits and surfacing any failure to the caller.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: The notification request value object
//! - **Application**: The notifier port interface (trait) and its errors
//! - **Infrastructure**: The NotifyTool subprocess adapter
//! - **CLI**: Command-line interface and argument parsing

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
