//! pipemon: a login-gated pipeline sensor monitoring demo
//!
//! This library provides the core functionality for pipemon, including:
//! - In-memory sensor records with threshold-derived status labels
//! - A SQLite-backed credential store with role assignment
//! - GTK4 login and monitoring windows
//! - Configuration management

pub mod core;
pub mod store;
pub mod ui;
pub mod config;

// Re-export commonly used types
pub use core::{MonitorState, Role, SensorReading, SensorStatus};
pub use store::CredentialStore;
pub use config::AppConfig;
