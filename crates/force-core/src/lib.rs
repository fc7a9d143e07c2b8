//! force-core: version identity, command contract and registry
//!
//! This crate provides the types the force CLI dispatches through.

/// Core error types for force operations
pub mod error;

/// Configuration handling
pub mod config;

/// Version identifier and reporter
pub mod version;

/// Command contract (spec, invocation, trait)
pub mod command;

/// Explicit command registry
pub mod registry;

// Re-exports for convenience
pub use command::{Command, CommandSpec, Invocation};
pub use config::Config;
pub use error::ForceError;
pub use registry::Registry;
pub use version::{BUILD_VERSION, DEFAULT_VERSION, VersionReporter, VersionString};
