//! CLI command implementations

pub mod version;

use force_core::{Config, ForceError, Registry};

pub use version::VersionCommand;

/// Build the registry of every command the CLI exposes
pub fn registry(config: &Config) -> Result<Registry, ForceError> {
    Registry::new().with(Box::new(VersionCommand::new(config.clone())))
}
