//! Configuration handling for force

use crate::error::ForceError;
use crate::version::VersionString;

/// Process configuration, built once at startup and passed to commands
#[derive(Debug, Clone)]
pub struct Config {
    /// Identifier reported by `force version`
    pub version: VersionString,
}

impl Config {
    /// Build a config with an explicit version identifier
    pub fn with_version(version: impl Into<String>) -> Result<Self, ForceError> {
        Ok(Self {
            version: VersionString::new(version)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: VersionString::build(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::BUILD_VERSION;

    #[test]
    fn test_default_uses_build_version() {
        assert_eq!(Config::default().version.as_str(), BUILD_VERSION);
    }

    #[test]
    fn test_with_version() {
        let config = Config::with_version("dev_20170302").unwrap();
        assert_eq!(config.version.as_str(), "dev_20170302");
        assert!(Config::with_version("").is_err());
    }
}
