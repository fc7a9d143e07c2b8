//! Build version identity and the reporter that prints it

use std::fmt;
use std::io::Write;

use crate::error::ForceError;

/// Version used when no `FORCE_VERSION` was set at compile time
pub const DEFAULT_VERSION: &str = "dev_20170302";

/// Version identifier baked into this build
pub const BUILD_VERSION: &str = select_version(option_env!("FORCE_VERSION"));

const fn select_version(value: Option<&'static str>) -> &'static str {
    match value {
        Some(v) if !is_blank(v) => v,
        _ => DEFAULT_VERSION,
    }
}

const fn is_blank(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_whitespace() {
            return false;
        }
        i += 1;
    }
    true
}

/// Non-empty, immutable identifier of the running build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionString(String);

impl VersionString {
    /// Create a version string, rejecting empty or blank values
    pub fn new(value: impl Into<String>) -> Result<Self, ForceError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ForceError::EmptyVersion);
        }
        Ok(Self(value))
    }

    /// The version baked in at compile time
    pub fn build() -> Self {
        Self::new(BUILD_VERSION).unwrap_or_else(|_| Self(DEFAULT_VERSION.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VersionString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Prints the running build's version identifier
#[derive(Debug, Clone)]
pub struct VersionReporter {
    version: VersionString,
}

impl VersionReporter {
    pub fn new(version: VersionString) -> Self {
        Self { version }
    }

    pub fn version(&self) -> &VersionString {
        &self.version
    }

    /// Write the version followed by a newline
    pub fn report(&self, out: &mut dyn Write) -> Result<(), ForceError> {
        writeln!(out, "{}", self.version)?;
        Ok(())
    }
}
