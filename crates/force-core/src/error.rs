//! Error types for force operations

use thiserror::Error;

/// Core error type for force operations
#[derive(Error, Debug)]
pub enum ForceError {
    // === Version errors (E001) ===
    /// E001: Version identifier is empty
    #[error("E001: version identifier must not be empty")]
    EmptyVersion,

    // === Registry errors (E002-E003) ===
    /// E002: Command registered twice under the same name
    #[error("E002: command already registered: {name}")]
    DuplicateCommand { name: String },

    /// E003: No command registered under the requested name
    #[error("E003: unknown command: {name}")]
    UnknownCommand { name: String },

    // === IO and serialization errors ===
    /// IO error (typically a closed or failing output stream)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ForceError {
    /// Get the error code (e.g., "E001", "E002")
    pub fn code(&self) -> &'static str {
        match self {
            ForceError::EmptyVersion => "E001",
            ForceError::DuplicateCommand { .. } => "E002",
            ForceError::UnknownCommand { .. } => "E003",
            ForceError::Io(_) => "E010",
            ForceError::Json(_) => "E011",
        }
    }

    /// Get the exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            ForceError::EmptyVersion | ForceError::DuplicateCommand { .. } => 3, // Startup wiring

            ForceError::UnknownCommand { .. } => 2, // Usage error

            ForceError::Io(_) | ForceError::Json(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = ForceError::EmptyVersion;
        assert_eq!(err.code(), "E001");
        assert_eq!(err.exit_code(), 3);

        let err = ForceError::UnknownCommand {
            name: "frobnicate".to_string(),
        };
        assert_eq!(err.code(), "E003");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_error_display() {
        let err = ForceError::DuplicateCommand {
            name: "version".to_string(),
        };
        assert_eq!(err.to_string(), "E002: command already registered: version");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ForceError = io.into();
        assert_eq!(err.code(), "E010");
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("pipe closed"));
    }
}
