use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    NotARepository,
    NoCommits,
    SourceUnavailable,
    ConfigError,
    IoError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotARepository => write!(f, "NOT_A_REPOSITORY"),
            Self::NoCommits => write!(f, "NO_COMMITS"),
            Self::SourceUnavailable => write!(f, "SOURCE_UNAVAILABLE"),
            Self::ConfigError => write!(f, "CONFIG_ERROR"),
            Self::IoError => write!(f, "IO_ERROR"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PulseError {
    pub code: ErrorCode,
    pub message: String,
}

impl fmt::Display for PulseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for PulseError {}

impl PulseError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_a_repository() -> Self {
        Self::new(ErrorCode::NotARepository, "Not a git repository")
    }

    pub fn no_commits() -> Self {
        Self::new(ErrorCode::NoCommits, "No commits found")
    }
}
