use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolidError {
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("{capability} failed: {reason}")]
    OperationFailed { capability: String, reason: String },

    #[error("Failed to connect to {backend} database: {reason}")]
    ConnectionFailed { backend: String, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to read config file {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unknown {kind} provider: '{name}'")]
    UnknownProvider { kind: String, name: String },

    #[error("Unknown principle: '{0}' (expected srp, ocp, lsp, isp, dip or all)")]
    UnknownPrinciple(String),
}

impl SolidError {
    pub fn operation_failed(capability: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::OperationFailed {
            capability: capability.into(),
            reason: reason.into(),
        }
    }

    pub fn connection_failed(backend: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConnectionFailed {
            backend: backend.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_provider(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownProvider {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

impl From<toml::de::Error> for SolidError {
    fn from(err: toml::de::Error) -> Self {
        SolidError::Config(err.message().to_string())
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;
