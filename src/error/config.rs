use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// The configuration file could not be read.
    #[error("Failed to read configuration file {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for [`crate::config::Config`].
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed but is unusable, e.g. an empty prefix.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
