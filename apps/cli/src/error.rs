use enumgen_core::AnnotationError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Config error: {source}")]
    Config {
        #[from]
        source: config::ConfigError,
    },

    #[error("Invalid log level `{value}`: expected off, error, warn, info, debug or trace")]
    LogLevel { value: String },

    #[error("Invalid global directive: {source}")]
    Directive {
        #[from]
        source: AnnotationError,
    },

    #[error("Failed to read manifest {}: {source}", path.display())]
    ManifestRead { path: PathBuf, source: std::io::Error },

    #[error("Malformed manifest {}: {source}", path.display())]
    ManifestFormat { path: PathBuf, source: serde_json::Error },

    #[error("Failed to write output: {source}")]
    Output {
        #[from]
        source: std::io::Error,
    },
}
