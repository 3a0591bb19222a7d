use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("Invalid value '{value}' in environment variable {name}")]
    InvalidEnv { name: String, value: String },

    #[error("Invalid configuration: {0}")]
    Validation(String),
}
