use thiserror::Error;

#[derive(Error, Debug)]
pub enum LolomoError {
    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Artwork generation failed: {0}")]
    Artwork(String),

    #[error("Metrics error: {0}")]
    Metrics(String),

    #[error("Server error: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, LolomoError>;
