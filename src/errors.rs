#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
    #[error("Unsupported configuration format: {0}")]
    UnsupportedConfigFormat(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid listen address '{0}'")]
    InvalidAddress(String),
}

pub type Result<T> = std::result::Result<T, Error>;
