use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Failed to write demo output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid demo config: {0}")]
    Config(#[from] toml::de::Error),
}
