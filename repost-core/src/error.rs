use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepostError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RepostError>;
