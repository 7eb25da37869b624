use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutlineError {
    #[error("File system error at {path}: {message}")]
    FileSystem { path: String, message: String },

    #[error("Invalid pattern `{pattern}`: {message}")]
    Pattern { pattern: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl OutlineError {
    pub fn file_system(path: impl std::fmt::Display, message: impl std::fmt::Display) -> Self {
        OutlineError::FileSystem {
            path: path.to_string(),
            message: message.to_string(),
        }
    }
}
