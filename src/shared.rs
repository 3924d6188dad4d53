use thiserror::Error;

use crate::event::EmitError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid AST: {0}")]
    InvalidAst(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

impl AppError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}
