//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Rendering engine error: {0}")]
    Engine(String),

    #[error("Window error: {0}")]
    Chrome(String),

    #[error("Rendering engine not attached")]
    NotInitialized,
}
