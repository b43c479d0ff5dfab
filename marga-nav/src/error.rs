//! Error types for MargaNav

use marga::ConfigError;
use marga::ConfigLoadError;
use marga::executor::ExecutorError;
use thiserror::Error;

/// MargaNav error type
#[derive(Error, Debug)]
pub enum NavError {
    #[error("Configuration error: {0}")]
    ConfigLoad(#[from] ConfigLoadError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Execution failed: {0}")]
    Executor(#[from] ExecutorError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Planner returned no path")]
    NoPath,
}

pub type Result<T> = std::result::Result<T, NavError>;
