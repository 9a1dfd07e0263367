//! Error types for the animator library

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("word list is empty")]
    EmptyWordList,

    #[error("word {index} is empty")]
    EmptyWord { index: usize },

    #[error("word {index} contains a control character")]
    ControlCharacter { index: usize },

    #[error("display target unavailable: {}", path.display())]
    TargetUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to display target: {0}")]
    Sink(#[from] std::io::Error),

    #[error("animator task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("invalid config at {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
