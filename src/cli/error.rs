use std::io;

use gamesmith_config::ConfigError;
use gamesmith_core::{ApiError, EditorError, TransportError, WizardError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error("No user id set. Pass `--user <id>` or run `gamesmith config set user_id <id>`.")]
    MissingUser,
    #[error("Scripted input ran out before `{0}`")]
    ScriptExhausted(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error(transparent)]
    Editor(#[from] EditorError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

impl CommandError {
    /// Usage mistakes exit with status 2, everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::InvalidArguments(_) => 2,
            _ => 1,
        }
    }
}
