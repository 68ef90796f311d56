use alloc::string::String;
use thiserror::Error;

use crate::CardId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid card id {0}")]
    InvalidCardId(CardId),
    #[error("Layout must hold every value exactly twice")]
    InvalidLayout,
    #[error("Tick interval must be greater than zero")]
    InvalidConfig,
    #[error("Malformed configuration: {0}")]
    MalformedConfig(String),
}

pub type Result<T> = core::result::Result<T, GameError>;
