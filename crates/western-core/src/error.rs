use std::result;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WesternError {
    #[error("Unknown shooting hand: {0}")]
    UnknownShootingHand(String),
}

pub type Result<T> = result::Result<T, WesternError>;
