use crate::error::{Result, WesternError};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which hand a cowboy draws with.
///
/// Serialized as lowercase `"left"`/`"right"`, and deserialization accepts
/// only that form. Parsing with [`FromStr`] is lenient and ignores case and
/// surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShootingHand {
    #[display("left")]
    Left,
    #[display("right")]
    Right,
}

impl FromStr for ShootingHand {
    type Err = WesternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(ShootingHand::Left),
            "right" => Ok(ShootingHand::Right),
            _ => Err(WesternError::UnknownShootingHand(s.to_string())),
        }
    }
}
