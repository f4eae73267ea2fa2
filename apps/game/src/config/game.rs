use std::env;

use crate::error::AppError;

/// Game runtime configuration.
///
/// All settings are optional; a fresh OS-entropy game needs no environment
/// at all.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Fixed RNG seed for the shuffle and tie-break source.
    ///
    /// `None` means OS entropy. Setting `NOMINATION_SEED` makes a whole
    /// game reproducible (deal order and trump-redecide tie-breaks).
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let seed = match env::var("NOMINATION_SEED") {
            Ok(raw) => Some(parse_seed(&raw)?),
            Err(_) => None,
        };

        Ok(Self { seed })
    }
}

fn parse_seed(raw: &str) -> Result<u64, AppError> {
    raw.trim().parse::<u64>().map_err(|_| {
        AppError::config(format!(
            "NOMINATION_SEED must be an unsigned integer, got: '{raw}'"
        ))
    })
}
