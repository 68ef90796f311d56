use alloc::string::ToString;
use serde::{Deserialize, Serialize};

use crate::*;

/// Delays driving the deferred parts of a game, all in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// How long a face-up pair stays visible before it is resolved.
    pub match_check_delay_ms: Millis,
    /// Overrides `match_check_delay_ms` when the pair turns out to be a mismatch. Unset by default, the browser
    /// version of the game left a mismatched pair up for 1500 ms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mismatch_delay_ms: Option<Millis>,
    pub hint_duration_ms: Millis,
    pub peek_duration_ms: Millis,
    /// Period of the game clock, each tick adds this many milliseconds of elapsed time.
    pub tick_interval_ms: Millis,
}

impl GameConfig {
    pub const DEFAULT: Self = Self {
        match_check_delay_ms: 1000,
        mismatch_delay_ms: None,
        hint_duration_ms: 3000,
        peek_duration_ms: 2000,
        tick_interval_ms: 1000,
    };

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).map_err(|err| {
            log::warn!("Rejected game config: {}", err);
            GameError::MalformedConfig(err.to_string())
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(GameError::InvalidConfig);
        }
        Ok(())
    }

    /// Delay before resolving a pair, depending on whether it will match.
    pub const fn resolve_delay_ms(&self, is_match: bool) -> Millis {
        match (is_match, self.mismatch_delay_ms) {
            (false, Some(delay)) => delay,
            _ => self.match_check_delay_ms,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
