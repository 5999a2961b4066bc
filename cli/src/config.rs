use engine::config::Validate;
use engine::games::tictactoe::Difficulty;
use serde::{Deserialize, Serialize};

const MAX_BOT_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub seed: Option<u64>,
    pub bot_delay_ms: u64,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {}",
                MAX_BOT_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            seed: None,
            bot_delay_ms: 400,
        }
    }
}
