//! Match settings: JSON file defaults overridden by command-line flags

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    pipeline::MatchConfig,
    strategy::{StrategyConfig, StrategyKind},
    tictactoe::Player,
};

/// Settings for the `match` command
///
/// Every field is optional in the file; missing ones take the defaults.
///
/// ```json
/// { "x": { "kind": "minimax" }, "o": { "kind": "random" }, "games": 500, "seed": 7 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    pub x: StrategyConfig,
    pub o: StrategyConfig,
    pub games: usize,
    pub seed: Option<u64>,
    pub first_player: Player,
    pub alternate_first: bool,
    pub progress: bool,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            x: StrategyConfig::new(StrategyKind::Minimax),
            o: StrategyConfig::new(StrategyKind::Random),
            games: 100,
            seed: None,
            first_player: Player::X,
            alternate_first: false,
            progress: true,
        }
    }
}

impl MatchSettings {
    /// Load settings from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| crate::Error::Io {
            operation: format!("open config {}", path.display()),
            source,
        })?;
        let settings: MatchSettings = serde_json::from_reader(file)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.games == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "games must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            num_games: self.games,
            seed: self.seed,
            first_player: self.first_player,
            alternate_first: self.alternate_first,
        }
    }
}
