//! Move-selection strategies (adapters for [`crate::ports::Strategy`])
//!
//! The set of strategies is closed: [`StrategyKind`] names every variant
//! and [`StrategyConfig`] selects one explicitly for each call site.

pub mod heuristic;
pub mod minimax;
pub mod random;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use heuristic::HeuristicStrategy;
pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;

use crate::{Result, ports::Strategy, tictactoe::BoardState};

/// Available strategies, from weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Uniform over empty cells ("easy")
    Random,
    /// Win, else block, else center/corner/side ("medium")
    Heuristic,
    /// Full minimax through the oracle ("hard")
    #[default]
    Minimax,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Random,
        StrategyKind::Heuristic,
        StrategyKind::Minimax,
    ];

    /// Creates a boxed strategy named after the kind
    pub fn into_boxed_strategy(self) -> Box<dyn Strategy> {
        let name = self.to_string();
        match self {
            StrategyKind::Random => Box::new(RandomStrategy::new(name)),
            StrategyKind::Heuristic => Box::new(HeuristicStrategy::new(name)),
            StrategyKind::Minimax => Box::new(MinimaxStrategy::new(name)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrategyKind::Random => "random",
            StrategyKind::Heuristic => "heuristic",
            StrategyKind::Minimax => "minimax",
        };
        f.write_str(label)
    }
}

impl FromStr for StrategyKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalised = s.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "random" | "easy" => Ok(StrategyKind::Random),
            "heuristic" | "medium" => Ok(StrategyKind::Heuristic),
            "minimax" | "hard" | "optimal" => Ok(StrategyKind::Minimax),
            _ => Err(crate::Error::ParseStrategy {
                input: s.to_string(),
                expected: "random/easy, heuristic/medium, minimax/hard".to_string(),
            }),
        }
    }
}

/// Explicit strategy selection passed to [`choose_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Which strategy plays
    pub kind: StrategyKind,
    /// Random seed; only the random strategy consumes it
    #[serde(default)]
    pub seed: Option<u64>,
}

impl StrategyConfig {
    pub fn new(kind: StrategyKind) -> Self {
        Self { kind, seed: None }
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the configured strategy, seeded when a seed is set
    pub fn build(&self) -> Result<Box<dyn Strategy>> {
        let mut strategy = self.kind.into_boxed_strategy();
        if let Some(seed) = self.seed {
            strategy.set_rng_seed(seed)?;
        }
        Ok(strategy)
    }
}

/// Select a move for `state.to_move` with the configured strategy.
///
/// Returns `Ok(None)` when the state is terminal.
pub fn choose_move(state: &BoardState, config: &StrategyConfig) -> Result<Option<usize>> {
    if state.is_terminal() {
        return Ok(None);
    }
    let mut strategy = config.build()?;
    strategy.select_move(state).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_difficulties() {
        assert_eq!("easy".parse::<StrategyKind>().unwrap(), StrategyKind::Random);
        assert_eq!(
            " Medium ".parse::<StrategyKind>().unwrap(),
            StrategyKind::Heuristic
        );
        assert_eq!("HARD".parse::<StrategyKind>().unwrap(), StrategyKind::Minimax);
        for kind in StrategyKind::ALL {
            assert_eq!(kind.to_string().parse::<StrategyKind>().unwrap(), kind);
        }
        let err = "genius".parse::<StrategyKind>().unwrap_err();
        assert!(err.to_string().contains("genius"));
    }

    #[test]
    fn boxed_strategy_is_named_after_kind() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.into_boxed_strategy().name(), kind.to_string());
        }
    }

    #[test]
    fn choose_move_on_terminal_state_is_none() {
        let state = BoardState::from_string("XXXOO...._O").unwrap();
        for kind in StrategyKind::ALL {
            assert_eq!(choose_move(&state, &StrategyConfig::new(kind)).unwrap(), None);
        }
    }

    #[test]
    fn choose_move_with_seed_is_reproducible() {
        let state = BoardState::new();
        let config = StrategyConfig::new(StrategyKind::Random).with_seed(7);
        let first = choose_move(&state, &config).unwrap();
        for _ in 0..10 {
            assert_eq!(choose_move(&state, &config).unwrap(), first);
        }
    }

    #[test]
    fn config_deserializes_without_seed() {
        let config: StrategyConfig = serde_json::from_str(r#"{"kind":"heuristic"}"#).unwrap();
        assert_eq!(config, StrategyConfig::new(StrategyKind::Heuristic));
    }
}
