//! Match pipeline: repeated games between two strategies

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Result,
    ports::{Observer, Strategy},
    tictactoe::{Game, GameOutcome, Player},
};

/// Match configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: usize,

    /// Random seed; X gets `seed`, O gets `seed + 1`
    pub seed: Option<u64>,

    /// Which player opens the first game
    pub first_player: Player,

    /// Swap the opening player after every game
    #[serde(default)]
    pub alternate_first: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 100,
            seed: None,
            first_player: Player::X,
            alternate_first: false,
        }
    }
}

/// Score after a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Strategy names
    pub x_name: String,
    pub o_name: String,

    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,

    pub x_win_rate: f64,
    pub o_win_rate: f64,
    pub draw_rate: f64,
}

impl MatchResult {
    /// Create a result, deriving the rates from the counts
    pub fn new(x_name: &str, o_name: &str, x_wins: usize, o_wins: usize, draws: usize) -> Self {
        let total_games = x_wins + o_wins + draws;
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            x_name: x_name.to_string(),
            o_name: o_name.to_string(),
            total_games,
            x_wins,
            o_wins,
            draws,
            x_win_rate: rate(x_wins),
            o_win_rate: rate(o_wins),
            draw_rate: rate(draws),
        }
    }

    /// Games won by `player`
    pub fn wins_for(&self, player: Player) -> usize {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Plays a strategy for X against a strategy for O
pub struct MatchPipeline {
    config: MatchConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl MatchPipeline {
    /// Create a new match pipeline
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run every configured game and return the score
    pub fn run(&mut self, x: &mut dyn Strategy, o: &mut dyn Strategy) -> Result<MatchResult> {
        if let Some(seed) = self.config.seed {
            x.set_rng_seed(seed)?;
            o.set_rng_seed(seed.wrapping_add(1))?;
        }

        info!(
            x = x.name(),
            o = o.name(),
            games = self.config.num_games,
            "match started"
        );

        let played = self.play_games(x, o);

        let mut finished = Ok(());
        for observer in &mut self.observers {
            let ended = observer.on_match_end();
            if finished.is_ok() {
                finished = ended;
            }
        }
        let (x_wins, o_wins, draws) = played?;
        finished?;

        let result = MatchResult::new(x.name(), o.name(), x_wins, o_wins, draws);
        info!(
            x_wins = result.x_wins,
            o_wins = result.o_wins,
            draws = result.draws,
            "match finished"
        );
        Ok(result)
    }

    /// Play every game, returning X wins, O wins and draws.
    ///
    /// Stops at the first error; `run` still ends the match for the observers.
    fn play_games(
        &mut self,
        x: &mut dyn Strategy,
        o: &mut dyn Strategy,
    ) -> Result<(usize, usize, usize)> {
        for observer in &mut self.observers {
            observer.on_match_start(self.config.num_games)?;
        }

        let mut x_wins = 0;
        let mut o_wins = 0;
        let mut draws = 0;

        for game_num in 0..self.config.num_games {
            let first = self.first_player_for(game_num);
            let game = self.play_game(game_num, first, x, o)?;
            let outcome = game.outcome.ok_or(crate::Error::NoValidMoves)?;

            match outcome {
                GameOutcome::Win(Player::X) => x_wins += 1,
                GameOutcome::Win(Player::O) => o_wins += 1,
                GameOutcome::Draw => draws += 1,
            }
            debug!(game_num, ?outcome, moves = ?game.positions(), "game finished");

            for observer in &mut self.observers {
                observer.on_game_end(game_num, outcome)?;
            }
        }

        Ok((x_wins, o_wins, draws))
    }

    fn first_player_for(&self, game_num: usize) -> Player {
        if self.config.alternate_first && !game_num.is_multiple_of(2) {
            self.config.first_player.opponent()
        } else {
            self.config.first_player
        }
    }

    /// Play one game to completion and return its record
    pub fn play_game(
        &mut self,
        game_num: usize,
        first_player: Player,
        x: &mut dyn Strategy,
        o: &mut dyn Strategy,
    ) -> Result<Game> {
        for observer in &mut self.observers {
            observer.on_game_start(game_num)?;
        }

        let mut game = Game::new_with_player(first_player);
        let mut state = game.current_state()?;
        let mut step_num = 0;

        while game.outcome.is_none() {
            let strategy: &mut dyn Strategy = match state.to_move {
                Player::X => &mut *x,
                Player::O => &mut *o,
            };
            let move_pos = strategy.select_move(&state)?;

            for observer in &mut self.observers {
                observer.on_move(game_num, step_num, &state, move_pos)?;
            }

            state = game.play(move_pos)?;
            step_num += 1;
        }

        Ok(game)
    }
}
