//! match command - play two strategies against each other

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::parse_player_arg;
use crate::{
    cli::{
        config::MatchSettings,
        output::{percent, print_kv, print_section},
    },
    pipeline::{JsonlObserver, MatchPipeline, ProgressObserver},
    strategy::{StrategyConfig, StrategyKind},
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Play a match between two strategies")]
pub struct MatchArgs {
    /// JSON settings file; flags below override it
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Strategy playing X (random/easy, heuristic/medium, minimax/hard)
    #[arg(long)]
    pub x: Option<StrategyKind>,

    /// Strategy playing O
    #[arg(long)]
    pub o: Option<StrategyKind>,

    /// Number of games
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Player opening the first game
    #[arg(long, value_parser = parse_player_arg)]
    pub first: Option<Player>,

    /// Swap the opening player every game
    #[arg(long)]
    pub alternate: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Write the match result as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Write every game as a JSON line
    #[arg(long)]
    pub jsonl: Option<PathBuf>,
}

impl MatchArgs {
    /// File settings (or defaults) with flags applied on top
    pub fn settings(&self) -> Result<MatchSettings> {
        let mut settings = match &self.config {
            Some(path) => MatchSettings::load(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => MatchSettings::default(),
        };

        if let Some(kind) = self.x {
            settings.x = StrategyConfig { kind, ..settings.x };
        }
        if let Some(kind) = self.o {
            settings.o = StrategyConfig { kind, ..settings.o };
        }
        if let Some(games) = self.games {
            settings.games = games;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if let Some(first) = self.first {
            settings.first_player = first;
        }
        settings.alternate_first |= self.alternate;
        settings.progress &= !self.no_progress;

        settings.validate()?;
        Ok(settings)
    }
}

pub fn execute(args: MatchArgs) -> Result<()> {
    let settings = args.settings()?;

    let mut x = settings.x.build()?;
    let mut o = settings.o.build()?;

    print_section("Match");
    print_kv("X", x.name());
    print_kv("O", o.name());
    print_kv("Games", &settings.games.to_string());
    if let Some(seed) = settings.seed {
        print_kv("Seed", &seed.to_string());
    }

    let mut pipeline = MatchPipeline::new(settings.match_config());
    if settings.progress {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.jsonl {
        pipeline = pipeline.with_observer(Box::new(JsonlObserver::new(path)?));
    }

    let result = pipeline.run(x.as_mut(), o.as_mut())?;

    print_section("Result");
    print_kv(
        &format!("X wins ({})", result.x_name),
        &format!("{} ({})", result.x_wins, percent(result.x_win_rate)),
    );
    print_kv(
        &format!("O wins ({})", result.o_name),
        &format!("{} ({})", result.o_wins, percent(result.o_win_rate)),
    );
    print_kv(
        "Draws",
        &format!("{} ({})", result.draws, percent(result.draw_rate)),
    );

    if let Some(path) = &args.export {
        result.save(path)?;
        println!("\n✓ Result exported to: {}", path.display());
    }
    if let Some(path) = &args.jsonl {
        println!("✓ Games written to: {}", path.display());
    }

    Ok(())
}
