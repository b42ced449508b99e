//! play command - a human against one of the strategies

use anyhow::Result;
use clap::Parser;
use dialoguer::{Confirm, Input};

use super::parse_player_arg;
use crate::{
    cli::output::format_board,
    strategy::{StrategyConfig, StrategyKind},
    tictactoe::{BoardState, Coord, Game, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the computer")]
pub struct PlayArgs {
    /// Computer strategy (random/easy, heuristic/medium, minimax/hard)
    #[arg(long, default_value = "minimax")]
    pub ai: StrategyKind,

    /// The mark you play
    #[arg(long, default_value = "x", value_parser = parse_player_arg)]
    pub human: Player,

    /// Random seed for the computer
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Parse a human move: a cell number `1-9` or `row col` with 1-based indices
pub fn parse_human_move(input: &str, state: &BoardState) -> std::result::Result<usize, String> {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();

    let parse_one = |token: &str| -> std::result::Result<usize, String> {
        token
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=9).contains(n))
            .ok_or_else(|| format!("'{token}' is not a number from 1 to 9"))
    };

    let position = match parts.as_slice() {
        [cell] => parse_one(cell)? - 1,
        [row, col] => {
            let (row, col) = (parse_one(row)?, parse_one(col)?);
            Coord::new(row - 1, col - 1)
                .map_err(|e| e.to_string())?
                .index()
        }
        _ => return Err("enter a cell 1-9 or 'row col'".to_string()),
    };

    if !state.is_empty(position) {
        return Err(format!("cell {} is taken", position + 1));
    }
    Ok(position)
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = StrategyConfig::new(args.ai);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut computer = config.build()?;

    loop {
        let mut game = Game::new();
        println!("\nYou are {} against {}.", args.human, computer.name());

        while let Some(to_move) = game.to_move()? {
            let state = game.current_state()?;
            let position = if to_move == args.human {
                println!("\n{}\n", format_board(&state, true));
                let answer: String = Input::new()
                    .with_prompt(format!("{to_move} to move"))
                    .validate_with(|input: &String| -> std::result::Result<(), String> {
                        parse_human_move(input, &state).map(|_| ())
                    })
                    .interact_text()?;
                parse_human_move(&answer, &state).map_err(anyhow::Error::msg)?
            } else {
                let position = computer.select_move(&state)?;
                println!("{} plays {}", computer.name(), position + 1);
                position
            };
            game.play(position)?;
        }

        let final_state = game.current_state()?;
        println!("\n{}\n", format_board(&final_state, false));
        match game.outcome {
            Some(GameOutcome::Win(winner)) if winner == args.human => println!("You win!"),
            Some(GameOutcome::Win(winner)) => println!("{winner} wins."),
            _ => println!("Draw."),
        }

        let again = Confirm::new()
            .with_prompt("Play again?")
            .default(true)
            .interact()?;
        if !again {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_numbers_are_one_based() {
        let state = BoardState::new();
        assert_eq!(parse_human_move("1", &state), Ok(0));
        assert_eq!(parse_human_move(" 9 ", &state), Ok(8));
    }

    #[test]
    fn row_col_pairs() {
        let state = BoardState::new();
        assert_eq!(parse_human_move("2 3", &state), Ok(5));
        assert_eq!(parse_human_move("3,1", &state), Ok(6));
    }

    #[test]
    fn rejects_out_of_range_and_taken() {
        let state = BoardState::from_string("X........").unwrap();
        assert!(parse_human_move("1", &state).is_err());
        assert!(parse_human_move("0", &state).is_err());
        assert!(parse_human_move("4 1", &state).is_err());
        assert!(parse_human_move("", &state).is_err());
        assert!(parse_human_move("one", &state).is_err());
    }
}
