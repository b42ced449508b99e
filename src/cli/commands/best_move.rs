//! best-move command - ask the oracle for one move

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use super::{parse_board, parse_player_arg};
use crate::{
    oracle,
    tictactoe::{Coord, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Print the minimax-optimal move for a board")]
pub struct BestMoveArgs {
    /// Board as 9 cells in row-major order, e.g. "XX.OO...." or "XX./OO./..._O"
    pub board: String,

    /// Player to move (inferred from piece counts when omitted)
    #[arg(long, short = 'p', value_parser = parse_player_arg)]
    pub player: Option<Player>,

    /// Print the answer as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct BestMoveReport {
    board: String,
    player: Player,
    position: Option<usize>,
    coord: Option<Coord>,
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let state = parse_board(&args.board, args.player)?;
    let position = oracle::best_move(&state.cells, state.to_move)?;
    let coord = position.map(Coord::from_index).transpose()?;

    if args.json {
        let report = BestMoveReport {
            board: state.encode(),
            player: state.to_move,
            position,
            coord,
        };
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    match (position, coord) {
        (Some(position), Some(coord)) => {
            println!("{} plays {position} ({coord})", state.to_move)
        }
        _ => println!("no move: {}", state.encode()),
    }
    Ok(())
}
