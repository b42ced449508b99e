//! analyze command - terminal status and per-move minimax scores

use anyhow::Result;
use clap::Parser;

use super::{parse_board, parse_player_arg};
use crate::{
    cli::output::{describe_terminal, format_board, print_kv, print_section},
    oracle,
    tictactoe::{CellClass, Player, validate_cells},
};

#[derive(Parser, Debug)]
#[command(about = "Score every legal move of a board")]
pub struct AnalyzeArgs {
    /// Board as 9 cells in row-major order
    pub board: String,

    /// Player to move (inferred from piece counts when omitted)
    #[arg(long, short = 'p', value_parser = parse_player_arg)]
    pub player: Option<Player>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let state = parse_board(&args.board, args.player)?;
    validate_cells(&state.cells)?;

    print_section(&format!("Position {}", state.encode()));
    println!("{}", format_board(&state, false));
    println!();

    let terminal = oracle::evaluate_terminal(&state.cells);
    print_kv("Status", &describe_terminal(terminal));
    print_kv("To move", &state.to_move.to_string());
    if terminal.is_over() {
        return Ok(());
    }

    let best = oracle::best_move(&state.cells, state.to_move)?;
    if let Some(best) = best {
        print_kv("Best move", &best.to_string());
    }

    println!("\n  {:>4}  {:>10}  {:>7}  {:>5}", "pos", "coord", "class", "score");
    for scored in oracle::score_moves(&state.cells, state.to_move)? {
        let marker = if Some(scored.position) == best { " *" } else { "" };
        println!(
            "  {:>4}  {:>10}  {:>7}  {:>5}{marker}",
            scored.position,
            format!("({}, {})", scored.coord.row, scored.coord.col),
            format!("{:?}", CellClass::of(scored.position)).to_lowercase(),
            scored.score
        );
    }
    Ok(())
}
