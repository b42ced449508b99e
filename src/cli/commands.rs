//! Subcommand implementations

pub mod analyze;
pub mod best_move;
pub mod matches;
pub mod play;

use anyhow::{Context, Result};

use crate::tictactoe::{BoardState, Player};

/// clap value parser for `x`/`o` flags
pub fn parse_player_arg(value: &str) -> std::result::Result<Player, String> {
    Player::parse(value, "command line").map_err(|e| e.to_string())
}

/// Parse a board argument, optionally overriding the player to move
pub(crate) fn parse_board(board: &str, player: Option<Player>) -> Result<BoardState> {
    let mut state =
        BoardState::from_string(board).with_context(|| format!("could not parse board '{board}'"))?;
    if let Some(player) = player {
        state.to_move = player;
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_override() {
        let state = parse_board("XX.OO....", Some(Player::O)).unwrap();
        assert_eq!(state.to_move, Player::O);
        let state = parse_board("XX.OO....", None).unwrap();
        assert_eq!(state.to_move, Player::X);
    }

    #[test]
    fn bad_board_has_context() {
        let err = parse_board("XX", None).unwrap_err();
        assert!(err.to_string().contains("could not parse board 'XX'"));
    }

    #[test]
    fn parses_player_tokens() {
        assert_eq!(parse_player_arg("o").unwrap(), Player::O);
        assert!(parse_player_arg("z").is_err());
    }
}
