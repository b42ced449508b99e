//! Behavioural properties of the minimax oracle

mod common;

use common::{cells, enumerate_outcomes, random_positions};
use oxo::{
    BoardState, Error, Terminal, best_coord, best_move, evaluate_terminal, score_moves,
    tictactoe::{Cell, Coord, GameOutcome, Player},
};

mod known_positions {
    use super::*;

    #[test]
    fn empty_board_takes_center() {
        assert_eq!(best_move(&[Cell::Empty; 9], Player::X).unwrap(), Some(4));
        assert_eq!(best_move(&[Cell::Empty; 9], Player::O).unwrap(), Some(4));
    }

    #[test]
    fn reply_to_center_is_first_corner() {
        assert_eq!(best_move(&cells("....X...."), Player::O).unwrap(), Some(0));
    }

    #[test]
    fn reply_to_corner_is_center() {
        assert_eq!(best_move(&cells("..X......"), Player::O).unwrap(), Some(4));
    }

    #[test]
    fn takes_own_win_over_block() {
        // X X .
        // O O .
        // . . .
        assert_eq!(best_move(&cells("XX.OO...."), Player::O).unwrap(), Some(5));
        assert_eq!(best_move(&cells("XX.OO...."), Player::X).unwrap(), Some(2));
    }

    #[test]
    fn blocks_opponent_win() {
        // X X .
        // . O .
        // . . .
        assert_eq!(best_move(&cells("XX..O...."), Player::O).unwrap(), Some(2));
    }

    #[test]
    fn coordinate_form_matches_index() {
        assert_eq!(
            best_coord(&cells("XX.OO...."), Player::O).unwrap(),
            Some(Coord { row: 1, col: 2 })
        );
    }

    #[test]
    fn decided_boards_have_no_move() {
        assert_eq!(best_move(&cells("XXXOO...."), Player::O).unwrap(), None);
        assert_eq!(best_move(&cells("XOXXOOOXX"), Player::X).unwrap(), None);
        assert!(score_moves(&cells("XOXXOOOXX"), Player::X).unwrap().is_empty());
    }

    #[test]
    fn prefers_the_quicker_win() {
        // X . X
        // O O .
        // X . O   X to move: 1 wins now
        let scored = score_moves(&cells("X.XOO.X.O"), Player::X).unwrap();
        let one = scored.iter().find(|m| m.position == 1).unwrap();
        assert_eq!(one.score, 9);
        assert_eq!(best_move(&cells("X.XOO.X.O"), Player::X).unwrap(), Some(1));
    }
}

mod invalid_boards {
    use super::*;

    #[test]
    fn count_difference_over_one() {
        let err = best_move(&cells("XXX......_O"), Player::O).unwrap_err();
        assert!(matches!(err, Error::InvalidBoard { .. }));
    }

    #[test]
    fn both_players_won() {
        let err = best_move(&cells("XXXOOO..."), Player::X).unwrap_err();
        assert!(matches!(err, Error::InvalidBoard { .. }));
    }

    #[test]
    fn disjoint_double_win() {
        // X X X
        // O O .
        // X X X   cannot come from alternating play
        let board = [
            Cell::X,
            Cell::X,
            Cell::X,
            Cell::O,
            Cell::O,
            Cell::Empty,
            Cell::X,
            Cell::X,
            Cell::X,
        ];
        assert!(best_move(&board, Player::O).is_err());
    }
}

#[test]
fn deterministic_across_calls() {
    for state in random_positions(40, 7) {
        let first = best_move(&state.cells, state.to_move).unwrap();
        let second = best_move(&state.cells, state.to_move).unwrap();
        assert_eq!(first, second, "board {}", state.encode());
    }
}

#[test]
fn returns_legal_move_iff_game_in_progress() {
    for state in random_positions(60, 11) {
        let choice = best_move(&state.cells, state.to_move).unwrap();
        match evaluate_terminal(&state.cells) {
            Terminal::Ongoing => {
                let pos = choice.expect("ongoing board needs a move");
                assert_eq!(state.cells[pos], Cell::Empty, "board {}", state.encode());
            }
            _ => assert_eq!(choice, None, "board {}", state.encode()),
        }
    }
}

#[test]
fn caller_board_is_unchanged() {
    for state in random_positions(20, 3) {
        let before = state.cells;
        let _ = best_move(&state.cells, state.to_move).unwrap();
        let _ = score_moves(&state.cells, state.to_move).unwrap();
        assert_eq!(state.cells, before);
    }
}

#[test]
fn chosen_move_has_best_score() {
    for state in random_positions(30, 19) {
        if state.is_terminal() || state.marks_of(state.to_move) == 0 {
            continue;
        }
        let scored = score_moves(&state.cells, state.to_move).unwrap();
        let best = scored.iter().map(|m| m.score).max().unwrap();
        let chosen = best_move(&state.cells, state.to_move).unwrap().unwrap();
        let chosen_score = scored.iter().find(|m| m.position == chosen).unwrap().score;
        assert_eq!(chosen_score, best, "board {}", state.encode());
    }
}

#[test]
fn self_play_is_a_draw() {
    for first in [Player::X, Player::O] {
        let mut state = BoardState::new_with_player(first);
        while let Some(pos) = best_move(&state.cells, state.to_move).unwrap() {
            state = state.make_move(pos).unwrap();
        }
        assert_eq!(evaluate_terminal(&state.cells), Terminal::Draw);
    }
}

#[test]
fn never_loses_as_first_player() {
    let mut oracle = |s: &BoardState| best_move(&s.cells, s.to_move).unwrap().unwrap();
    let outcomes = enumerate_outcomes(BoardState::new(), Player::X, &mut oracle);
    assert!(!outcomes.is_empty());
    assert!(!outcomes.contains(&GameOutcome::Win(Player::O)));
}

#[test]
fn never_loses_as_second_player() {
    let mut oracle = |s: &BoardState| best_move(&s.cells, s.to_move).unwrap().unwrap();
    let outcomes = enumerate_outcomes(BoardState::new(), Player::O, &mut oracle);
    assert!(!outcomes.is_empty());
    assert!(!outcomes.contains(&GameOutcome::Win(Player::X)));
}
