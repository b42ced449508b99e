//! Output formatting for CLI

use crate::{
    oracle::Terminal,
    tictactoe::{BoardState, Cell},
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render the board as a grid; empty cells show their 1-based number
/// when `numbered` is set
pub fn format_board(state: &BoardState, numbered: bool) -> String {
    let mut out = String::new();
    for (r, row) in state.to_rows().iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(c, &cell)| match cell {
                Cell::Empty if numbered => (r * 3 + c + 1).to_string(),
                other => other.to_char().to_string(),
            })
            .collect();
        out.push_str(&format!(" {} ", cells.join(" | ")));
        if r < 2 {
            out.push_str("\n---+---+---\n");
        }
    }
    out
}

pub fn describe_terminal(terminal: Terminal) -> String {
    match terminal {
        Terminal::Win(player) => format!("{player} wins"),
        Terminal::Draw => "draw".to_string(),
        Terminal::Ongoing => "in progress".to_string(),
    }
}

/// Format a rate as a percentage with one decimal
pub fn percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_board_shows_free_cells() {
        let state = BoardState::from_string("X...O....").unwrap();
        let rendered = format_board(&state, true);
        assert!(rendered.starts_with(" X | 2 | 3 "));
        assert!(rendered.contains(" 4 | O | 6 "));
        assert!(rendered.ends_with(" 7 | 8 | 9 "));
    }

    #[test]
    fn plain_board_uses_dots() {
        let state = BoardState::from_string("X...O....").unwrap();
        assert!(format_board(&state, false).starts_with(" X | . | . "));
    }

    #[test]
    fn percent_format() {
        assert_eq!(percent(0.5), "50.0%");
        assert_eq!(percent(1.0 / 3.0), "33.3%");
    }
}
