//! Terminal-state detection for a single board.

use crate::board::{Board, Cell, Player};
use tracing::instrument;

/// The eight winning triples, rows first, then columns, then diagonals.
///
/// When a board contains more than one complete triple the first one in this
/// order is the one reported.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// Every cell is taken and no line is complete.
    Draw,
    /// `player` owns every cell of `line`.
    Win { player: Player, line: [usize; 3] },
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Evaluates `board` against the fixed winning lines.
#[instrument(level = "trace", ret)]
pub fn evaluate(board: &Board) -> Outcome {
    let cells = board.cells();
    let winner = LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Taken(player) if cells[b] == cells[a] && cells[c] == cells[a] => {
            Some(Outcome::Win { player, line: [a, b, c] })
        }
        _ => None,
    });
    match winner {
        Some(outcome) => outcome,
        None if board.is_full() => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player::{O, X};

    fn board_of(marks: &str) -> Board {
        Board::parse(marks).expect("test board should parse")
    }

    #[test]
    fn empty_board_is_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn every_line_is_detected() {
        for line in LINES {
            let mut cells = [Cell::Empty; 9];
            for index in line {
                cells[index] = Cell::Taken(O);
            }
            let board = Board::from_cells(cells);
            assert_eq!(evaluate(&board), Outcome::Win { player: O, line });
        }
    }

    #[test]
    fn first_listed_line_wins_a_tie() {
        // top row and left column both complete
        let board = board_of("XXXX..X..");
        assert_eq!(
            evaluate(&board),
            Outcome::Win { player: X, line: [0, 1, 2] }
        );

        // middle column and main diagonal both complete
        let board = board_of("OO..O..OO");
        assert_eq!(
            evaluate(&board),
            Outcome::Win { player: O, line: [1, 4, 7] }
        );
    }

    #[test]
    fn full_board_without_line_is_draw() {
        assert_eq!(evaluate(&board_of("XOOOXXOXO")), Outcome::Draw);
        assert_eq!(evaluate(&board_of("XOXXOOOXX")), Outcome::Draw);
    }

    #[test]
    fn win_on_full_board_beats_draw() {
        let outcome = evaluate(&board_of("XOXOXOOXX"));
        assert_eq!(outcome, Outcome::Win { player: X, line: [0, 4, 8] });
        assert!(outcome.is_terminal());
    }

    #[test]
    fn mixed_line_does_not_win() {
        assert_eq!(evaluate(&board_of("XXO......")), Outcome::InProgress);
        assert_eq!(Outcome::InProgress.winning_line(), None);
    }
}
