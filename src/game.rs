//! History-aware game controller.
//!
//! The controller keeps every board the game has passed through. Jumping back
//! only moves the pointer; playing from an earlier position throws away the
//! boards after it before recording the new one.

use crate::board::{Board, CellIndex, Player};
use crate::error::GameError;
use crate::outcome::Outcome;
use serde::Serialize;
use tracing::{debug, instrument};

/// One recorded position. Entry 0 is the empty board and has no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    board: Board,
    last_move: Option<CellIndex>,
}

impl HistoryEntry {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn last_move(&self) -> Option<CellIndex> {
        self.last_move
    }
}

/// One row of the navigable move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveDescription {
    /// History index a click on this row jumps to.
    pub target: usize,
    pub label: String,
    /// Whether this row is the position currently shown.
    pub active: bool,
}

/// Everything the browser needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub squares: [Option<Player>; 9],
    pub status: String,
    pub winning_line: Vec<usize>,
    pub moves: Vec<MoveDescription>,
    pub current_move: usize,
    pub ascending: bool,
    pub sort_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: Vec<HistoryEntry>,
    current_move: usize,
    ascending: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Game {
        Game {
            history: vec![HistoryEntry {
                board: Board::new(),
                last_move: None,
            }],
            current_move: 0,
            ascending: true,
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn ascending(&self) -> bool {
        self.ascending
    }

    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move].board
    }

    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    pub fn outcome(&self) -> Outcome {
        self.current_board().outcome()
    }

    /// Places the next player's mark at `cell`.
    ///
    /// Returns `false` and leaves the game untouched when the cell is taken or
    /// the shown board is already decided.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play(&mut self, cell: CellIndex) -> bool {
        let player = self.next_player();
        let board = match self.current_board().apply_move(cell, player) {
            Ok(board) => board,
            Err(rejected) => {
                debug!(%rejected, "Ignoring move");
                return false;
            }
        };
        debug_assert!(board.is_balanced());

        self.history.truncate(self.current_move + 1);
        self.history.push(HistoryEntry {
            board,
            last_move: Some(cell),
        });
        self.current_move = self.history.len() - 1;
        debug!(%player, "Move recorded");
        true
    }

    /// Shows the board recorded at `target` without touching the history.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, target: usize) -> Result<(), GameError> {
        if target >= self.history.len() {
            return Err(GameError::NoSuchMove {
                requested: target,
                len: self.history.len(),
            });
        }
        self.current_move = target;
        Ok(())
    }

    pub fn toggle_sort_order(&mut self) {
        self.ascending = !self.ascending;
    }

    pub fn describe_moves(&self) -> Vec<MoveDescription> {
        let mut moves: Vec<MoveDescription> = self
            .history
            .iter()
            .enumerate()
            .map(|(target, entry)| MoveDescription {
                target,
                label: match entry.last_move {
                    Some(cell) => format!("Go to move #{target} ({}, {})", cell.row(), cell.col()),
                    None => String::from("Go to game start"),
                },
                active: target == self.current_move,
            })
            .collect();
        if !self.ascending {
            moves.reverse();
        }
        moves
    }

    pub fn status(&self) -> String {
        match self.outcome() {
            Outcome::Win { player, .. } => format!("Winner: {player}"),
            Outcome::Draw => String::from("Draw"),
            Outcome::InProgress => format!("Next player: {}", self.next_player()),
        }
    }

    /// Cells to highlight on the shown board; empty unless someone has won.
    pub fn winning_line(&self) -> Vec<usize> {
        self.outcome()
            .winning_line()
            .map(Vec::from)
            .unwrap_or_default()
    }

    pub fn sort_label(&self) -> &'static str {
        if self.ascending {
            "Sort Descending"
        } else {
            "Sort Ascending"
        }
    }

    pub fn view(&self) -> GameView {
        let mut squares = [None; 9];
        for (square, cell) in squares.iter_mut().zip(self.current_board().cells()) {
            *square = cell.mark();
        }
        GameView {
            squares,
            status: self.status(),
            winning_line: self.winning_line(),
            moves: self.describe_moves(),
            current_move: self.current_move,
            ascending: self.ascending,
            sort_label: self.sort_label(),
        }
    }
}
