use crate::error::GameError;
use crate::outcome::{evaluate, Outcome};
use derive_more::{Display, Error};
use serde::Serialize;
use std::fmt;

/// One of the two players. X always moves first.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Display)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(&self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Player whose turn it is after `move_number` plies.
    pub fn for_move(move_number: usize) -> Self {
        if move_number % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    pub fn mark(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Taken(player) => Some(*player),
        }
    }
}

/// A position on the board, always in `0..9`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct CellIndex(u8);

impl CellIndex {
    pub fn new(index: usize) -> Result<Self, GameError> {
        if index < 9 {
            Ok(CellIndex(index as u8))
        } else {
            Err(GameError::CellOutOfRange { index })
        }
    }

    pub fn get(&self) -> usize {
        self.0 as usize
    }

    pub fn row(&self) -> usize {
        self.get() / 3
    }

    pub fn col(&self) -> usize {
        self.get() % 3
    }
}

impl TryFrom<usize> for CellIndex {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        CellIndex::new(index)
    }
}

impl From<CellIndex> for usize {
    fn from(index: CellIndex) -> usize {
        index.get()
    }
}

/// Why a move was refused. The controller swallows these; they exist for logging.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display, Error)]
pub enum MoveRejected {
    #[display("the game is already over")]
    GameOver,
    #[display("cell {cell} is already taken")]
    Occupied { cell: usize },
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    pub fn new() -> Board {
        Board { cells: [Cell::Empty; 9] }
    }

    /// Builds a board from raw cells without checking that the position is reachable.
    pub fn from_cells(cells: [Cell; 9]) -> Board {
        Board { cells }
    }

    /// Reads nine characters of `X`, `O` or `.` in row-major order.
    pub fn parse(layout: &str) -> Option<Board> {
        let mut cells = [Cell::Empty; 9];
        let mut chars = layout.chars().filter(|c| !c.is_whitespace());
        for cell in cells.iter_mut() {
            *cell = match chars.next()? {
                'X' | 'x' => Cell::Taken(Player::X),
                'O' | 'o' => Cell::Taken(Player::O),
                '.' | '_' => Cell::Empty,
                _ => return None,
            };
        }
        match chars.next() {
            Some(_) => None,
            None => Some(Board { cells }),
        }
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    pub fn cell(&self, index: CellIndex) -> Cell {
        self.cells[index.get()]
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Taken(player))
            .count()
    }

    /// True when O has as many marks as X or exactly one fewer.
    pub fn is_balanced(&self) -> bool {
        let x_count = self.count(Player::X);
        let o_count = self.count(Player::O);
        x_count == o_count || x_count == o_count + 1
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(self)
    }

    /// Returns a copy of this board with `player`'s mark at `index`.
    ///
    /// Refused when the board is already decided or the cell is taken; `self`
    /// is left untouched either way.
    pub fn apply_move(&self, index: CellIndex, player: Player) -> Result<Board, MoveRejected> {
        if self.outcome().is_terminal() {
            return Err(MoveRejected::GameOver);
        }
        if self.cell(index) != Cell::Empty {
            return Err(MoveRejected::Occupied { cell: index.get() });
        }
        let mut next = *self;
        next.cells[index.get()] = Cell::Taken(player);
        Ok(next)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, cell) in self.cells.iter().enumerate() {
            match cell.mark() {
                Some(player) => write!(f, "{player}")?,
                None => f.write_str(".")?,
            }
            if index % 3 == 2 && index != 8 {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
