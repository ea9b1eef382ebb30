//! Tic-tac-toe with a navigable move history.
//!
//! [`outcome::evaluate`] classifies a board, [`board::Board::apply_move`]
//! produces the next board, and [`game::Game`] keeps every position so the
//! player can jump back and branch off. The remaining modules put that
//! controller behind a small HTTP + WebSocket server for the browser.

pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod message;
pub mod outcome;
pub mod resources;
pub mod server;
pub mod session;

pub use board::{Board, Cell, CellIndex, MoveRejected, Player};
pub use error::{GameError, MessageError, ServerError};
pub use game::{Game, GameView, HistoryEntry, MoveDescription};
pub use outcome::{evaluate, Outcome, LINES};
