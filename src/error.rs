//! Error types for the game controller and the server around it.

use derive_more::{Display, Error, From};

/// Out-of-range requests against the controller.
///
/// The browser only offers targets the controller produced, so these signal a
/// misbehaving client rather than a game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    #[display("move {requested} does not exist (history holds {len} entries)")]
    NoSuchMove { requested: usize, len: usize },
    #[display("cell {index} is off the board")]
    CellOutOfRange { index: usize },
}

/// A client frame that could not be turned into a command.
#[derive(Debug, Display, Error)]
#[display("Malformed client message: {source}")]
pub struct MessageError {
    pub source: serde_json::Error,
}

impl From<serde_json::Error> for MessageError {
    fn from(source: serde_json::Error) -> Self {
        MessageError { source }
    }
}

/// Failures that stop a listener or a single connection.
#[derive(Debug, Display, Error, From)]
pub enum ServerError {
    #[display("I/O error: {_0}")]
    Io(#[error(source)] std::io::Error),
    #[display("WebSocket error: {_0}")]
    WebSocket(#[error(source)] tungstenite::Error),
    #[display("HTTP error: {_0}")]
    Http(#[error(source)] hyper::Error),
}
