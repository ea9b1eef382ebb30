//! JSON frames exchanged with the browser.
//!
//! Both directions are internally tagged by a `type` field, e.g.
//! `{"type": "CELL_CLICK", "cell": 4}` from the client and
//! `{"type": "SHOW", "view": {...}}` from the server.

use crate::error::MessageError;
use crate::game::GameView;
use futures_channel::mpsc::{TrySendError, UnboundedSender};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};
use tungstenite::Message;

/// Commands the browser sends, one per user interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientMessage {
    /// A click on board cell `cell`.
    CellClick { cell: usize },
    /// A click on the move-list row that jumps to `target`.
    HistoryClick { target: usize },
    ToggleSort,
    /// Asks for the current view without changing anything.
    Refresh,
}

impl ClientMessage {
    pub fn decode(text: &str) -> Result<ClientMessage, MessageError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerMessage {
    Show { view: GameView },
    Error { text: String },
}

impl ServerMessage {
    pub fn error(text: impl Into<String>) -> ServerMessage {
        ServerMessage::Error { text: text.into() }
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

pub fn multi_message_send(sender: &UnboundedSender<Message>, messages: &[ServerMessage]) {
    for message in messages {
        message_send(sender, message);
    }
}

pub fn message_send(sender: &UnboundedSender<Message>, message: &ServerMessage) {
    let text = match message.encode() {
        Ok(text) => text,
        Err(err) => {
            warn!(%err, "Could not encode server message");
            return;
        }
    };
    trace!(%text, "Sending message");
    sender
        .unbounded_send(Message::Text(text))
        .unwrap_or_else(sent_fail_notify);
}

fn sent_fail_notify(err: TrySendError<Message>) {
    warn!(disconnected = err.is_disconnected(), "Could not send message");
}
