use crate::board::CellIndex;
use crate::error::GameError;
use crate::game::Game;
use crate::message::{message_send, multi_message_send, ClientMessage, ServerMessage};
use futures_channel::mpsc::UnboundedSender;
use std::net::SocketAddr;
use tracing::{debug, info, instrument, warn};
use tungstenite::Message;

/// One browser tab: a private game plus the queue feeding its socket.
pub struct GameSession {
    game: Game,
    addr: SocketAddr,
    sender: UnboundedSender<Message>,
}

impl GameSession {
    pub fn new(addr: SocketAddr, sender: UnboundedSender<Message>) -> GameSession {
        GameSession {
            game: Game::new(),
            addr,
            sender,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Sends the opening view.
    pub fn start_game(&self) {
        info!(addr = %self.addr, "Starting game");
        self.show();
    }

    /// Handles one frame from the socket. Every text frame is answered with a
    /// fresh view, preceded by an error when the frame was unusable.
    #[instrument(skip_all, fields(addr = %self.addr))]
    pub fn process_player_input(&mut self, input: &Message) {
        let text = match input {
            Message::Text(text) => text.as_str(),
            Message::Close(_) => {
                debug!("Client closing");
                return;
            }
            other => {
                debug!(len = other.len(), "Ignoring non-text frame");
                return;
            }
        };
        debug!(%text, "Received a message");

        let outcome = ClientMessage::decode(text)
            .map_err(|err| err.to_string())
            .and_then(|command| self.apply(command).map_err(|err| err.to_string()));
        match outcome {
            Ok(()) => self.show(),
            Err(text) => {
                warn!(%text, "Rejected client input");
                multi_message_send(&self.sender, &[ServerMessage::error(text), self.view_message()]);
            }
        }
    }

    /// Routes one command to the controller.
    pub fn apply(&mut self, command: ClientMessage) -> Result<(), GameError> {
        match command {
            ClientMessage::CellClick { cell } => {
                if self.game.play(CellIndex::new(cell)?) {
                    info!(addr = %self.addr, cell, status = %self.game.status(), "Board updated");
                }
            }
            ClientMessage::HistoryClick { target } => self.game.jump_to(target)?,
            ClientMessage::ToggleSort => self.game.toggle_sort_order(),
            ClientMessage::Refresh => {}
        }
        Ok(())
    }

    pub fn close_session(&self) {
        info!(
            addr = %self.addr,
            moves = self.game.history().len() - 1,
            status = %self.game.status(),
            "Session closed"
        );
    }

    fn show(&self) {
        message_send(&self.sender, &self.view_message());
    }

    fn view_message(&self) -> ServerMessage {
        ServerMessage::Show {
            view: self.game.view(),
        }
    }
}
