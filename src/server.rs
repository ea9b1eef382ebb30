//! Listeners for the page (HTTP) and the game socket (WebSocket).
//!
//! Every WebSocket connection gets its own [`GameSession`]; nothing is shared
//! between connections apart from the read-only static resources.

use crate::error::ServerError;
use crate::resources::StaticResource;
use crate::session::GameSession;
use futures_channel::mpsc::unbounded;
use futures_util::future::{self, Either};
use futures_util::{pin_mut, StreamExt, TryStreamExt};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, ALLOW, CONTENT_TYPE};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, instrument, warn};

/// Answers one HTTP request from the static resources.
pub fn route<B>(request: &Request<B>, resources: &StaticResource) -> Response<Full<Bytes>> {
    if !matches!(*request.method(), Method::GET | Method::HEAD) {
        let mut response = respond(StatusCode::METHOD_NOT_ALLOWED, "text/plain", Bytes::new());
        response
            .headers_mut()
            .insert(ALLOW, HeaderValue::from_static("GET, HEAD"));
        return response;
    }
    match resources.lookup(request.uri().path()) {
        Some((content_type, body)) => respond(StatusCode::OK, content_type, body),
        None => respond(
            StatusCode::NOT_FOUND,
            "text/plain; charset=utf-8",
            Bytes::from_static(b"Not found"),
        ),
    }
}

fn respond(status: StatusCode, content_type: &'static str, body: Bytes) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

/// Serves the page until the listener fails.
pub async fn serve_http(
    listener: TcpListener,
    resources: &'static StaticResource,
) -> Result<(), ServerError> {
    info!(addr = %listener.local_addr()?, "Serving page");
    loop {
        let (stream, peer) = listener.accept().await?;
        let io = TokioIo::new(stream);
        tokio::spawn(async move {
            let service = service_fn(move |request| async move {
                debug!(%peer, method = %request.method(), path = request.uri().path(), "HTTP request");
                Ok::<_, Infallible>(route(&request, resources))
            });
            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                warn!(%peer, %err, "HTTP connection failed");
            }
        });
    }
}

/// Accepts WebSocket clients, one game per connection.
pub async fn serve_ws(listener: TcpListener) -> Result<(), ServerError> {
    info!(addr = %listener.local_addr()?, "Accepting game connections");
    loop {
        let (stream, addr) = listener.accept().await?;
        tokio::spawn(async move {
            if let Err(err) = handle_connection(stream, addr).await {
                warn!(%addr, %err, "Game connection ended with an error");
            }
        });
    }
}

#[instrument(skip(raw_stream))]
async fn handle_connection(raw_stream: TcpStream, addr: SocketAddr) -> Result<(), ServerError> {
    debug!("Incoming TCP connection");
    let ws_stream = tokio_tungstenite::accept_async(raw_stream).await?;
    info!("WebSocket connection established");

    let (outgoing, incoming) = ws_stream.split();
    let (tx, rx) = unbounded();
    let mut session = GameSession::new(addr, tx);
    session.start_game();

    let result = {
        let outgoing_messages = rx.map(Ok).forward(outgoing);
        let input_messages = incoming.try_for_each(|msg| {
            session.process_player_input(&msg);
            future::ok(())
        });
        pin_mut!(outgoing_messages, input_messages);
        match future::select(outgoing_messages, input_messages).await {
            Either::Left((result, _)) => result,
            Either::Right((result, _)) => result,
        }
    };

    session.close_session();
    result.map_err(ServerError::from)
}
