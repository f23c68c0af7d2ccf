use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::accept_async;
use tracing::{error, info, warn};
use tungstenite::protocol::Message as WsMessage;

use crate::client::Client;
use crate::config::Settings;
use crate::hub::HubHandle;
use crate::hub::message::Message;
use crate::transport::message::ClientMessage;

/// Accepts WebSocket connections and wires each one up to the hub.
pub async fn start_websocket_server(addr: String, hub: HubHandle, settings: Settings) {
    let listener = TcpListener::bind(&addr).await.expect("Can't bind");

    info!("WebSocket server listening on ws://{addr}");

    while let Ok((stream, _)) = listener.accept().await {
        let hub = hub.clone();
        let mailbox_capacity = settings.hub.mailbox_capacity;

        tokio::spawn(async move {
            handle_connection(stream, hub, mailbox_capacity).await;
        });
    }
}

/// Runs one client connection: register with the hub, pump the mailbox out
/// to the socket, feed inbound publish frames back in, unregister on close.
async fn handle_connection(stream: TcpStream, hub: HubHandle, mailbox_capacity: usize) {
    let ws_stream = match accept_async(stream).await {
        Ok(ws) => ws,
        Err(e) => {
            error!("WebSocket handshake error: {e}");
            return;
        }
    };

    let (mut ws_sender, mut ws_receiver) = ws_stream.split();

    let (client, mut mailbox) = Client::channel(mailbox_capacity);
    let client_id = client.id.clone();

    // Register before reading anything, so this connection's replay point is
    // fixed before it can publish.
    if hub.submit_register(client).await.is_err() {
        error!("hub is gone, dropping connection for {client_id}");
        return;
    }

    // Pump task: mailbox -> socket. Ends when the hub closes the mailbox
    // (eviction or unregister) or the socket rejects a write.
    let pump_id = client_id.clone();
    let pump = tokio::spawn(async move {
        while let Some(payload) = mailbox.recv().await {
            if let Err(e) = ws_sender.send(WsMessage::Binary(payload)).await {
                warn!("failed to send to {pump_id}: {e}");
                break;
            }
        }
        info!("send loop closed for {pump_id}");
    });

    // Handle incoming frames from the client
    while let Some(Ok(msg)) = ws_receiver.next().await {
        if msg.is_text() {
            let Ok(text) = msg.to_text() else { continue };
            match serde_json::from_str::<ClientMessage>(text) {
                Ok(ClientMessage::Publish { payload }) => {
                    let message = Message::new(&client_id, payload);
                    if hub.submit_broadcast(message).await.is_err() {
                        break;
                    }
                }
                Err(err) => {
                    warn!("invalid client message from {client_id}: {err} | {text}");
                }
            }
        }
    }

    info!("{client_id} disconnected");

    let _ = hub.submit_unregister(client_id).await;
    let _ = pump.await;
}
