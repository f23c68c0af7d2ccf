use serde::Deserialize;

/// Inbound frame sent by a client over the WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    #[serde(rename = "publish")]
    Publish { payload: String },
}
