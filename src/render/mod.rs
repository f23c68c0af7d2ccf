//! The `render` module defines the contract for turning a [`Message`] into a
//! delivery-ready byte payload.
//!
//! The hub depends on rendering only through the [`Renderer`] trait, so the
//! presentation format is an injected capability rather than something the
//! core owns. Because the payload is identical for every recipient of a given
//! message, the hub renders once per broadcast and clones the resulting
//! `Bytes` across the fan-out.

use bytes::Bytes;

use crate::hub::message::Message;
use crate::utils::error::RenderError;

/// Produces the wire payload for a message.
///
/// Called synchronously from the hub loop, so implementations should be cheap
/// and must not block.
pub trait Renderer: Send + Sync {
    fn render(&self, message: &Message) -> Result<Bytes, RenderError>;
}

/// Default renderer: the message serialized as a JSON object.
#[derive(Debug, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, message: &Message) -> Result<Bytes, RenderError> {
        Ok(Bytes::from(serde_json::to_vec(message)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_renderer_produces_round_trippable_payload() {
        let msg = Message::new("client-a", "hello".to_string());
        let payload = JsonRenderer.render(&msg).unwrap();

        let decoded: Message = serde_json::from_slice(&payload).unwrap();
        assert_eq!(decoded.sender, "client-a");
        assert_eq!(decoded.payload, "hello");
        assert_eq!(decoded.timestamp, msg.timestamp);
    }
}
