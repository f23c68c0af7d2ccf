use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio::time::timeout;

use crate::client::{Client, Mailbox};
use crate::hub::message::Message;
use crate::hub::{Hub, HubHandle};
use crate::render::JsonRenderer;
use crate::transport::message::ClientMessage;

// This is a helper function that simulates the inbound-frame handling part of
// the websocket connection loop.
async fn handle_frame(hub: &HubHandle, client_id: &str, frame: &str) {
    match serde_json::from_str::<ClientMessage>(frame) {
        Ok(ClientMessage::Publish { payload }) => {
            let _ = hub.submit_broadcast(Message::new(client_id, payload)).await;
        }
        Err(_) => {}
    }
}

fn spawn_hub() -> HubHandle {
    let (hub, handle) = Hub::new(Arc::new(JsonRenderer), 8);
    tokio::spawn(hub.run());
    handle
}

async fn next_delivery(mailbox: &mut Mailbox) -> Message {
    let payload = timeout(Duration::from_secs(5), mailbox.recv())
        .await
        .expect("timed out waiting for a delivery")
        .expect("mailbox closed unexpectedly");
    serde_json::from_slice(&payload).unwrap()
}

#[tokio::test]
async fn test_publish_frame_reaches_registered_client() {
    let handle = spawn_hub();

    let (client, mut mailbox) = Client::channel(8);
    handle.submit_register(client).await.unwrap();

    let frame = json!({
        "type": "publish",
        "payload": "hello"
    })
    .to_string();
    handle_frame(&handle, "client-test", &frame).await;

    let received = next_delivery(&mut mailbox).await;
    assert_eq!(received.sender, "client-test");
    assert_eq!(received.payload, "hello");
}

#[tokio::test]
async fn test_invalid_frames_are_ignored() {
    let handle = spawn_hub();

    let (client, mut mailbox) = Client::channel(8);
    handle.submit_register(client).await.unwrap();

    handle_frame(&handle, "client-test", "not even json").await;
    handle_frame(&handle, "client-test", r#"{"type":"unknown"}"#).await;

    // The intake is a FIFO, so if either bad frame had produced a broadcast
    // it would arrive ahead of this sentinel.
    let sentinel = json!({
        "type": "publish",
        "payload": "after"
    })
    .to_string();
    handle_frame(&handle, "client-test", &sentinel).await;

    assert_eq!(next_delivery(&mut mailbox).await.payload, "after");
}
