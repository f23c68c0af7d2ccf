//! The `transport` module is responsible for handling network communication
//! with clients via WebSockets.
//!
//! It defines the inbound frame format, and implements the WebSocket server
//! itself: each accepted connection gets a client handle registered with the
//! hub, a pump task draining the mailbox into the socket, and a read loop
//! forwarding publish frames to the hub's broadcast intake.

pub mod message;
pub mod websocket;

#[cfg(test)]
mod tests;
