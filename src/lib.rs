//! # FanHub
//!
//! `fanhub` is a minimalist, in-memory broadcast hub built with Rust. Every
//! message published to the hub is fanned out to all connected clients, new
//! clients are replayed the full message history on arrival, and clients that
//! cannot keep up are dropped instead of being allowed to stall everyone else.
//! WebSockets are used for client communication.
//!
//! ## Core Modules
//!
//! The library is structured into several modules, each with a distinct responsibility:
//!
//! - `hub`: The central component; a single event-loop task that owns the client
//!   registry and the message history and serializes all mutation of them.
//! - `client`: The hub-side handle and transport-side mailbox for one connected client.
//! - `render`: The contract for turning a message into a delivery-ready payload.
//! - `config`: Handles loading and managing server configuration.
//! - `transport`: Manages the WebSocket server and communication with clients.
//! - `utils`: Contains shared utilities, such as error types and logging setup.

pub mod client;
pub mod config;
pub mod hub;
pub mod render;
pub mod transport;
pub mod utils;
