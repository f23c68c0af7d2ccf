//! The `client` module defines the representation of a client in the hub.
//!
//! It provides the `Client` struct, the hub-side handle holding the writing
//! half of a client's bounded mailbox, and the `Mailbox` struct, the
//! transport-side receiving half that the connection's pump task drains.

pub mod handle;
pub use handle::{Client, ClientId, Mailbox};

#[cfg(test)]
mod tests;
