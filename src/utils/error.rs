//! The `error` module defines the error types used within the `fanhub` application.
//!
//! Nothing here propagates between clients: delivery failures are absorbed
//! inside the hub loop, and the only externally visible failure signal is a
//! mailbox reporting `Closed`.

use thiserror::Error;

/// The renderer could not produce a payload for a message.
///
/// Recoverable and scoped to a single delivery attempt; the message stays in
/// history and the hub keeps running.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result of a non-blocking mailbox drain.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MailboxError {
    /// No payload queued right now; the client is still registered.
    #[error("mailbox is empty")]
    Empty,

    /// The hub has evicted or released this client. The transport must
    /// terminate the connection and not re-register it automatically.
    #[error("mailbox is closed")]
    Closed,
}

/// Failure submitting to one of the hub's intakes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HubError {
    /// The hub task is no longer running, so the submission cannot be accepted.
    #[error("hub is no longer running")]
    Closed,
}
