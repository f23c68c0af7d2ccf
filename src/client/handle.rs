use bytes::Bytes;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::{TryRecvError, TrySendError};
use uuid::Uuid;

use crate::utils::error::MailboxError;

pub type ClientId = String;

/// The hub-side handle for a connected client.
///
/// Holds the client's id and the sending half of its bounded mailbox. The hub
/// is the only writer; dropping the handle closes the mailbox, which is how
/// the transport learns the client has been released or evicted.
#[derive(Debug)]
pub struct Client {
    /// Unique identifier for the client (e.g. UUID or connection ID).
    pub id: ClientId,

    sender: mpsc::Sender<Bytes>,
}

/// The transport-side receiving half of a client's mailbox.
///
/// Drained by exactly one reader, the connection's own pump task.
#[derive(Debug)]
pub struct Mailbox {
    rx: mpsc::Receiver<Bytes>,
}

impl Client {
    /// Creates a client handle and its mailbox with the given capacity.
    ///
    /// This is the only constructor; the two halves are created together so a
    /// mailbox can never outlive its identity or change capacity later.
    pub fn channel(capacity: usize) -> (Self, Mailbox) {
        let (tx, rx) = mpsc::channel(capacity);
        let client = Self {
            id: format!("client-{}", Uuid::new_v4()),
            sender: tx,
        };
        (client, Mailbox { rx })
    }

    /// Attempts to enqueue a rendered payload without blocking.
    ///
    /// `Full` means the client has not drained fast enough; the hub treats
    /// that as grounds for immediate eviction. `Closed` means the transport
    /// already dropped the mailbox.
    pub fn try_deliver(&self, payload: Bytes) -> Result<(), TrySendError<Bytes>> {
        self.sender.try_send(payload)
    }
}

impl Mailbox {
    /// Non-blocking drain of the next queued payload.
    ///
    /// Payloads enqueued before the hub released the client remain
    /// retrievable; `Closed` is only reported once the queue is empty.
    pub fn try_recv(&mut self) -> Result<Bytes, MailboxError> {
        self.rx.try_recv().map_err(|e| match e {
            TryRecvError::Empty => MailboxError::Empty,
            TryRecvError::Disconnected => MailboxError::Closed,
        })
    }

    /// Waits for the next payload; `None` means the hub has evicted or
    /// released this client and the connection should be terminated.
    pub async fn recv(&mut self) -> Option<Bytes> {
        self.rx.recv().await
    }
}
