//! Hub engine
//!
//! This module contains the in-memory hub implementation responsible for:
//! - tracking the set of registered clients
//! - fanning broadcast messages out to every client's mailbox
//! - replaying the accumulated message history to newly registered clients
//! - evicting clients whose mailbox is full at delivery time
//!
//! Concurrency and usage notes:
//! - The hub owns the registry and the history outright. All access from
//!   other tasks goes through the single intake queue held by [`HubHandle`];
//!   the loop in [`Hub::run`] is the only code that mutates shared state,
//!   which is what makes register/unregister/broadcast effects impossible to
//!   interleave.
//! - All three operations travel through one bounded FIFO. Acceptance order
//!   is processing order, so a broadcast accepted after an unregister can
//!   never reach the unregistered client's mailbox, even while the loop is
//!   busy.
//! - Intake submission is a bounded handoff: callers suspend until the queue
//!   accepts their request. Delivery into a client mailbox is the opposite, a
//!   non-blocking `try_send` so a slow consumer can never stall the broadcast
//!   to everyone else.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{error, info, warn};

use crate::client::{Client, ClientId};
use crate::hub::message::Message;
use crate::render::Renderer;
use crate::utils::error::HubError;

/// One unit of work accepted by the hub's intake queue.
#[derive(Debug)]
enum HubEvent {
    Register(Client),
    Unregister(ClientId),
    Broadcast(Message),
}

/// Cloneable submission side of the hub's intake.
///
/// All three calls suspend while the intake queue is full (backpressure to
/// producers) and fail only if the hub task is gone. Submissions from one
/// caller are processed in the order they were accepted, regardless of which
/// of the three operations they are.
#[derive(Debug, Clone)]
pub struct HubHandle {
    intake_tx: mpsc::Sender<HubEvent>,
}

impl HubHandle {
    /// Hands a newly created client over to the hub for registration.
    ///
    /// The hub replays the full history into the client's mailbox before it
    /// processes any later intake event, so a client observes exactly the
    /// messages broadcast before this call was accepted, then live traffic.
    pub async fn submit_register(&self, client: Client) -> Result<(), HubError> {
        self.submit(HubEvent::Register(client)).await
    }

    /// Asks the hub to release a client. Idempotent: unknown ids are a no-op.
    ///
    /// Once accepted, no broadcast submitted afterwards can appear in the
    /// client's mailbox.
    pub async fn submit_unregister(&self, id: ClientId) -> Result<(), HubError> {
        self.submit(HubEvent::Unregister(id)).await
    }

    /// Publishes a message to every registered client.
    pub async fn submit_broadcast(&self, message: Message) -> Result<(), HubError> {
        self.submit(HubEvent::Broadcast(message)).await
    }

    async fn submit(&self, event: HubEvent) -> Result<(), HubError> {
        self.intake_tx
            .send(event)
            .await
            .map_err(|_| HubError::Closed)
    }
}

/// The hub: sole owner of the client registry and the message history.
pub struct Hub {
    pub(crate) clients: HashMap<ClientId, Client>,
    pub(crate) history: Vec<Message>,
    renderer: Arc<dyn Renderer>,
    intake_rx: mpsc::Receiver<HubEvent>,
}

impl Hub {
    /// Creates a hub and the handle used to submit work to it.
    ///
    /// `intake_capacity` bounds the intake queue; submitters block once it is
    /// reached rather than dropping requests.
    pub fn new(renderer: Arc<dyn Renderer>, intake_capacity: usize) -> (Self, HubHandle) {
        let (intake_tx, intake_rx) = mpsc::channel(intake_capacity);

        let hub = Self {
            clients: HashMap::new(),
            history: Vec::new(),
            renderer,
            intake_rx,
        };
        (hub, HubHandle { intake_tx })
    }

    /// Runs the event loop until every [`HubHandle`] has been dropped.
    ///
    /// One intake event is consumed and fully handled at a time, in the order
    /// events were accepted, so replay for a registering client completes
    /// before any later broadcast is processed and an unregister shields the
    /// client from every broadcast accepted after it.
    pub async fn run(mut self) {
        while let Some(event) = self.intake_rx.recv().await {
            match event {
                HubEvent::Register(client) => self.handle_register(client),
                HubEvent::Unregister(id) => self.handle_unregister(&id),
                HubEvent::Broadcast(msg) => self.handle_broadcast(msg),
            }
        }
        info!("hub loop stopped: intake closed");
    }

    /// Adds a client to the registry after replaying the full history into
    /// its mailbox, in broadcast arrival order.
    ///
    /// Replay uses the same non-blocking delivery as broadcast: a mailbox too
    /// small to absorb the history gets the client evicted on the spot
    /// instead of letting one slow joiner stall the loop.
    pub(crate) fn handle_register(&mut self, client: Client) {
        for msg in &self.history {
            let payload = match self.renderer.render(msg) {
                Ok(payload) => payload,
                Err(e) => {
                    warn!("skipping replay of one message to {}: {e}", client.id);
                    continue;
                }
            };
            match client.try_deliver(payload) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    warn!(
                        "evicting {}: mailbox cannot hold the history replay",
                        client.id
                    );
                    return;
                }
                Err(TrySendError::Closed(_)) => {
                    info!("client {} hung up during replay", client.id);
                    return;
                }
            }
        }

        info!("client registered: {}", client.id);
        self.clients.insert(client.id.clone(), client);
    }

    /// Removes a client if present, dropping its handle and thereby closing
    /// the mailbox. Unregistering an absent client is a no-op.
    pub(crate) fn handle_unregister(&mut self, id: &ClientId) {
        if self.clients.remove(id).is_some() {
            info!("client unregistered: {id}");
        }
    }

    /// Appends the message to history and fans its rendered payload out to
    /// every registered client.
    ///
    /// The message is rendered once and the resulting bytes shared across the
    /// fan-out. A full mailbox evicts its client within this same pass; no
    /// retry, no grace period. A render failure keeps the message in history
    /// but delivers it to no one.
    pub(crate) fn handle_broadcast(&mut self, msg: Message) {
        let payload = match self.renderer.render(&msg) {
            Ok(payload) => Some(payload),
            Err(e) => {
                error!("render failed, message recorded without delivery: {e}");
                None
            }
        };
        self.history.push(msg);

        let Some(payload) = payload else { return };

        self.clients.retain(|id, client| {
            match client.try_deliver(payload.clone()) {
                Ok(()) => true,
                Err(TrySendError::Full(_)) => {
                    warn!("evicting slow client: {id}");
                    false
                }
                Err(TrySendError::Closed(_)) => {
                    info!("dropping disconnected client: {id}");
                    false
                }
            }
        });
    }
}
