use bytes::Bytes;
use tokio::sync::mpsc::error::TrySendError;

use super::Client;
use crate::utils::error::MailboxError;

#[tokio::test]
async fn client_ids_are_unique_and_prefixed() {
    let (a, _mailbox_a) = Client::channel(4);
    let (b, _mailbox_b) = Client::channel(4);

    assert!(a.id.starts_with("client-"));
    assert!(b.id.starts_with("client-"));
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn delivered_payloads_come_out_in_order() {
    let (client, mut mailbox) = Client::channel(4);

    client.try_deliver(Bytes::from_static(b"first")).unwrap();
    client.try_deliver(Bytes::from_static(b"second")).unwrap();

    assert_eq!(mailbox.try_recv().unwrap(), Bytes::from_static(b"first"));
    assert_eq!(mailbox.recv().await.unwrap(), Bytes::from_static(b"second"));
    assert_eq!(mailbox.try_recv(), Err(MailboxError::Empty));
}

#[tokio::test]
async fn delivery_beyond_capacity_reports_full_without_blocking() {
    let (client, mut mailbox) = Client::channel(2);

    client.try_deliver(Bytes::from_static(b"one")).unwrap();
    client.try_deliver(Bytes::from_static(b"two")).unwrap();

    let err = client.try_deliver(Bytes::from_static(b"three")).unwrap_err();
    assert!(matches!(err, TrySendError::Full(_)));

    // The queued payloads are untouched by the failed attempt.
    assert_eq!(mailbox.try_recv().unwrap(), Bytes::from_static(b"one"));
    assert_eq!(mailbox.try_recv().unwrap(), Bytes::from_static(b"two"));
}

#[tokio::test]
async fn dropping_the_client_closes_the_mailbox_after_draining() {
    let (client, mut mailbox) = Client::channel(2);

    client.try_deliver(Bytes::from_static(b"last words")).unwrap();
    drop(client);

    assert_eq!(
        mailbox.try_recv().unwrap(),
        Bytes::from_static(b"last words")
    );
    assert_eq!(mailbox.try_recv(), Err(MailboxError::Closed));
    assert_eq!(mailbox.recv().await, None);
}

#[tokio::test]
async fn delivery_to_a_dropped_mailbox_reports_closed() {
    let (client, mailbox) = Client::channel(2);
    drop(mailbox);

    let err = client.try_deliver(Bytes::from_static(b"gone")).unwrap_err();
    assert!(matches!(err, TrySendError::Closed(_)));
}
