#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::extract::ws::Message;
use tokio::sync::mpsc;

use murmur_core::protocol::ServerEvent;
use murmur_gateway::realtime::{Connection, ConnectionTable, Fanout, Liveness};

fn text(msg: Message) -> ServerEvent {
    match msg {
        Message::Text(s) => serde_json::from_str(&s).unwrap(),
        other => panic!("expected text frame, got {other:?}"),
    }
}

#[test]
fn broadcast_reaches_every_connection_and_send_to_one() {
    let table = ConnectionTable::new();
    let a = table.next_id();
    let b = table.next_id();
    assert_ne!(a, b);

    let (a_tx, mut a_rx) = mpsc::channel(8);
    let (b_tx, mut b_rx) = mpsc::channel(8);
    table.insert(a, Connection::new(a_tx));
    table.insert(b, Connection::new(b_tx));

    table.broadcast(&ServerEvent::MessageDeleted("m1".into())).unwrap();
    table.send_to(b, &ServerEvent::Error("nope".into())).unwrap();

    assert_eq!(text(a_rx.try_recv().unwrap()), ServerEvent::MessageDeleted("m1".into()));
    assert!(a_rx.try_recv().is_err());
    assert_eq!(text(b_rx.try_recv().unwrap()), ServerEvent::MessageDeleted("m1".into()));
    assert_eq!(text(b_rx.try_recv().unwrap()), ServerEvent::Error("nope".into()));
}

#[test]
fn full_queue_drops_instead_of_blocking() {
    let table = ConnectionTable::new();
    let a = table.next_id();
    let (a_tx, mut a_rx) = mpsc::channel(1);
    table.insert(a, Connection::new(a_tx));

    table.broadcast(&ServerEvent::MessageDeleted("m1".into())).unwrap();
    table.broadcast(&ServerEvent::MessageDeleted("m2".into())).unwrap();

    assert_eq!(table.dropped_frames(), 1);
    assert_eq!(text(a_rx.try_recv().unwrap()), ServerEvent::MessageDeleted("m1".into()));
}

#[test]
fn liveness_follows_the_socket_task() {
    let table = ConnectionTable::new();
    let a = table.next_id();
    let b = table.next_id();
    let (a_tx, a_rx) = mpsc::channel(1);
    let (b_tx, _b_rx) = mpsc::channel(1);
    table.insert(a, Connection::new(a_tx));
    table.insert(b, Connection::new(b_tx));

    assert!(table.is_alive(a));
    drop(a_rx);
    assert!(!table.is_alive(a), "receiver gone means the socket task is gone");

    table.remove(b);
    assert!(!table.is_alive(b));
    assert_eq!(table.len(), 1);
}
