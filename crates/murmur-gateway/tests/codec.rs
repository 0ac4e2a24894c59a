#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::extract::ws::Message;

use murmur_core::protocol::ClientEvent;
use murmur_gateway::transport::codec::{decode, Inbound};

#[test]
fn text_frame_decodes_to_event() {
    let msg = Message::Text(r#"{"event":"typing","data":false}"#.to_string());
    match decode(msg, 1024).unwrap() {
        Inbound::Event(ev) => assert_eq!(ev, ClientEvent::Typing(false)),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn oversized_text_frame_rejected_before_parse() {
    let big = format!(r#"{{"event":"join","data":"{}"}}"#, "a".repeat(2048));
    let err = decode(Message::Text(big), 1024).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "PAYLOAD_TOO_LARGE");
}

#[test]
fn frame_at_the_limit_is_accepted() {
    let frame = r#"{"event":"join","data":"Alice"}"#.to_string();
    let limit = frame.len();
    assert!(matches!(decode(Message::Text(frame), limit).unwrap(), Inbound::Event(ClientEvent::Join(n)) if n == "Alice"));
}

#[test]
fn binary_frames_rejected() {
    let err = decode(Message::Binary(vec![1, 2, 3]), 1024).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn lifecycle_frames_surface() {
    assert!(matches!(decode(Message::Ping(vec![7]), 1024).unwrap(), Inbound::Ping(p) if p == vec![7]));
    assert!(matches!(decode(Message::Pong(vec![]), 1024).unwrap(), Inbound::Pong));
    assert!(matches!(decode(Message::Close(None), 1024).unwrap(), Inbound::Close));
}
