//! Wire protocol decode/encode tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use murmur_core::protocol::{decode_client_event, ClientEvent, ServerEvent};

#[test]
fn decode_join() {
    let ev = decode_client_event(r#"{"event":"join","data":"Alice"}"#).unwrap();
    assert_eq!(ev, ClientEvent::Join("Alice".into()));
    assert_eq!(ev.name(), "join");
}

#[test]
fn decode_message_ignores_client_extras() {
    let ev = decode_client_event(
        r#"{"event":"message","data":{"id":"m1","text":"hi","timestamp":"2020-01-01T00:00:00Z","color":"red"}}"#,
    )
    .unwrap();
    let ClientEvent::Message(req) = ev else {
        panic!("expected message");
    };
    assert_eq!(req.id, "m1");
    assert_eq!(req.text, "hi");
    assert!(req.timestamp.is_some());
    assert_eq!(req.edited, None);
}

#[test]
fn decode_edit_delete_typing() {
    let ev = decode_client_event(r#"{"event":"editMessage","data":{"id":"m1","text":"x"}}"#).unwrap();
    assert!(matches!(ev, ClientEvent::EditMessage(ref r) if r.id == "m1" && r.text == "x"));

    let ev = decode_client_event(r#"{"event":"deleteMessage","data":"m1"}"#).unwrap();
    assert_eq!(ev, ClientEvent::DeleteMessage("m1".into()));

    let ev = decode_client_event(r#"{"event":"typing","data":true}"#).unwrap();
    assert_eq!(ev, ClientEvent::Typing(true));
}

#[test]
fn decode_rejects_unknown_or_malformed() {
    for bad in [
        r#"{"event":"shout","data":"x"}"#,
        r#"{"event":"message","data":{"id":"m1"}}"#,
        r#"{"event":"typing","data":"yes"}"#,
        r#"not json"#,
    ] {
        let err = decode_client_event(bad).expect_err(bad);
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST", "input={bad}");
    }
}

#[test]
fn encode_uses_wire_names() {
    let v: serde_json::Value =
        serde_json::from_str(&ServerEvent::user_joined("Alice").to_json().unwrap()).unwrap();
    assert_eq!(v["event"], "userJoined");
    assert_eq!(v["data"]["username"], "Alice");
    assert_eq!(v["data"]["message"], "Alice joined the chat");

    let v: serde_json::Value = serde_json::from_str(
        &ServerEvent::Typing(murmur_core::protocol::TypingState {
            username: "Bob".into(),
            is_typing: true,
        })
        .to_json()
        .unwrap(),
    )
    .unwrap();
    assert_eq!(v["event"], "typing");
    assert_eq!(v["data"]["isTyping"], true);

    let v: serde_json::Value =
        serde_json::from_str(&ServerEvent::edited("m1".into(), "new".into()).to_json().unwrap()).unwrap();
    assert_eq!(v["event"], "messageEdited");
    assert_eq!(v["data"]["edited"], true);

    let v: serde_json::Value =
        serde_json::from_str(&ServerEvent::UserList(vec!["A".into(), "B".into()]).to_json().unwrap()).unwrap();
    assert_eq!(v["data"], serde_json::json!(["A", "B"]));
}
