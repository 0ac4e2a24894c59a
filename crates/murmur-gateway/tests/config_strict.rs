#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use murmur_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
gateway:
  listen: "0.0.0.0:8080"
chat:
  reap_intervl_ms: 30000 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8080");
    assert_eq!(cfg.chat.reap_interval_ms, 30000);
    assert_eq!(cfg.chat.max_name_chars, 32);
}

#[test]
fn partial_section_keeps_other_defaults() {
    let cfg = config::load_from_str(
        r#"
version: 1
chat:
  reap_interval_ms: 5000
"#,
    )
    .expect("must parse");
    assert_eq!(cfg.chat.reap_interval_ms, 5000);
    assert_eq!(cfg.chat.max_text_chars, 2000);
    assert_eq!(cfg.gateway.outbound_queue, 256);
}

#[test]
fn unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn out_of_range_values_rejected() {
    for bad in [
        "version: 1\nchat:\n  reap_interval_ms: 10\n",
        "version: 1\ngateway:\n  ping_interval_ms: 60000\n  idle_timeout_ms: 30000\n",
        "version: 1\ngateway:\n  outbound_queue: 0\n",
        "version: 1\nchat:\n  max_text_chars: 0\n",
    ] {
        let err = config::load_from_str(bad).expect_err(bad);
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST", "input={bad}");
    }
}
