mod helpers;

use helpers::{a, aaaa, addresses, cname, mx, TestRecord};
use rrdns_application::ports::AnswerShuffler;
use rrdns_application::services::{decode_token, encode_token};
use rrdns_application::use_cases::StatelessShuffler;
use rrdns_domain::{RecordType, ShuffleOutcome, ShuffleRequest};

const QUESTION: &str = "alpha.example.";

fn shuffle(request: Option<&ShuffleRequest>, answer: Vec<TestRecord>) -> ShuffleOutcome<TestRecord> {
    AnswerShuffler::<TestRecord>::shuffle(&StatelessShuffler::new(), request, answer)
}

fn four() -> Vec<TestRecord> {
    vec![a("10.0.0.1"), a("10.0.0.2"), a("10.0.0.3"), a("10.0.0.4")]
}

#[test]
fn test_without_token_rotates_response_order_once() {
    let req = ShuffleRequest::new(QUESTION, RecordType::A);

    let outcome = shuffle(Some(&req), four());

    assert_eq!(
        addresses(&outcome.answer),
        vec!["10.0.0.2", "10.0.0.3", "10.0.0.4", "10.0.0.1"]
    );
    assert_eq!(
        outcome.rotation_token.as_deref(),
        Some(r#"_rr_state={"ip":["10.0.0.2","10.0.0.3","10.0.0.4","10.0.0.1"]}"#)
    );
}

#[test]
fn test_echoed_token_advances_cursor_through_full_cycle() {
    let expected = [
        ["10.0.0.2", "10.0.0.3", "10.0.0.4", "10.0.0.1"],
        ["10.0.0.3", "10.0.0.4", "10.0.0.1", "10.0.0.2"],
        ["10.0.0.4", "10.0.0.1", "10.0.0.2", "10.0.0.3"],
        ["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.4"],
    ];
    let mut token: Option<String> = None;

    for i in 0..10 {
        let mut req = ShuffleRequest::new(QUESTION, RecordType::A);
        if let Some(t) = token.take() {
            req = req.with_rotation_token(t);
        }
        let outcome = shuffle(Some(&req), four());
        assert_eq!(addresses(&outcome.answer), expected[i % 4], "iteration {}", i);
        token = outcome.rotation_token;
    }
}

#[test]
fn test_other_records_keep_order_after_addresses() {
    let req = ShuffleRequest::new("ipv6.example.", RecordType::AAAA);
    let answer = vec![
        aaaa("4001:a1:1014::89"),
        cname("beta.example."),
        aaaa("4001:a1:1014::8a"),
        aaaa("4001:a1:1014::8b"),
        mx("mx.example."),
    ];

    let outcome = shuffle(Some(&req), answer);

    assert_eq!(
        addresses(&outcome.answer),
        vec![
            "4001:a1:1014::8a",
            "4001:a1:1014::8b",
            "4001:a1:1014::89",
            "beta.example.",
            "mx.example."
        ]
    );
}

#[test]
fn test_invalid_token_behaves_like_no_token() {
    let plain = shuffle(Some(&ShuffleRequest::new(QUESTION, RecordType::A)), four());

    for raw in ["_rr_state=invalid", "_rr_state=", "garbage", r#"_rr_state={"ip":[]}"#] {
        let req = ShuffleRequest::new(QUESTION, RecordType::A).with_rotation_token(raw);
        let outcome = shuffle(Some(&req), four());
        assert_eq!(outcome.answer, plain.answer, "token {:?}", raw);
    }
}

#[test]
fn test_stale_token_addresses_are_dropped_and_new_ones_appended() {
    let token = encode_token(&[
        "10.0.0.2".to_string(),
        "10.0.0.3".to_string(),
        "10.0.0.1".to_string(),
    ]);
    let req = ShuffleRequest::new(QUESTION, RecordType::A).with_rotation_token(token);

    let outcome = shuffle(Some(&req), four());

    assert_eq!(
        addresses(&outcome.answer),
        vec!["10.0.0.3", "10.0.0.1", "10.0.0.4", "10.0.0.2"]
    );

    let removed = ShuffleRequest::new(QUESTION, RecordType::A)
        .with_rotation_token(outcome.rotation_token.unwrap());
    let outcome = shuffle(Some(&removed), vec![a("10.0.0.1"), a("10.0.0.4")]);
    assert_eq!(addresses(&outcome.answer), vec!["10.0.0.4", "10.0.0.1"]);
    assert_eq!(
        decode_token(outcome.rotation_token.as_deref().unwrap()),
        vec!["10.0.0.4", "10.0.0.1"]
    );
}

#[test]
fn test_single_and_empty_answers_are_unchanged() {
    let token = encode_token(&["10.0.0.2".to_string(), "10.0.0.1".to_string()]);
    let req = ShuffleRequest::new(QUESTION, RecordType::A).with_rotation_token(token);

    assert!(shuffle(Some(&req), vec![]).answer.is_empty());
    assert_eq!(
        shuffle(Some(&req), vec![a("10.0.0.1")]).answer,
        vec![a("10.0.0.1")]
    );
}

#[test]
fn test_missing_request_passes_through_without_token() {
    let outcome = shuffle(None, four());

    assert_eq!(outcome.answer, four());
    assert!(outcome.rotation_token.is_none());
}
