mod common;

use common::asserts::assert_reject;
use common::builders::{guard, submission};
use insta::assert_yaml_snapshot;
use origin_guard_rs::{RejectionBody, RejectionResponse};
use serde::Serialize;

#[derive(Serialize)]
struct RejectionSnapshot {
    status: u16,
    body: RejectionBody,
}

#[test]
fn blocked_response_snapshot() {
    let rejection = assert_reject(submission().origin("https://evil.com").evaluate(&guard().build()));
    let response = RejectionResponse::from(&rejection);

    let snapshot = RejectionSnapshot {
        status: response.status,
        body: response.body,
    };

    assert_yaml_snapshot!("blocked_response_snapshot", snapshot);
}
