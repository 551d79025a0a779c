use origin_guard_rs::{GuardDecision, Rejection};

pub fn assert_passthrough(decision: GuardDecision) {
    match decision {
        GuardDecision::Passthrough => {}
        other => panic!("expected passthrough decision, got {:?}", other),
    }
}

pub fn assert_reject(decision: GuardDecision) -> Rejection {
    match decision {
        GuardDecision::Reject(rejection) => rejection,
        other => panic!("expected reject decision, got {:?}", other),
    }
}
