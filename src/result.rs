use std::fmt;

/// Why a request on a protected route was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    MissingOrigin,
    OriginMismatch,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::MissingOrigin => write!(f, "origin header missing"),
            RejectionReason::OriginMismatch => write!(f, "origin does not match site host"),
        }
    }
}

/// Data carried by a rejection so callers can log it and build a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub reason: RejectionReason,
    pub origin: String,
    pub site_host: String,
}

/// Overall decision returned by the guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Passthrough,
    Reject(Rejection),
}

impl GuardDecision {
    pub fn is_passthrough(&self) -> bool {
        matches!(self, GuardDecision::Passthrough)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            GuardDecision::Reject(rejection) => Some(rejection),
            GuardDecision::Passthrough => None,
        }
    }
}

impl Rejection {
    /// Emits the operator-facing warning for this rejection.
    pub fn log(&self) {
        tracing::warn!(
            origin = %self.origin,
            expected_host = %self.site_host,
            reason = %self.reason,
            "blocked submission from origin: {} (expected: {})",
            self.origin,
            self.site_host,
        );
    }
}
