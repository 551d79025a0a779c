use crate::context::RequestContext;
use crate::options::{GuardOptions, ValidationError};
use crate::result::{GuardDecision, Rejection, RejectionReason};
use crate::site::SiteIdentity;

/// Same-origin gate for a single protected route namespace.
///
/// The guard holds no per-request state; one instance can be shared across
/// threads and evaluated concurrently.
#[derive(Debug, Clone)]
pub struct OriginGuard {
    options: GuardOptions,
}

impl OriginGuard {
    pub fn new(options: GuardOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &GuardOptions {
        &self.options
    }

    pub fn check(&self, request: &RequestContext<'_>, site: &SiteIdentity) -> GuardDecision {
        self.evaluate(request.route, request.origin, site.host())
    }

    /// Decides whether a request may proceed to its handler.
    ///
    /// Routes outside the protected namespace always pass. On a protected
    /// route the origin must be present and match `site_host` under the
    /// configured [`OriginMatching`](crate::OriginMatching).
    pub fn evaluate(&self, route: &str, origin: &str, site_host: &str) -> GuardDecision {
        if !self.is_protected(route) {
            return GuardDecision::Passthrough;
        }

        if self.options.matching.matches(origin, site_host) {
            return GuardDecision::Passthrough;
        }

        let reason = if origin.is_empty() {
            RejectionReason::MissingOrigin
        } else {
            RejectionReason::OriginMismatch
        };

        GuardDecision::Reject(Rejection {
            reason,
            origin: origin.to_owned(),
            site_host: site_host.to_owned(),
        })
    }

    pub fn is_protected(&self, route: &str) -> bool {
        route.contains(self.options.protected_route.as_str())
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;
