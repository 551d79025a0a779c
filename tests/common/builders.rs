use origin_guard_rs::constants::route;
use origin_guard_rs::{GuardDecision, GuardOptions, OriginGuard, OriginMatching, RequestContext};

pub const SITE_HOST: &str = "example.com";
pub const FORM_ROUTE: &str = "/contact-form-7/v1/submit";

#[derive(Default)]
pub struct GuardBuilder {
    protected_route: Option<String>,
    matching: Option<OriginMatching>,
}

impl GuardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn protected_route(mut self, route: impl Into<String>) -> Self {
        self.protected_route = Some(route.into());
        self
    }

    pub fn matching(mut self, matching: OriginMatching) -> Self {
        self.matching = Some(matching);
        self
    }

    pub fn build(self) -> OriginGuard {
        let GuardOptions {
            protected_route: default_route,
            matching: default_matching,
        } = GuardOptions::default();

        OriginGuard::new(GuardOptions {
            protected_route: self.protected_route.unwrap_or(default_route),
            matching: self.matching.unwrap_or(default_matching),
        })
        .expect("valid guard configuration")
    }
}

pub struct SubmissionBuilder {
    route: String,
    origin: Option<String>,
    site_host: String,
}

impl SubmissionBuilder {
    pub fn new() -> Self {
        Self {
            route: FORM_ROUTE.into(),
            origin: None,
            site_host: SITE_HOST.into(),
        }
    }

    pub fn route(mut self, route: impl Into<String>) -> Self {
        self.route = route.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn site_host(mut self, host: impl Into<String>) -> Self {
        self.site_host = host.into();
        self
    }

    pub fn evaluate(self, guard: &OriginGuard) -> GuardDecision {
        let ctx = RequestContext::new(&self.route, self.origin.as_deref());
        guard.evaluate(ctx.route, ctx.origin, &self.site_host)
    }
}

pub fn guard() -> GuardBuilder {
    GuardBuilder::new()
}

pub fn submission() -> SubmissionBuilder {
    SubmissionBuilder::new()
}

pub fn default_protected_route() -> &'static str {
    route::CONTACT_FORM_7
}
