//! Framework-agnostic pre-dispatch filter chain.
//!
//! A [`DispatchPipeline`] runs every registered [`PreDispatchFilter`] before
//! invoking the endpoint handler. Filters see the result produced so far and
//! either hand it on unchanged or replace it with a response, which skips the
//! handler entirely.

use crate::constants::header;
use crate::context::RequestContext;
use crate::guard::OriginGuard;
use crate::response::RejectionResponse;
use crate::result::GuardDecision;
use crate::site::SiteIdentity;
use serde_json::Value;
use std::sync::Arc;

/// Parsed API request as seen by the dispatch pipeline.
#[derive(Debug, Clone, Default)]
pub struct ApiRequest {
    pub route: String,
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new<S: Into<String>>(route: S) -> Self {
        Self {
            route: route.into(),
            headers: Vec::new(),
        }
    }

    pub fn with_header<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Returns the first header value whose name matches case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }
}

impl From<RejectionResponse> for ApiResponse {
    fn from(response: RejectionResponse) -> Self {
        Self {
            status: response.status,
            body: response.to_value(),
        }
    }
}

pub trait PreDispatchFilter: Send + Sync {
    /// Returns `result` unchanged to let dispatch continue, or a response to
    /// short-circuit it.
    fn pre_dispatch(&self, result: Option<ApiResponse>, request: &ApiRequest)
    -> Option<ApiResponse>;
}

/// [`PreDispatchFilter`] that applies an [`OriginGuard`] for one site.
#[derive(Debug, Clone)]
pub struct OriginGuardFilter {
    guard: Arc<OriginGuard>,
    site: SiteIdentity,
}

impl OriginGuardFilter {
    pub fn new(guard: Arc<OriginGuard>, site: SiteIdentity) -> Self {
        Self { guard, site }
    }
}

impl PreDispatchFilter for OriginGuardFilter {
    fn pre_dispatch(
        &self,
        result: Option<ApiResponse>,
        request: &ApiRequest,
    ) -> Option<ApiResponse> {
        let ctx = RequestContext::new(&request.route, request.header(header::ORIGIN));

        match self.guard.check(&ctx, &self.site) {
            GuardDecision::Passthrough => {
                if self.guard.is_protected(ctx.route) {
                    tracing::debug!(route = %ctx.route, origin = %ctx.origin, "origin accepted");
                }
                result
            }
            GuardDecision::Reject(rejection) => {
                rejection.log();
                Some(RejectionResponse::from(&rejection).into())
            }
        }
    }
}

#[derive(Default, Clone)]
pub struct DispatchPipeline {
    filters: Vec<Arc<dyn PreDispatchFilter>>,
}

impl DispatchPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: PreDispatchFilter + 'static,
    {
        self.filters.push(Arc::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Runs the filters in registration order, then `handler` if none of them
    /// produced a response.
    pub fn dispatch<H>(&self, request: &ApiRequest, handler: H) -> ApiResponse
    where
        H: FnOnce(&ApiRequest) -> ApiResponse,
    {
        let result = self
            .filters
            .iter()
            .fold(None, |result, filter| filter.pre_dispatch(result, request));

        match result {
            Some(response) => response,
            None => handler(request),
        }
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
