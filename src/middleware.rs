//! axum integration.
//!
//! ```no_run
//! use std::sync::Arc;
//! use axum::{Router, routing::post};
//! use origin_guard_rs::{GuardConfig, middleware::{GuardState, origin_guard_middleware}};
//!
//! # fn build() -> Result<Router, origin_guard_rs::ConfigError> {
//! let config = GuardConfig::from_toml_str(r#"site_url = "https://example.com""#)?;
//! let (guard, site) = config.build()?;
//! let state = GuardState::new(Arc::new(guard), Arc::new(site));
//!
//! let app: Router = Router::new()
//!     .route("/contact-form-7/v1/contact-forms/{id}/feedback", post(|| async { "sent" }))
//!     .layer(axum::middleware::from_fn_with_state(state, origin_guard_middleware));
//! # Ok(app)
//! # }
//! ```

use axum::{
    Json,
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::constants::header;
use crate::context::RequestContext;
use crate::guard::OriginGuard;
use crate::response::RejectionResponse;
use crate::result::GuardDecision;
use crate::site::SiteIdentity;

#[derive(Debug, Clone)]
pub struct GuardState {
    pub guard: Arc<OriginGuard>,
    pub site: Arc<SiteIdentity>,
}

impl GuardState {
    pub fn new(guard: Arc<OriginGuard>, site: Arc<SiteIdentity>) -> Self {
        Self { guard, site }
    }
}

pub async fn origin_guard_middleware(
    State(state): State<GuardState>,
    request: Request,
    next: Next,
) -> Response {
    let origin = origin_header(request.headers());
    let ctx = RequestContext::new(request.uri().path(), origin.as_deref());
    let decision = state.guard.check(&ctx, &state.site);
    let protected = state.guard.is_protected(ctx.route);

    match decision {
        GuardDecision::Passthrough => {
            if protected {
                tracing::debug!(route = %ctx.route, origin = %ctx.origin, "origin accepted");
            }
            next.run(request).await
        }
        GuardDecision::Reject(rejection) => {
            rejection.log();
            rejection_response(RejectionResponse::from(&rejection))
        }
    }
}

fn rejection_response(rejection: RejectionResponse) -> Response {
    let status = StatusCode::from_u16(rejection.status).unwrap_or(StatusCode::FORBIDDEN);
    (status, Json(rejection.body)).into_response()
}

// Non-UTF-8 values are treated as an absent header.
fn origin_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;
