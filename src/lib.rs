pub mod constants;
mod config;
mod context;
mod guard;
mod matching;
#[cfg(feature = "axum")]
pub mod middleware;
mod notice;
mod options;
mod pipeline;
mod response;
mod result;
mod site;
mod util;

pub use config::{ConfigError, GuardConfig};
pub use context::RequestContext;
pub use guard::OriginGuard;
pub use matching::OriginMatching;
pub use notice::DependencyNotice;
pub use options::{GuardOptions, ValidationError};
pub use pipeline::{
    ApiRequest, ApiResponse, DispatchPipeline, OriginGuardFilter, PreDispatchFilter,
};
pub use response::{RejectionBody, RejectionResponse};
pub use result::{GuardDecision, Rejection, RejectionReason};
pub use site::{SiteError, SiteIdentity};
