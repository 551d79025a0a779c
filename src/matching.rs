use crate::util::equals_ignore_case;
use serde::{Deserialize, Serialize};
use url::Url;

/// How a declared origin is compared against the site host.
///
/// `Contains` accepts any origin that has the site host as a substring, which
/// tolerates scheme, port and subdomain variations but also admits origins
/// such as `https://example.com.evil.com`. `ExactHost` parses the origin and
/// requires its host to equal the site host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginMatching {
    #[default]
    Contains,
    ExactHost,
}

impl OriginMatching {
    pub fn contains() -> Self {
        Self::Contains
    }

    pub fn exact_host() -> Self {
        Self::ExactHost
    }

    pub fn matches(&self, origin: &str, site_host: &str) -> bool {
        if origin.is_empty() || site_host.is_empty() {
            return false;
        }

        match self {
            OriginMatching::Contains => origin.contains(site_host),
            OriginMatching::ExactHost => origin_host_equals(origin, site_host),
        }
    }
}

fn origin_host_equals(origin: &str, site_host: &str) -> bool {
    match Url::parse(origin.trim()) {
        Ok(parsed) => parsed
            .host_str()
            .is_some_and(|host| equals_ignore_case(host, site_host)),
        Err(_) => false,
    }
}

#[cfg(test)]
#[path = "matching_test.rs"]
mod matching_test;
