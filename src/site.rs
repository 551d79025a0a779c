use thiserror::Error;
use url::Url;

/// Errors produced while deriving the site identity from its configured URL.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("site url '{url}' could not be parsed: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("site url '{0}' has no host component")]
    MissingHost(String),
}

/// Host of the site the guard protects, derived once from the site URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteIdentity {
    host: String,
}

impl SiteIdentity {
    pub fn from_url(site_url: &str) -> Result<Self, SiteError> {
        let parsed = Url::parse(site_url.trim()).map_err(|source| SiteError::InvalidUrl {
            url: site_url.to_owned(),
            source,
        })?;

        match parsed.host_str() {
            Some(host) if !host.is_empty() => Ok(Self {
                host: host.to_owned(),
            }),
            _ => Err(SiteError::MissingHost(site_url.to_owned())),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;
