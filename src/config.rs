use crate::constants::route;
use crate::guard::OriginGuard;
use crate::matching::OriginMatching;
use crate::notice::DependencyNotice;
use crate::options::{GuardOptions, ValidationError};
use crate::site::{SiteError, SiteIdentity};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse guard configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Site(#[from] SiteError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Deployment-level settings for the origin guard.
///
/// ```toml
/// site_url = "https://example.com"
/// protected_route = "/contact-form-7/v1/"
/// matching = "exact_host"
/// form_plugin_active = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuardConfig {
    pub site_url: String,
    pub protected_route: String,
    pub matching: OriginMatching,
    pub form_plugin_active: bool,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            site_url: String::new(),
            protected_route: route::CONTACT_FORM_7.into(),
            matching: OriginMatching::default(),
            form_plugin_active: true,
        }
    }
}

impl GuardConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn options(&self) -> GuardOptions {
        GuardOptions {
            protected_route: self.protected_route.clone(),
            matching: self.matching,
        }
    }

    /// Builds the guard and site identity, failing fast on an unusable site
    /// URL or protected route.
    pub fn build(&self) -> Result<(OriginGuard, SiteIdentity), ConfigError> {
        let guard = OriginGuard::new(self.options())?;
        let site = SiteIdentity::from_url(&self.site_url)?;

        if let Some(notice) = DependencyNotice::check(self.form_plugin_active) {
            notice.emit();
        }

        tracing::debug!(
            site_host = %site.host(),
            protected_route = %self.protected_route,
            matching = ?self.matching,
            "origin guard configured"
        );

        Ok((guard, site))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
