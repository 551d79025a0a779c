use crate::constants::route;
use crate::matching::OriginMatching;
use thiserror::Error;

/// Errors that can be produced when validating [`GuardOptions`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("the protected route must not be empty; an empty route would guard every request")]
    EmptyProtectedRoute,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardOptions {
    /// Path segment identifying the guarded namespace, matched as a substring.
    pub protected_route: String,
    pub matching: OriginMatching,
}

impl Default for GuardOptions {
    fn default() -> Self {
        Self {
            protected_route: route::CONTACT_FORM_7.into(),
            matching: OriginMatching::default(),
        }
    }
}

impl GuardOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.protected_route.trim().is_empty() {
            return Err(ValidationError::EmptyProtectedRoute);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
