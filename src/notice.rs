use crate::constants::notice;

/// Informational notice raised when the form plugin this guard protects is
/// not active. It never affects request handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyNotice {
    message: &'static str,
}

impl DependencyNotice {
    pub fn check(form_plugin_active: bool) -> Option<Self> {
        if form_plugin_active {
            None
        } else {
            Some(Self {
                message: notice::FORM_PLUGIN_REQUIRED,
            })
        }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn emit(&self) {
        tracing::warn!("origin guard: {}", self.message);
    }
}
