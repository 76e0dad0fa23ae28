use thiserror::Error;

/// Failure to load or validate a [`crate::PageConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config: invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config: {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Failures raised while touching the document.
///
/// None of these are fatal for the page: the binding logs them and the
/// affected feature simply stays inactive.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("{0}: unexpected element type")]
    Cast(&'static str),
    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

impl DomError {
    pub fn js(context: &'static str, message: impl Into<String>) -> Self {
        DomError::Js {
            context,
            message: message.into(),
        }
    }
}
