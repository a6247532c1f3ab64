#![forbid(unsafe_code)]

//! Error taxonomy of the hand runtime.
//!
//! [`HostError`] is what collaborators return. [`HandError`] is what the
//! controller reports: most variants describe failures it already recovered
//! from (logged and queued for [`take_errors`](crate::HandController::take_errors)),
//! only a missing default template is returned from
//! [`refresh`](crate::HandController::refresh).

use std::fmt;

use fanhand_templates::TemplateError;

use crate::config::HandConfigError;

/// Failure reported by a host collaborator.
#[derive(Debug)]
pub enum HostError {
    /// The host cannot perform the request right now (module inactive,
    /// document gone, sheet not renderable).
    Unavailable(String),
    /// The host refused or failed the request.
    Rejected(String),
    /// Storage I/O failed.
    Io(std::io::Error),
    /// Stored data could not be encoded or decoded.
    Serialization(serde_json::Error),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "host unavailable: {reason}"),
            Self::Rejected(reason) => write!(f, "host rejected request: {reason}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Serialization(e) => write!(f, "serialization error: {e}"),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Serialization(e) => Some(e),
            Self::Unavailable(_) | Self::Rejected(_) => None,
        }
    }
}

impl From<std::io::Error> for HostError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for HostError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

/// Failure observed by the [`HandController`](crate::HandController).
#[derive(Debug)]
pub enum HandError {
    /// Neither the configured nor the default template is registered.
    MissingTemplate(TemplateError),
    /// Loading or saving the panel position failed; the position lives for
    /// this session only.
    Persistence(HostError),
    /// Using an item failed; chat was attempted instead.
    ActionInvocation { item_id: String, source: HostError },
    /// A configuration was rejected or had to be clamped.
    Config(HandConfigError),
}

impl fmt::Display for HandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTemplate(e) => write!(f, "{e}"),
            Self::Persistence(e) => write!(f, "panel position not persisted: {e}"),
            Self::ActionInvocation { item_id, source } => {
                write!(f, "using item {item_id:?} failed: {source}")
            }
            Self::Config(e) => write!(f, "configuration error: {e}"),
        }
    }
}

impl std::error::Error for HandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingTemplate(e) => Some(e),
            Self::Persistence(e) => Some(e),
            Self::ActionInvocation { source, .. } => Some(source),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<TemplateError> for HandError {
    fn from(e: TemplateError) -> Self {
        Self::MissingTemplate(e)
    }
}

impl From<HandConfigError> for HandError {
    fn from(e: HandConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn action_error_exposes_host_source() {
        let err = HandError::ActionInvocation {
            item_id: "sword".into(),
            source: HostError::Rejected("no target".into()),
        };
        assert_eq!(
            err.to_string(),
            "using item \"sword\" failed: host rejected request: no target"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn io_converts_into_host_error() {
        let err: HostError = std::io::Error::other("disk full").into();
        assert!(matches!(err, HostError::Io(_)));
        assert!(err.source().is_some());
    }
}
