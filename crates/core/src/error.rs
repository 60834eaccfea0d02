use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure reported by a platform backend while talking to the accessibility tree.
///
/// "Property not supported" is never an error; see [`crate::AttrValue::NotSupported`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformError {
    pub kind: PlatformErrorKind,
    pub message: Option<String>,
}

impl PlatformError {
    pub fn new(kind: PlatformErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: Some(message.into()) }
    }

    pub fn simple(kind: PlatformErrorKind) -> Self {
        Self { kind, message: None }
    }

    pub fn element_not_available(message: impl Into<String>) -> Self {
        Self::new(PlatformErrorKind::ElementNotAvailable, message)
    }
}

impl Display for PlatformError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{msg}"),
            None => write!(f, "{:#?}", self.kind),
        }
    }
}

impl Error for PlatformError {}

/// Categorises platform failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformErrorKind {
    /// The element died (window closed, control destroyed).
    ElementNotAvailable,
    AccessDenied,
    /// Cross-process call failed or timed out.
    CommunicationFailure,
    InitializationFailed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_prefers_message() {
        let err = PlatformError::element_not_available("window closed");
        assert_eq!(err.to_string(), "window closed");
        assert_eq!(err.kind, PlatformErrorKind::ElementNotAvailable);
    }

    #[rstest]
    fn display_falls_back_to_kind() {
        let err = PlatformError::simple(PlatformErrorKind::AccessDenied);
        assert_eq!(err.to_string(), "AccessDenied");
    }
}
