use thiserror::Error;
use uiscope_core::{PatternId, PlatformError};

/// Failure of a whole detail extraction for one element.
#[derive(Debug, Error, Clone)]
pub enum ExtractionError {
    #[error("failed to {step}: {source}")]
    Platform {
        step: &'static str,
        #[source]
        source: PlatformError,
    },

    #[error("failed to build {pattern} details: {source}")]
    Pattern {
        pattern: PatternId,
        #[source]
        source: PlatformError,
    },

    #[error("pattern {0} was reported as supported but could not be obtained")]
    PatternVanished(PatternId),

    #[error("detail worker panicked: {0}")]
    WorkerPanicked(String),

    #[error("failed to start detail worker: {0}")]
    WorkerSpawn(String),
}

impl ExtractionError {
    pub fn platform(step: &'static str) -> impl FnOnce(PlatformError) -> Self {
        move |source| Self::Platform { step, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uiscope_core::PlatformErrorKind;

    #[test]
    fn messages_name_the_failed_step() {
        let err = ExtractionError::platform("read properties")(PlatformError::new(
            PlatformErrorKind::ElementNotAvailable,
            "element died",
        ));
        assert_eq!(err.to_string(), "failed to read properties: element died");

        let err = ExtractionError::Pattern {
            pattern: PatternId::Toggle,
            source: PlatformError::simple(PlatformErrorKind::AccessDenied),
        };
        assert_eq!(err.to_string(), "failed to build Toggle details: AccessDenied");
    }
}
