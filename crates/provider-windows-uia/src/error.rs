use thiserror::Error;
use uiscope_core::{PlatformError, PlatformErrorKind};
use windows::Win32::Foundation::E_ACCESSDENIED;

#[allow(clippy::cast_possible_wrap)]
const UIA_E_ELEMENTNOTAVAILABLE: i32 = 0x8004_0201_u32 as i32;

#[derive(Debug, Error, Clone)]
pub enum UiaError {
    #[error("COM initialization failed: {0}")]
    ComInit(String),

    #[error("UIAutomation API error in {context}: {message}")]
    Api { context: &'static str, code: i32, message: String },
}

impl UiaError {
    pub fn api(context: &'static str, err: &windows::core::Error) -> Self {
        Self::Api { context, code: err.code().0, message: err.message().to_string() }
    }
}

impl From<UiaError> for PlatformError {
    fn from(err: UiaError) -> Self {
        let kind = match &err {
            UiaError::ComInit(_) => PlatformErrorKind::InitializationFailed,
            UiaError::Api { code, .. } if *code == UIA_E_ELEMENTNOTAVAILABLE => PlatformErrorKind::ElementNotAvailable,
            UiaError::Api { code, .. } if *code == E_ACCESSDENIED.0 => PlatformErrorKind::AccessDenied,
            UiaError::Api { .. } => PlatformErrorKind::CommunicationFailure,
        };
        PlatformError::new(kind, err.to_string())
    }
}
