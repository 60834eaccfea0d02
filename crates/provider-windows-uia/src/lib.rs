//! Windows UI Automation backend.
//!
//! Elements wrap `IUIAutomationElement`; identity reads go through a UIA
//! cache request (`BuildUpdatedCache`) and pattern properties are read as
//! element properties with `ignoreDefault`, so unsupported values surface as
//! UIA's reserved not-supported sentinel. On other platforms the crate is empty.

#[cfg(windows)]
mod com;
#[cfg(windows)]
mod element;
#[cfg(windows)]
mod error;
#[cfg(windows)]
mod map;
#[cfg(windows)]
mod source;
#[cfg(windows)]
mod variant;

#[cfg(windows)]
pub use error::UiaError;
#[cfg(windows)]
pub use source::{UIA_SOURCE, UIA_SOURCE_ID, UiaSource};
