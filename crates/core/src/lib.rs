//! Platform contract consumed by the uiscope inspection engine.
//!
//! Backends (UI Automation, the in-memory mock) implement [`AccessibilityElement`]
//! and register an [`ElementSource`]; everything above this crate only talks to
//! the traits defined here.

pub mod element;
pub mod error;
pub mod pattern;
pub mod pattern_properties;
pub mod property;
pub mod source;
pub mod types;
pub mod value;

pub use element::{AccessibilityElement, ChildIter, ElementRef, SnapshotBatch};
pub use error::{PlatformError, PlatformErrorKind};
pub use pattern::{PatternId, PatternView, TextAttribute};
pub use property::{CacheRequest, FrameworkType, PropertyBatch, PropertyId};
pub use source::{
    ElementSource, ElementSourceRegistration, SourceDescriptor, element_sources, find_element_source,
};
pub use types::Rect;
pub use value::{AttrValue, ElementSummary, UiValue};
