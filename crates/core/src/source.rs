//! Registration of accessibility backends.
//!
//! Backends submit a static [`ElementSource`] with [`register_element_source!`];
//! the application picks one by id at startup.

use crate::element::ElementRef;
use crate::error::PlatformError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub id: &'static str,
    pub display_name: &'static str,
    /// Sources with a higher priority are preferred when no id is requested.
    pub priority: i32,
}

impl SourceDescriptor {
    pub const fn new(id: &'static str, display_name: &'static str, priority: i32) -> Self {
        Self { id, display_name, priority }
    }
}

pub trait ElementSource: Send + Sync {
    fn descriptor(&self) -> &SourceDescriptor;

    /// Root of the tree this source exposes (usually the desktop).
    fn root(&self) -> Result<ElementRef, PlatformError>;
}

pub struct ElementSourceRegistration {
    pub source: &'static dyn ElementSource,
}

inventory::collect!(ElementSourceRegistration);

/// Registered sources, highest priority first.
pub fn element_sources() -> Vec<&'static dyn ElementSource> {
    let mut sources: Vec<_> =
        inventory::iter::<ElementSourceRegistration>.into_iter().map(|entry| entry.source).collect();
    sources.sort_by(|a, b| b.descriptor().priority.cmp(&a.descriptor().priority));
    sources
}

pub fn find_element_source(id: &str) -> Option<&'static dyn ElementSource> {
    element_sources().into_iter().find(|source| source.descriptor().id == id)
}

#[macro_export]
macro_rules! register_element_source {
    ($source:expr) => {
        inventory::submit! {
            $crate::source::ElementSourceRegistration { source: $source }
        }
    };
}
