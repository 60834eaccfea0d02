use crate::error::PlatformError;
use crate::pattern::{PatternId, PatternView};
use crate::property::{CacheRequest, PropertyBatch, PropertyId};
use crate::value::AttrValue;
use std::sync::Arc;

pub type ElementRef = Arc<dyn AccessibilityElement>;

/// Child enumeration; each step may fail when the platform loses the element mid-walk.
pub type ChildIter<'a> = Box<dyn Iterator<Item = Result<ElementRef, PlatformError>> + Send + 'a>;

/// Opaque handle on one node of the platform accessibility tree.
///
/// Property reads report absence as [`AttrValue::NotSupported`]; an `Err` is
/// reserved for platform-level failures (element died, RPC failure, access denied).
pub trait AccessibilityElement: Send + Sync {
    fn property(&self, property: PropertyId) -> Result<AttrValue, PlatformError>;

    /// Enumerates the immediate children at the time of the call.
    fn children(&self) -> Result<ChildIter<'_>, PlatformError>;

    fn supported_patterns(&self) -> Result<Vec<PatternId>, PlatformError>;

    /// Returns a live view on the pattern, or `None` when it is not supported.
    fn pattern(&self, pattern: PatternId) -> Result<Option<Arc<dyn PatternView>>, PlatformError>;

    /// Activates a batched read of `request` against this element.
    ///
    /// The default captures the requested properties one by one; backends with
    /// a native cache mechanism override this to fetch them in one round trip.
    fn batch(&self, request: &CacheRequest) -> Result<Box<dyn PropertyBatch + '_>, PlatformError> {
        Ok(Box::new(SnapshotBatch::capture(self, request)?))
    }
}

/// Batch that captured its properties eagerly; anything outside the request
/// is read live from the element.
pub struct SnapshotBatch<'a, E: AccessibilityElement + ?Sized> {
    element: &'a E,
    values: Vec<(PropertyId, AttrValue)>,
}

impl<'a, E: AccessibilityElement + ?Sized> SnapshotBatch<'a, E> {
    pub fn capture(element: &'a E, request: &CacheRequest) -> Result<Self, PlatformError> {
        let values = request
            .properties()
            .iter()
            .map(|id| element.property(*id).map(|value| (*id, value)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { element, values })
    }

    pub fn from_values(element: &'a E, values: Vec<(PropertyId, AttrValue)>) -> Self {
        Self { element, values }
    }
}

impl<E: AccessibilityElement + ?Sized> PropertyBatch for SnapshotBatch<'_, E> {
    fn property(&self, property: PropertyId) -> Result<AttrValue, PlatformError> {
        match self.values.iter().find(|(id, _)| *id == property) {
            Some((_, value)) => Ok(value.clone()),
            None => self.element.property(property),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlatformErrorKind;
    use crate::value::UiValue;
    use rstest::rstest;
    use std::sync::Mutex;

    /// Element that only answers property reads and records each one.
    #[derive(Default)]
    struct RecordingElement {
        reads: Mutex<Vec<PropertyId>>,
        dead: bool,
    }

    impl RecordingElement {
        fn reads(&self) -> Vec<PropertyId> {
            self.reads.lock().unwrap().clone()
        }
    }

    impl AccessibilityElement for RecordingElement {
        fn property(&self, property: PropertyId) -> Result<AttrValue, PlatformError> {
            if self.dead {
                return Err(PlatformError::element_not_available("gone"));
            }
            self.reads.lock().unwrap().push(property);
            Ok(match property {
                PropertyId::Name => AttrValue::Value(UiValue::from("OK")),
                PropertyId::ClassName => AttrValue::Value(UiValue::from("Button")),
                PropertyId::IsEnabled => AttrValue::Mixed,
                _ => AttrValue::NotSupported,
            })
        }

        fn children(&self) -> Result<ChildIter<'_>, PlatformError> {
            Ok(Box::new(std::iter::empty()))
        }

        fn supported_patterns(&self) -> Result<Vec<PatternId>, PlatformError> {
            Ok(Vec::new())
        }

        fn pattern(&self, _pattern: PatternId) -> Result<Option<Arc<dyn PatternView>>, PlatformError> {
            Ok(None)
        }
    }

    #[rstest]
    fn default_batch_captures_requested_properties_up_front() {
        let element = RecordingElement::default();
        let request =
            CacheRequest::new().with_properties([PropertyId::Name, PropertyId::AutomationId, PropertyId::IsEnabled]);

        let batch = element.batch(&request).unwrap();
        assert_eq!(element.reads(), vec![PropertyId::Name, PropertyId::AutomationId, PropertyId::IsEnabled]);

        assert_eq!(batch.property(PropertyId::Name).unwrap(), AttrValue::Value(UiValue::from("OK")));
        assert_eq!(batch.property(PropertyId::AutomationId).unwrap(), AttrValue::NotSupported);
        assert_eq!(batch.property(PropertyId::IsEnabled).unwrap(), AttrValue::Mixed);
        assert_eq!(element.reads().len(), 3);
    }

    #[rstest]
    fn default_batch_reads_unrequested_properties_live() {
        let element = RecordingElement::default();
        let batch = element.batch(&CacheRequest::new().add(PropertyId::Name)).unwrap();

        assert_eq!(batch.property(PropertyId::ClassName).unwrap(), AttrValue::Value(UiValue::from("Button")));
        assert_eq!(batch.property(PropertyId::ClassName).unwrap(), AttrValue::Value(UiValue::from("Button")));
        assert_eq!(element.reads(), vec![PropertyId::Name, PropertyId::ClassName, PropertyId::ClassName]);
    }

    #[rstest]
    fn default_batch_fails_when_element_is_gone() {
        let element = RecordingElement { dead: true, ..RecordingElement::default() };
        let err = element.batch(&CacheRequest::new().add(PropertyId::Name)).err().unwrap();
        assert_eq!(err.kind, PlatformErrorKind::ElementNotAvailable);
    }
}
