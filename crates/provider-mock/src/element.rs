use crate::tree::{ElementSpec, PatternSpec, StaticMockTree};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use uiscope_core::{
    AccessibilityElement, AttrValue, CacheRequest, ChildIter, ElementRef, PatternId, PatternView, PlatformError,
    PlatformErrorKind, PropertyBatch, PropertyId, SnapshotBatch, TextAttribute,
};

/// Counts simulated cross-process calls for one instantiated tree.
#[derive(Debug, Default)]
pub struct MockStats {
    round_trips: AtomicUsize,
}

impl MockStats {
    pub fn round_trips(&self) -> usize {
        self.round_trips.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.round_trips.fetch_add(1, Ordering::SeqCst);
    }
}

/// Live view on an [`ElementSpec`].
pub struct MockElement {
    spec: Arc<ElementSpec>,
    stats: Arc<MockStats>,
}

impl MockElement {
    pub fn new(spec: Arc<ElementSpec>, stats: Arc<MockStats>) -> Self {
        Self { spec, stats }
    }

    /// Root element of `tree` plus the call counter shared by the whole tree.
    pub fn from_tree(tree: &StaticMockTree) -> (ElementRef, Arc<MockStats>) {
        let stats = Arc::new(MockStats::default());
        let root: ElementRef = Arc::new(Self::new(Arc::clone(tree.root()), Arc::clone(&stats)));
        (root, stats)
    }

    pub fn spec(&self) -> &ElementSpec {
        &self.spec
    }

    fn ensure_alive(&self) -> Result<(), PlatformError> {
        self.stats.record();
        if self.spec.dead {
            Err(PlatformError::element_not_available("mock element is no longer available"))
        } else {
            Ok(())
        }
    }

    fn read(&self, property: PropertyId) -> AttrValue {
        self.spec.property(property).cloned().map_or(AttrValue::NotSupported, AttrValue::Value)
    }
}

impl AccessibilityElement for MockElement {
    fn property(&self, property: PropertyId) -> Result<AttrValue, PlatformError> {
        self.ensure_alive()?;
        Ok(self.read(property))
    }

    fn children(&self) -> Result<ChildIter<'_>, PlatformError> {
        self.ensure_alive()?;
        let fail_at = self.spec.fail_children_at;
        let stats = Arc::clone(&self.stats);
        let iter = self.spec.children().iter().enumerate().map(move |(index, child)| {
            if fail_at == Some(index) {
                return Err(PlatformError::new(
                    PlatformErrorKind::CommunicationFailure,
                    format!("child enumeration failed at index {index}"),
                ));
            }
            let element: ElementRef = Arc::new(MockElement::new(Arc::clone(child), Arc::clone(&stats)));
            Ok(element)
        });
        Ok(Box::new(iter))
    }

    fn supported_patterns(&self) -> Result<Vec<PatternId>, PlatformError> {
        self.ensure_alive()?;
        Ok(self.spec.patterns().iter().map(PatternSpec::id).collect())
    }

    fn pattern(&self, pattern: PatternId) -> Result<Option<Arc<dyn PatternView>>, PlatformError> {
        self.ensure_alive()?;
        Ok(self.spec.patterns().iter().find(|spec| spec.id() == pattern).map(|spec| {
            let view: Arc<dyn PatternView> = Arc::new(MockPatternView { spec: spec.clone() });
            view
        }))
    }

    /// Captures every requested property in a single round trip.
    fn batch(&self, request: &CacheRequest) -> Result<Box<dyn PropertyBatch + '_>, PlatformError> {
        self.ensure_alive()?;
        let values = request.properties().iter().map(|id| (*id, self.read(*id))).collect();
        Ok(Box::new(SnapshotBatch::from_values(self, values)))
    }
}

struct MockPatternView {
    spec: PatternSpec,
}

impl PatternView for MockPatternView {
    fn id(&self) -> PatternId {
        self.spec.id
    }

    fn property(&self, name: &str) -> Result<AttrValue, PlatformError> {
        Ok(self
            .spec
            .properties
            .iter()
            .find(|(property, _)| property == name)
            .map_or(AttrValue::NotSupported, |(_, value)| AttrValue::Value(value.clone())))
    }

    fn document_range_attribute(&self, attribute: TextAttribute) -> Result<AttrValue, PlatformError> {
        if self.spec.id != PatternId::Text {
            return Ok(AttrValue::NotSupported);
        }
        Ok(self
            .spec
            .text
            .iter()
            .find(|(candidate, _)| *candidate == attribute)
            .map_or(AttrValue::NotSupported, |(_, value)| value.clone()))
    }
}
