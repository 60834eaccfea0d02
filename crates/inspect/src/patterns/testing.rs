//! In-crate pattern view double for builder tests.

use std::collections::HashMap;
use uiscope_core::{
    AttrValue, PatternId, PatternView, PlatformError, PlatformErrorKind, TextAttribute, UiValue,
};

pub(crate) struct FakeView {
    id: PatternId,
    properties: HashMap<&'static str, AttrValue>,
    text: HashMap<TextAttribute, AttrValue>,
    failing: bool,
}

impl FakeView {
    pub(crate) fn new(id: PatternId) -> Self {
        Self { id, properties: HashMap::new(), text: HashMap::new(), failing: false }
    }

    pub(crate) fn with(mut self, name: &'static str, value: impl Into<UiValue>) -> Self {
        self.properties.insert(name, AttrValue::Value(value.into()));
        self
    }

    pub(crate) fn with_text(mut self, attribute: TextAttribute, value: AttrValue) -> Self {
        self.text.insert(attribute, value);
        self
    }

    pub(crate) fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    fn check(&self) -> Result<(), PlatformError> {
        if self.failing {
            Err(PlatformError::new(PlatformErrorKind::CommunicationFailure, "rpc failed"))
        } else {
            Ok(())
        }
    }
}

impl PatternView for FakeView {
    fn id(&self) -> PatternId {
        self.id
    }

    fn property(&self, name: &str) -> Result<AttrValue, PlatformError> {
        self.check()?;
        Ok(self.properties.get(name).cloned().unwrap_or(AttrValue::NotSupported))
    }

    fn document_range_attribute(&self, attribute: TextAttribute) -> Result<AttrValue, PlatformError> {
        self.check()?;
        Ok(self.text.get(&attribute).cloned().unwrap_or(AttrValue::NotSupported))
    }
}
