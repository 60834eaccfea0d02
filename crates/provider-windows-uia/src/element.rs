//! `IUIAutomationElement` behind the [`AccessibilityElement`] contract.

use crate::com::{self, Sentinels};
use crate::error::UiaError;
use crate::map;
use crate::variant::{property_to_attr, to_attr};
use std::sync::Arc;
use uiscope_core::{
    AccessibilityElement, AttrValue, CacheRequest, ChildIter, ElementRef, ElementSummary, PatternId, PatternView,
    PlatformError, PropertyBatch, PropertyId, TextAttribute,
};
use windows::Win32::UI::Accessibility::{
    IUIAutomationElement, IUIAutomationTextPattern, IUIAutomationTreeWalker, UIA_PROPERTY_ID, UIA_TextPatternId,
};

pub struct UiaElement {
    elem: IUIAutomationElement,
}

// COM objects are created in the MTA; every entry point joins it before use.
unsafe impl Send for UiaElement {}
unsafe impl Sync for UiaElement {}

impl UiaElement {
    pub fn new(elem: IUIAutomationElement) -> Self {
        Self { elem }
    }

    pub fn into_ref(elem: IUIAutomationElement) -> ElementRef {
        Arc::new(Self::new(elem))
    }

    fn read_current(&self, id: UIA_PROPERTY_ID, sentinels: &Sentinels) -> Result<AttrValue, PlatformError> {
        let variant = unsafe { self.elem.GetCurrentPropertyValueEx(id, true) }
            .map_err(|e| UiaError::api("IUIAutomationElement::GetCurrentPropertyValueEx", &e))?;
        Ok(to_attr(&variant, sentinels))
    }
}

impl AccessibilityElement for UiaElement {
    fn property(&self, property: PropertyId) -> Result<AttrValue, PlatformError> {
        let sentinels = com::sentinels()?;
        let variant = unsafe { self.elem.GetCurrentPropertyValueEx(map::property_id(property), true) }
            .map_err(|e| UiaError::api("IUIAutomationElement::GetCurrentPropertyValueEx", &e))?;
        Ok(property_to_attr(property, &variant, &sentinels))
    }

    fn children(&self) -> Result<ChildIter<'_>, PlatformError> {
        let walker = com::raw_walker()?;
        Ok(Box::new(UiaChildren { walker, parent: self.elem.clone(), current: None, started: false, done: false }))
    }

    fn supported_patterns(&self) -> Result<Vec<PatternId>, PlatformError> {
        let uia = com::uia()?;
        let cached = unsafe {
            let request = uia.CreateCacheRequest().map_err(|e| UiaError::api("IUIAutomation::CreateCacheRequest", &e))?;
            for pattern in PatternId::ALL {
                request
                    .AddProperty(map::availability_property(*pattern))
                    .map_err(|e| UiaError::api("IUIAutomationCacheRequest::AddProperty", &e))?;
            }
            self.elem
                .BuildUpdatedCache(&request)
                .map_err(|e| UiaError::api("IUIAutomationElement::BuildUpdatedCache", &e))?
        };
        let mut supported = Vec::new();
        for pattern in PatternId::ALL {
            let variant = unsafe { cached.GetCachedPropertyValue(map::availability_property(*pattern)) }
                .map_err(|e| UiaError::api("IUIAutomationElement::GetCachedPropertyValue", &e))?;
            if bool::try_from(&variant).unwrap_or(false) {
                supported.push(*pattern);
            }
        }
        Ok(supported)
    }

    fn pattern(&self, pattern: PatternId) -> Result<Option<Arc<dyn PatternView>>, PlatformError> {
        let variant = unsafe { self.elem.GetCurrentPropertyValue(map::availability_property(pattern)) }
            .map_err(|e| UiaError::api("IUIAutomationElement::GetCurrentPropertyValue", &e))?;
        if !bool::try_from(&variant).unwrap_or(false) {
            return Ok(None);
        }
        Ok(Some(Arc::new(UiaPatternView { owner: UiaElement::new(self.elem.clone()), id: pattern })))
    }

    fn batch(&self, request: &CacheRequest) -> Result<Box<dyn PropertyBatch + '_>, PlatformError> {
        let uia = com::uia()?;
        let sentinels = com::sentinels()?;
        let cached = unsafe {
            let cache = uia.CreateCacheRequest().map_err(|e| UiaError::api("IUIAutomation::CreateCacheRequest", &e))?;
            for property in request.properties() {
                cache
                    .AddProperty(map::property_id(*property))
                    .map_err(|e| UiaError::api("IUIAutomationCacheRequest::AddProperty", &e))?;
            }
            self.elem
                .BuildUpdatedCache(&cache)
                .map_err(|e| UiaError::api("IUIAutomationElement::BuildUpdatedCache", &e))?
        };
        tracing::trace!(properties = request.properties().len(), "built UIA cache");
        Ok(Box::new(UiaBatch { owner: self, cached, requested: request.properties().to_vec(), sentinels }))
    }
}

pub(crate) fn summarize(elem: &IUIAutomationElement) -> ElementSummary {
    unsafe {
        let control_type = elem.CurrentControlType().map_or("Custom", |id| map::control_type_name(id.0));
        let name = elem.CurrentName().map(|value| value.to_string()).unwrap_or_default();
        let automation_id = elem.CurrentAutomationId().map(|value| value.to_string()).unwrap_or_default();
        ElementSummary::new(control_type, name).with_automation_id(automation_id)
    }
}

struct UiaBatch<'a> {
    owner: &'a UiaElement,
    cached: IUIAutomationElement,
    requested: Vec<PropertyId>,
    sentinels: Sentinels,
}

unsafe impl Send for UiaBatch<'_> {}

impl PropertyBatch for UiaBatch<'_> {
    fn property(&self, property: PropertyId) -> Result<AttrValue, PlatformError> {
        if !self.requested.contains(&property) {
            return self.owner.property(property);
        }
        let variant = unsafe { self.cached.GetCachedPropertyValueEx(map::property_id(property), true) }
            .map_err(|e| UiaError::api("IUIAutomationElement::GetCachedPropertyValueEx", &e))?;
        Ok(property_to_attr(property, &variant, &self.sentinels))
    }
}

struct UiaPatternView {
    owner: UiaElement,
    id: PatternId,
}

impl PatternView for UiaPatternView {
    fn id(&self) -> PatternId {
        self.id
    }

    fn property(&self, name: &str) -> Result<AttrValue, PlatformError> {
        let Some(id) = map::pattern_property(self.id, name) else {
            return Ok(AttrValue::NotSupported);
        };
        let sentinels = com::sentinels()?;
        self.owner.read_current(id, &sentinels)
    }

    fn document_range_attribute(&self, attribute: TextAttribute) -> Result<AttrValue, PlatformError> {
        if !matches!(self.id, PatternId::Text | PatternId::Text2) {
            return Ok(AttrValue::NotSupported);
        }
        let sentinels = com::sentinels()?;
        let variant = unsafe {
            let text = self
                .owner
                .elem
                .GetCurrentPatternAs::<IUIAutomationTextPattern>(UIA_TextPatternId)
                .map_err(|e| UiaError::api("IUIAutomationElement::GetCurrentPatternAs", &e))?;
            let range = text.DocumentRange().map_err(|e| UiaError::api("IUIAutomationTextPattern::DocumentRange", &e))?;
            range
                .GetAttributeValue(map::text_attribute_id(attribute))
                .map_err(|e| UiaError::api("IUIAutomationTextRange::GetAttributeValue", &e))?
        };
        Ok(to_attr(&variant, &sentinels))
    }
}

struct UiaChildren {
    walker: IUIAutomationTreeWalker,
    parent: IUIAutomationElement,
    current: Option<IUIAutomationElement>,
    started: bool,
    done: bool,
}

unsafe impl Send for UiaChildren {}

impl Iterator for UiaChildren {
    type Item = Result<ElementRef, PlatformError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let (context, step) = if self.started {
            let current = self.current.as_ref()?;
            ("IUIAutomationTreeWalker::GetNextSiblingElement", unsafe { self.walker.GetNextSiblingElement(current) })
        } else {
            self.started = true;
            ("IUIAutomationTreeWalker::GetFirstChildElement", unsafe { self.walker.GetFirstChildElement(&self.parent) })
        };
        match step {
            Ok(child) => {
                self.current = Some(child.clone());
                Some(Ok(UiaElement::into_ref(child)))
            }
            // A null element with S_OK marks the end of the sibling chain.
            Err(err) if err.code().is_ok() => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(UiaError::api(context, &err).into()))
            }
        }
    }
}
