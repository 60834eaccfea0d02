use crate::com;
use crate::element::UiaElement;
use crate::error::UiaError;
use uiscope_core::{ElementRef, ElementSource, PlatformError, SourceDescriptor, register_element_source};

pub const UIA_SOURCE_ID: &str = "windows-uia";

pub struct UiaSource {
    descriptor: SourceDescriptor,
}

impl UiaSource {
    const fn new() -> Self {
        Self { descriptor: SourceDescriptor::new(UIA_SOURCE_ID, "Windows UI Automation", 100) }
    }
}

impl ElementSource for UiaSource {
    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    fn root(&self) -> Result<ElementRef, PlatformError> {
        let uia = com::uia()?;
        let root = unsafe { uia.GetRootElement() }.map_err(|e| UiaError::api("IUIAutomation::GetRootElement", &e))?;
        tracing::debug!("acquired UIA desktop root");
        Ok(UiaElement::into_ref(root))
    }
}

pub static UIA_SOURCE: UiaSource = UiaSource::new();

register_element_source!(&UIA_SOURCE);
