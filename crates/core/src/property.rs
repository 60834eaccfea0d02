//! Element-level properties and batched reads.

use crate::error::PlatformError;
use crate::value::AttrValue;
use std::fmt;

/// Element properties the inspector reads for identification and state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyId {
    AutomationId,
    Name,
    ClassName,
    ControlType,
    LocalizedControlType,
    FrameworkId,
    ProcessId,
    IsEnabled,
    IsOffscreen,
    BoundingRectangle,
    HelpText,
    IsPassword,
    NativeWindowHandle,
}

impl PropertyId {
    pub const ALL: [PropertyId; 13] = [
        PropertyId::AutomationId,
        PropertyId::Name,
        PropertyId::ClassName,
        PropertyId::ControlType,
        PropertyId::LocalizedControlType,
        PropertyId::FrameworkId,
        PropertyId::ProcessId,
        PropertyId::IsEnabled,
        PropertyId::IsOffscreen,
        PropertyId::BoundingRectangle,
        PropertyId::HelpText,
        PropertyId::IsPassword,
        PropertyId::NativeWindowHandle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PropertyId::AutomationId => "AutomationId",
            PropertyId::Name => "Name",
            PropertyId::ClassName => "ClassName",
            PropertyId::ControlType => "ControlType",
            PropertyId::LocalizedControlType => "LocalizedControlType",
            PropertyId::FrameworkId => "FrameworkId",
            PropertyId::ProcessId => "ProcessId",
            PropertyId::IsEnabled => "IsEnabled",
            PropertyId::IsOffscreen => "IsOffscreen",
            PropertyId::BoundingRectangle => "BoundingRectangle",
            PropertyId::HelpText => "HelpText",
            PropertyId::IsPassword => "IsPassword",
            PropertyId::NativeWindowHandle => "NativeWindowHandle",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of properties to prefetch in one round trip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheRequest {
    properties: Vec<PropertyId>,
}

impl CacheRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, property: PropertyId) -> Self {
        if !self.properties.contains(&property) {
            self.properties.push(property);
        }
        self
    }

    pub fn with_properties<I>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = PropertyId>,
    {
        for property in properties {
            self = self.add(property);
        }
        self
    }

    pub fn properties(&self) -> &[PropertyId] {
        &self.properties
    }

    pub fn contains(&self, property: PropertyId) -> bool {
        self.properties.contains(&property)
    }
}

/// An activated batched read.
///
/// Backends fetch every requested property when the batch is created and
/// release the platform-side cache when it is dropped.
pub trait PropertyBatch: Send {
    /// Reads a property from the batch. Properties outside the request are
    /// read live by the backend.
    fn property(&self, property: PropertyId) -> Result<AttrValue, PlatformError>;
}

/// UI framework an element belongs to, derived from its framework id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameworkType {
    None,
    Win32,
    WinForms,
    Wpf,
    Xaml,
    Qt,
    Unknown,
}

impl FrameworkType {
    pub fn from_framework_id(framework_id: Option<&str>) -> Self {
        match framework_id {
            None | Some("") => FrameworkType::None,
            Some(id) => match id.to_ascii_lowercase().as_str() {
                "win32" => FrameworkType::Win32,
                "winform" => FrameworkType::WinForms,
                "wpf" => FrameworkType::Wpf,
                "xaml" | "directui" => FrameworkType::Xaml,
                "qt" => FrameworkType::Qt,
                _ => FrameworkType::Unknown,
            },
        }
    }
}

impl fmt::Display for FrameworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FrameworkType::None => "None",
            FrameworkType::Win32 => "Win32",
            FrameworkType::WinForms => "WinForms",
            FrameworkType::Wpf => "Wpf",
            FrameworkType::Xaml => "Xaml",
            FrameworkType::Qt => "Qt",
            FrameworkType::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn cache_request_deduplicates() {
        let request = CacheRequest::new()
            .add(PropertyId::Name)
            .with_properties([PropertyId::Name, PropertyId::ClassName]);
        assert_eq!(request.properties(), &[PropertyId::Name, PropertyId::ClassName]);
        assert!(request.contains(PropertyId::ClassName));
        assert!(!request.contains(PropertyId::HelpText));
    }

    #[rstest]
    fn names_round_trip() {
        for id in PropertyId::ALL {
            assert_eq!(PropertyId::from_name(id.name()), Some(id));
        }
        assert_eq!(PropertyId::from_name("Nope"), None);
    }

    #[rstest]
    #[case(None, FrameworkType::None)]
    #[case(Some(""), FrameworkType::None)]
    #[case(Some("Win32"), FrameworkType::Win32)]
    #[case(Some("WinForm"), FrameworkType::WinForms)]
    #[case(Some("WPF"), FrameworkType::Wpf)]
    #[case(Some("DirectUI"), FrameworkType::Xaml)]
    #[case(Some("Chrome"), FrameworkType::Unknown)]
    fn framework_type_from_id(#[case] id: Option<&str>, #[case] expected: FrameworkType) {
        assert_eq!(FrameworkType::from_framework_id(id), expected);
    }
}
