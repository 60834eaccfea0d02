//! Pattern catalog and live pattern views.

use crate::error::PlatformError;
use crate::value::AttrValue;
use std::fmt;

macro_rules! pattern_catalog {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Capability contracts an element may implement.
        ///
        /// The declaration order is the catalog order used wherever patterns are listed.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum PatternId {
            $($variant),+
        }

        impl PatternId {
            pub const ALL: &'static [PatternId] = &[$(PatternId::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $(PatternId::$variant => $name),+
                }
            }
        }
    };
}

pattern_catalog! {
    Annotation => "Annotation",
    Dock => "Dock",
    Drag => "Drag",
    DropTarget => "DropTarget",
    ExpandCollapse => "ExpandCollapse",
    GridItem => "GridItem",
    Grid => "Grid",
    Invoke => "Invoke",
    ItemContainer => "ItemContainer",
    LegacyIAccessible => "LegacyIAccessible",
    MultipleView => "MultipleView",
    ObjectModel => "ObjectModel",
    RangeValue => "RangeValue",
    ScrollItem => "ScrollItem",
    Scroll => "Scroll",
    SelectionItem => "SelectionItem",
    Selection => "Selection",
    Spreadsheet => "Spreadsheet",
    SpreadsheetItem => "SpreadsheetItem",
    Styles => "Styles",
    SynchronizedInput => "SynchronizedInput",
    TableItem => "TableItem",
    Table => "Table",
    TextChild => "TextChild",
    TextEdit => "TextEdit",
    Text => "Text",
    Text2 => "Text2",
    Toggle => "Toggle",
    Transform => "Transform",
    Transform2 => "Transform2",
    Value => "Value",
    VirtualizedItem => "VirtualizedItem",
    Window => "Window",
}

impl PatternId {
    /// Position of the pattern in [`PatternId::ALL`].
    pub fn catalog_index(self) -> usize {
        Self::ALL.iter().position(|id| *id == self).unwrap_or(usize::MAX)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Character formatting attributes read from a text range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAttribute {
    ForegroundColor,
    BackgroundColor,
    FontName,
    FontSize,
    FontWeight,
}

impl TextAttribute {
    pub const ALL: [TextAttribute; 5] = [
        TextAttribute::ForegroundColor,
        TextAttribute::BackgroundColor,
        TextAttribute::FontName,
        TextAttribute::FontSize,
        TextAttribute::FontWeight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TextAttribute::ForegroundColor => "ForegroundColor",
            TextAttribute::BackgroundColor => "BackgroundColor",
            TextAttribute::FontName => "FontName",
            TextAttribute::FontSize => "FontSize",
            TextAttribute::FontWeight => "FontWeight",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.name() == name)
    }
}

/// Live view on one supported pattern of an element.
pub trait PatternView: Send + Sync {
    fn id(&self) -> PatternId;

    /// Reads a pattern property by its canonical name
    /// (see [`crate::pattern_properties`]).
    fn property(&self, name: &str) -> Result<AttrValue, PlatformError>;

    /// Reads a formatting attribute over the whole document range.
    /// Only meaningful for text patterns.
    fn document_range_attribute(&self, _attribute: TextAttribute) -> Result<AttrValue, PlatformError> {
        Ok(AttrValue::NotSupported)
    }
}
