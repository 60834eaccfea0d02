//! Canonical pattern property names (PascalCase, as UI Automation names them).

use crate::pattern::PatternId;

pub mod annotation {
    pub const ANNOTATION_TYPE_ID: &str = "AnnotationTypeId";
    pub const ANNOTATION_TYPE_NAME: &str = "AnnotationTypeName";
    pub const AUTHOR: &str = "Author";
    pub const DATE_TIME: &str = "DateTime";
    pub const TARGET: &str = "Target";
}

pub mod dock {
    pub const DOCK_POSITION: &str = "DockPosition";
}

pub mod drag {
    pub const IS_GRABBED: &str = "IsGrabbed";
    pub const DROP_EFFECT: &str = "DropEffect";
    pub const DROP_EFFECTS: &str = "DropEffects";
    pub const GRABBED_ITEMS: &str = "GrabbedItems";
}

pub mod drop_target {
    pub const DROP_TARGET_EFFECT: &str = "DropTargetEffect";
    pub const DROP_TARGET_EFFECTS: &str = "DropTargetEffects";
}

pub mod expand_collapse {
    pub const EXPAND_COLLAPSE_STATE: &str = "ExpandCollapseState";
}

pub mod grid_item {
    pub const COLUMN: &str = "Column";
    pub const COLUMN_SPAN: &str = "ColumnSpan";
    pub const ROW: &str = "Row";
    pub const ROW_SPAN: &str = "RowSpan";
    pub const CONTAINING_GRID: &str = "ContainingGrid";
}

pub mod grid {
    pub const COLUMN_COUNT: &str = "ColumnCount";
    pub const ROW_COUNT: &str = "RowCount";
}

pub mod legacy_iaccessible {
    pub const NAME: &str = "Name";
    pub const STATE: &str = "State";
    pub const ROLE: &str = "Role";
    pub const VALUE: &str = "Value";
    pub const CHILD_ID: &str = "ChildId";
    pub const DEFAULT_ACTION: &str = "DefaultAction";
    pub const DESCRIPTION: &str = "Description";
    pub const HELP: &str = "Help";
    pub const KEYBOARD_SHORTCUT: &str = "KeyboardShortcut";
    pub const SELECTION: &str = "Selection";
}

pub mod multiple_view {
    pub const CURRENT_VIEW: &str = "CurrentView";
    pub const SUPPORTED_VIEWS: &str = "SupportedViews";
}

pub mod range_value {
    pub const IS_READ_ONLY: &str = "IsReadOnly";
    pub const SMALL_CHANGE: &str = "SmallChange";
    pub const LARGE_CHANGE: &str = "LargeChange";
    pub const MINIMUM: &str = "Minimum";
    pub const MAXIMUM: &str = "Maximum";
    pub const VALUE: &str = "Value";
}

pub mod scroll {
    pub const HORIZONTAL_SCROLL_PERCENT: &str = "HorizontalScrollPercent";
    pub const HORIZONTAL_VIEW_SIZE: &str = "HorizontalViewSize";
    pub const HORIZONTALLY_SCROLLABLE: &str = "HorizontallyScrollable";
    pub const VERTICAL_SCROLL_PERCENT: &str = "VerticalScrollPercent";
    pub const VERTICAL_VIEW_SIZE: &str = "VerticalViewSize";
    pub const VERTICALLY_SCROLLABLE: &str = "VerticallyScrollable";
}

pub mod selection_item {
    pub const IS_SELECTED: &str = "IsSelected";
    pub const SELECTION_CONTAINER: &str = "SelectionContainer";
}

pub mod selection {
    pub const SELECTION: &str = "Selection";
    pub const CAN_SELECT_MULTIPLE: &str = "CanSelectMultiple";
    pub const IS_SELECTION_REQUIRED: &str = "IsSelectionRequired";
}

pub mod spreadsheet_item {
    pub const FORMULA: &str = "Formula";
    pub const ANNOTATION_OBJECTS: &str = "AnnotationObjects";
    pub const ANNOTATION_TYPES: &str = "AnnotationTypes";
}

pub mod styles {
    pub const STYLE_ID: &str = "StyleId";
    pub const STYLE_NAME: &str = "StyleName";
    pub const FILL_COLOR: &str = "FillColor";
    pub const FILL_PATTERN_STYLE: &str = "FillPatternStyle";
    pub const SHAPE: &str = "Shape";
    pub const FILL_PATTERN_COLOR: &str = "FillPatternColor";
    pub const EXTENDED_PROPERTIES: &str = "ExtendedProperties";
}

pub mod table_item {
    pub const COLUMN_HEADER_ITEMS: &str = "ColumnHeaderItems";
    pub const ROW_HEADER_ITEMS: &str = "RowHeaderItems";
}

pub mod table {
    pub const COLUMN_HEADERS: &str = "ColumnHeaders";
    pub const ROW_HEADERS: &str = "RowHeaders";
    pub const ROW_OR_COLUMN_MAJOR: &str = "RowOrColumnMajor";
}

pub mod toggle {
    pub const TOGGLE_STATE: &str = "ToggleState";
}

pub mod transform {
    pub const CAN_MOVE: &str = "CanMove";
    pub const CAN_RESIZE: &str = "CanResize";
    pub const CAN_ROTATE: &str = "CanRotate";
}

pub mod transform2 {
    pub const CAN_ZOOM: &str = "CanZoom";
    pub const ZOOM_LEVEL: &str = "ZoomLevel";
    pub const ZOOM_MINIMUM: &str = "ZoomMinimum";
    pub const ZOOM_MAXIMUM: &str = "ZoomMaximum";
}

pub mod value {
    pub const IS_READ_ONLY: &str = "IsReadOnly";
    pub const VALUE: &str = "Value";
}

pub mod window {
    pub const CAN_MAXIMIZE: &str = "CanMaximize";
    pub const CAN_MINIMIZE: &str = "CanMinimize";
    pub const IS_MODAL: &str = "IsModal";
    pub const IS_TOPMOST: &str = "IsTopmost";
    pub const WINDOW_VISUAL_STATE: &str = "WindowVisualState";
    pub const WINDOW_INTERACTION_STATE: &str = "WindowInteractionState";
}

/// Every readable property of a pattern; empty for patterns that only expose methods.
pub fn for_pattern(pattern: PatternId) -> &'static [&'static str] {
    match pattern {
        PatternId::Annotation => &[
            annotation::ANNOTATION_TYPE_ID,
            annotation::ANNOTATION_TYPE_NAME,
            annotation::AUTHOR,
            annotation::DATE_TIME,
            annotation::TARGET,
        ],
        PatternId::Dock => &[dock::DOCK_POSITION],
        PatternId::Drag => {
            &[drag::IS_GRABBED, drag::DROP_EFFECT, drag::DROP_EFFECTS, drag::GRABBED_ITEMS]
        }
        PatternId::DropTarget => &[drop_target::DROP_TARGET_EFFECT, drop_target::DROP_TARGET_EFFECTS],
        PatternId::ExpandCollapse => &[expand_collapse::EXPAND_COLLAPSE_STATE],
        PatternId::GridItem => &[
            grid_item::COLUMN,
            grid_item::COLUMN_SPAN,
            grid_item::ROW,
            grid_item::ROW_SPAN,
            grid_item::CONTAINING_GRID,
        ],
        PatternId::Grid => &[grid::COLUMN_COUNT, grid::ROW_COUNT],
        PatternId::LegacyIAccessible => &[
            legacy_iaccessible::NAME,
            legacy_iaccessible::STATE,
            legacy_iaccessible::ROLE,
            legacy_iaccessible::VALUE,
            legacy_iaccessible::CHILD_ID,
            legacy_iaccessible::DEFAULT_ACTION,
            legacy_iaccessible::DESCRIPTION,
            legacy_iaccessible::HELP,
            legacy_iaccessible::KEYBOARD_SHORTCUT,
            legacy_iaccessible::SELECTION,
        ],
        PatternId::MultipleView => &[multiple_view::CURRENT_VIEW, multiple_view::SUPPORTED_VIEWS],
        PatternId::RangeValue => &[
            range_value::IS_READ_ONLY,
            range_value::SMALL_CHANGE,
            range_value::LARGE_CHANGE,
            range_value::MINIMUM,
            range_value::MAXIMUM,
            range_value::VALUE,
        ],
        PatternId::Scroll => &[
            scroll::HORIZONTAL_SCROLL_PERCENT,
            scroll::HORIZONTAL_VIEW_SIZE,
            scroll::HORIZONTALLY_SCROLLABLE,
            scroll::VERTICAL_SCROLL_PERCENT,
            scroll::VERTICAL_VIEW_SIZE,
            scroll::VERTICALLY_SCROLLABLE,
        ],
        PatternId::SelectionItem => {
            &[selection_item::IS_SELECTED, selection_item::SELECTION_CONTAINER]
        }
        PatternId::Selection => &[
            selection::SELECTION,
            selection::CAN_SELECT_MULTIPLE,
            selection::IS_SELECTION_REQUIRED,
        ],
        PatternId::SpreadsheetItem => &[
            spreadsheet_item::FORMULA,
            spreadsheet_item::ANNOTATION_OBJECTS,
            spreadsheet_item::ANNOTATION_TYPES,
        ],
        PatternId::Styles => &[
            styles::STYLE_ID,
            styles::STYLE_NAME,
            styles::FILL_COLOR,
            styles::FILL_PATTERN_STYLE,
            styles::SHAPE,
            styles::FILL_PATTERN_COLOR,
            styles::EXTENDED_PROPERTIES,
        ],
        PatternId::TableItem => &[table_item::COLUMN_HEADER_ITEMS, table_item::ROW_HEADER_ITEMS],
        PatternId::Table => &[table::COLUMN_HEADERS, table::ROW_HEADERS, table::ROW_OR_COLUMN_MAJOR],
        PatternId::Toggle => &[toggle::TOGGLE_STATE],
        PatternId::Transform => &[transform::CAN_MOVE, transform::CAN_RESIZE, transform::CAN_ROTATE],
        PatternId::Transform2 => &[
            transform2::CAN_ZOOM,
            transform2::ZOOM_LEVEL,
            transform2::ZOOM_MINIMUM,
            transform2::ZOOM_MAXIMUM,
        ],
        PatternId::Value => &[value::IS_READ_ONLY, value::VALUE],
        PatternId::Window => &[
            window::CAN_MAXIMIZE,
            window::CAN_MINIMIZE,
            window::IS_MODAL,
            window::IS_TOPMOST,
            window::WINDOW_VISUAL_STATE,
            window::WINDOW_INTERACTION_STATE,
        ],
        PatternId::Invoke
        | PatternId::ItemContainer
        | PatternId::ObjectModel
        | PatternId::ScrollItem
        | PatternId::Spreadsheet
        | PatternId::SynchronizedInput
        | PatternId::TextChild
        | PatternId::TextEdit
        | PatternId::Text
        | PatternId::Text2
        | PatternId::VirtualizedItem => &[],
    }
}
