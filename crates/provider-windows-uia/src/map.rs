//! Translation tables between uiscope identifiers and UIA ids.

use uiscope_core::pattern_properties as props;
use uiscope_core::{PatternId, PropertyId, TextAttribute};
use windows::Win32::UI::Accessibility::*;

/// Maps UIA ControlType ids to control type names.
pub fn control_type_name(control_type: i32) -> &'static str {
    match control_type {
        x if x == UIA_ButtonControlTypeId.0 => "Button",
        x if x == UIA_CalendarControlTypeId.0 => "Calendar",
        x if x == UIA_CheckBoxControlTypeId.0 => "CheckBox",
        x if x == UIA_ComboBoxControlTypeId.0 => "ComboBox",
        x if x == UIA_EditControlTypeId.0 => "Edit",
        x if x == UIA_HyperlinkControlTypeId.0 => "Hyperlink",
        x if x == UIA_ImageControlTypeId.0 => "Image",
        x if x == UIA_ListItemControlTypeId.0 => "ListItem",
        x if x == UIA_ListControlTypeId.0 => "List",
        x if x == UIA_MenuControlTypeId.0 => "Menu",
        x if x == UIA_MenuBarControlTypeId.0 => "MenuBar",
        x if x == UIA_MenuItemControlTypeId.0 => "MenuItem",
        x if x == UIA_ProgressBarControlTypeId.0 => "ProgressBar",
        x if x == UIA_RadioButtonControlTypeId.0 => "RadioButton",
        x if x == UIA_ScrollBarControlTypeId.0 => "ScrollBar",
        x if x == UIA_SliderControlTypeId.0 => "Slider",
        x if x == UIA_SpinnerControlTypeId.0 => "Spinner",
        x if x == UIA_StatusBarControlTypeId.0 => "StatusBar",
        x if x == UIA_TabControlTypeId.0 => "Tab",
        x if x == UIA_TabItemControlTypeId.0 => "TabItem",
        x if x == UIA_TextControlTypeId.0 => "Text",
        x if x == UIA_ToolBarControlTypeId.0 => "ToolBar",
        x if x == UIA_ToolTipControlTypeId.0 => "ToolTip",
        x if x == UIA_TreeControlTypeId.0 => "Tree",
        x if x == UIA_TreeItemControlTypeId.0 => "TreeItem",
        x if x == UIA_GroupControlTypeId.0 => "Group",
        x if x == UIA_ThumbControlTypeId.0 => "Thumb",
        x if x == UIA_DataGridControlTypeId.0 => "DataGrid",
        x if x == UIA_DataItemControlTypeId.0 => "DataItem",
        x if x == UIA_DocumentControlTypeId.0 => "Document",
        x if x == UIA_SplitButtonControlTypeId.0 => "SplitButton",
        x if x == UIA_WindowControlTypeId.0 => "Window",
        x if x == UIA_PaneControlTypeId.0 => "Pane",
        x if x == UIA_HeaderControlTypeId.0 => "Header",
        x if x == UIA_HeaderItemControlTypeId.0 => "HeaderItem",
        x if x == UIA_TableControlTypeId.0 => "Table",
        x if x == UIA_TitleBarControlTypeId.0 => "TitleBar",
        x if x == UIA_SeparatorControlTypeId.0 => "Separator",
        x if x == UIA_SemanticZoomControlTypeId.0 => "SemanticZoom",
        x if x == UIA_AppBarControlTypeId.0 => "AppBar",
        _ => "Custom",
    }
}

pub fn property_id(property: PropertyId) -> UIA_PROPERTY_ID {
    match property {
        PropertyId::AutomationId => UIA_AutomationIdPropertyId,
        PropertyId::Name => UIA_NamePropertyId,
        PropertyId::ClassName => UIA_ClassNamePropertyId,
        PropertyId::ControlType => UIA_ControlTypePropertyId,
        PropertyId::LocalizedControlType => UIA_LocalizedControlTypePropertyId,
        PropertyId::FrameworkId => UIA_FrameworkIdPropertyId,
        PropertyId::ProcessId => UIA_ProcessIdPropertyId,
        PropertyId::IsEnabled => UIA_IsEnabledPropertyId,
        PropertyId::IsOffscreen => UIA_IsOffscreenPropertyId,
        PropertyId::BoundingRectangle => UIA_BoundingRectanglePropertyId,
        PropertyId::HelpText => UIA_HelpTextPropertyId,
        PropertyId::IsPassword => UIA_IsPasswordPropertyId,
        PropertyId::NativeWindowHandle => UIA_NativeWindowHandlePropertyId,
    }
}

pub fn pattern_id(pattern: PatternId) -> UIA_PATTERN_ID {
    match pattern {
        PatternId::Annotation => UIA_AnnotationPatternId,
        PatternId::Dock => UIA_DockPatternId,
        PatternId::Drag => UIA_DragPatternId,
        PatternId::DropTarget => UIA_DropTargetPatternId,
        PatternId::ExpandCollapse => UIA_ExpandCollapsePatternId,
        PatternId::GridItem => UIA_GridItemPatternId,
        PatternId::Grid => UIA_GridPatternId,
        PatternId::Invoke => UIA_InvokePatternId,
        PatternId::ItemContainer => UIA_ItemContainerPatternId,
        PatternId::LegacyIAccessible => UIA_LegacyIAccessiblePatternId,
        PatternId::MultipleView => UIA_MultipleViewPatternId,
        PatternId::ObjectModel => UIA_ObjectModelPatternId,
        PatternId::RangeValue => UIA_RangeValuePatternId,
        PatternId::ScrollItem => UIA_ScrollItemPatternId,
        PatternId::Scroll => UIA_ScrollPatternId,
        PatternId::SelectionItem => UIA_SelectionItemPatternId,
        PatternId::Selection => UIA_SelectionPatternId,
        PatternId::Spreadsheet => UIA_SpreadsheetPatternId,
        PatternId::SpreadsheetItem => UIA_SpreadsheetItemPatternId,
        PatternId::Styles => UIA_StylesPatternId,
        PatternId::SynchronizedInput => UIA_SynchronizedInputPatternId,
        PatternId::TableItem => UIA_TableItemPatternId,
        PatternId::Table => UIA_TablePatternId,
        PatternId::TextChild => UIA_TextChildPatternId,
        PatternId::TextEdit => UIA_TextEditPatternId,
        PatternId::Text => UIA_TextPatternId,
        PatternId::Text2 => UIA_TextPattern2Id,
        PatternId::Toggle => UIA_TogglePatternId,
        PatternId::Transform => UIA_TransformPatternId,
        PatternId::Transform2 => UIA_TransformPattern2Id,
        PatternId::Value => UIA_ValuePatternId,
        PatternId::VirtualizedItem => UIA_VirtualizedItemPatternId,
        PatternId::Window => UIA_WindowPatternId,
    }
}

/// `Is*PatternAvailable` property for each pattern, read in one cached batch.
pub fn availability_property(pattern: PatternId) -> UIA_PROPERTY_ID {
    match pattern {
        PatternId::Annotation => UIA_IsAnnotationPatternAvailablePropertyId,
        PatternId::Dock => UIA_IsDockPatternAvailablePropertyId,
        PatternId::Drag => UIA_IsDragPatternAvailablePropertyId,
        PatternId::DropTarget => UIA_IsDropTargetPatternAvailablePropertyId,
        PatternId::ExpandCollapse => UIA_IsExpandCollapsePatternAvailablePropertyId,
        PatternId::GridItem => UIA_IsGridItemPatternAvailablePropertyId,
        PatternId::Grid => UIA_IsGridPatternAvailablePropertyId,
        PatternId::Invoke => UIA_IsInvokePatternAvailablePropertyId,
        PatternId::ItemContainer => UIA_IsItemContainerPatternAvailablePropertyId,
        PatternId::LegacyIAccessible => UIA_IsLegacyIAccessiblePatternAvailablePropertyId,
        PatternId::MultipleView => UIA_IsMultipleViewPatternAvailablePropertyId,
        PatternId::ObjectModel => UIA_IsObjectModelPatternAvailablePropertyId,
        PatternId::RangeValue => UIA_IsRangeValuePatternAvailablePropertyId,
        PatternId::ScrollItem => UIA_IsScrollItemPatternAvailablePropertyId,
        PatternId::Scroll => UIA_IsScrollPatternAvailablePropertyId,
        PatternId::SelectionItem => UIA_IsSelectionItemPatternAvailablePropertyId,
        PatternId::Selection => UIA_IsSelectionPatternAvailablePropertyId,
        PatternId::Spreadsheet => UIA_IsSpreadsheetPatternAvailablePropertyId,
        PatternId::SpreadsheetItem => UIA_IsSpreadsheetItemPatternAvailablePropertyId,
        PatternId::Styles => UIA_IsStylesPatternAvailablePropertyId,
        PatternId::SynchronizedInput => UIA_IsSynchronizedInputPatternAvailablePropertyId,
        PatternId::TableItem => UIA_IsTableItemPatternAvailablePropertyId,
        PatternId::Table => UIA_IsTablePatternAvailablePropertyId,
        PatternId::TextChild => UIA_IsTextChildPatternAvailablePropertyId,
        PatternId::TextEdit => UIA_IsTextEditPatternAvailablePropertyId,
        PatternId::Text => UIA_IsTextPatternAvailablePropertyId,
        PatternId::Text2 => UIA_IsTextPattern2AvailablePropertyId,
        PatternId::Toggle => UIA_IsTogglePatternAvailablePropertyId,
        PatternId::Transform => UIA_IsTransformPatternAvailablePropertyId,
        PatternId::Transform2 => UIA_IsTransformPattern2AvailablePropertyId,
        PatternId::Value => UIA_IsValuePatternAvailablePropertyId,
        PatternId::VirtualizedItem => UIA_IsVirtualizedItemPatternAvailablePropertyId,
        PatternId::Window => UIA_IsWindowPatternAvailablePropertyId,
    }
}

/// UIA property id backing a named pattern property.
pub fn pattern_property(pattern: PatternId, name: &str) -> Option<UIA_PROPERTY_ID> {
    let id = match (pattern, name) {
        (PatternId::Annotation, props::annotation::ANNOTATION_TYPE_ID) => UIA_AnnotationAnnotationTypeIdPropertyId,
        (PatternId::Annotation, props::annotation::ANNOTATION_TYPE_NAME) => {
            UIA_AnnotationAnnotationTypeNamePropertyId
        }
        (PatternId::Annotation, props::annotation::AUTHOR) => UIA_AnnotationAuthorPropertyId,
        (PatternId::Annotation, props::annotation::DATE_TIME) => UIA_AnnotationDateTimePropertyId,
        (PatternId::Annotation, props::annotation::TARGET) => UIA_AnnotationTargetPropertyId,
        (PatternId::Dock, props::dock::DOCK_POSITION) => UIA_DockDockPositionPropertyId,
        (PatternId::Drag, props::drag::IS_GRABBED) => UIA_DragIsGrabbedPropertyId,
        (PatternId::Drag, props::drag::DROP_EFFECT) => UIA_DragDropEffectPropertyId,
        (PatternId::Drag, props::drag::DROP_EFFECTS) => UIA_DragDropEffectsPropertyId,
        (PatternId::Drag, props::drag::GRABBED_ITEMS) => UIA_DragGrabbedItemsPropertyId,
        (PatternId::DropTarget, props::drop_target::DROP_TARGET_EFFECT) => UIA_DropTargetDropTargetEffectPropertyId,
        (PatternId::DropTarget, props::drop_target::DROP_TARGET_EFFECTS) => {
            UIA_DropTargetDropTargetEffectsPropertyId
        }
        (PatternId::ExpandCollapse, props::expand_collapse::EXPAND_COLLAPSE_STATE) => {
            UIA_ExpandCollapseExpandCollapseStatePropertyId
        }
        (PatternId::GridItem, props::grid_item::COLUMN) => UIA_GridItemColumnPropertyId,
        (PatternId::GridItem, props::grid_item::COLUMN_SPAN) => UIA_GridItemColumnSpanPropertyId,
        (PatternId::GridItem, props::grid_item::ROW) => UIA_GridItemRowPropertyId,
        (PatternId::GridItem, props::grid_item::ROW_SPAN) => UIA_GridItemRowSpanPropertyId,
        (PatternId::GridItem, props::grid_item::CONTAINING_GRID) => UIA_GridItemContainingGridPropertyId,
        (PatternId::Grid, props::grid::COLUMN_COUNT) => UIA_GridColumnCountPropertyId,
        (PatternId::Grid, props::grid::ROW_COUNT) => UIA_GridRowCountPropertyId,
        (PatternId::LegacyIAccessible, props::legacy_iaccessible::NAME) => UIA_LegacyIAccessibleNamePropertyId,
        (PatternId::LegacyIAccessible, props::legacy_iaccessible::STATE) => UIA_LegacyIAccessibleStatePropertyId,
        (PatternId::LegacyIAccessible, props::legacy_iaccessible::ROLE) => UIA_LegacyIAccessibleRolePropertyId,
        (PatternId::LegacyIAccessible, props::legacy_iaccessible::VALUE) => UIA_LegacyIAccessibleValuePropertyId,
        (PatternId::LegacyIAccessible, props::legacy_iaccessible::CHILD_ID) => UIA_LegacyIAccessibleChildIdPropertyId,
        (PatternId::LegacyIAccessible, props::legacy_iaccessible::DEFAULT_ACTION) => {
            UIA_LegacyIAccessibleDefaultActionPropertyId
        }
        (PatternId::LegacyIAccessible, props::legacy_iaccessible::DESCRIPTION) => {
            UIA_LegacyIAccessibleDescriptionPropertyId
        }
        (PatternId::LegacyIAccessible, props::legacy_iaccessible::HELP) => UIA_LegacyIAccessibleHelpPropertyId,
        (PatternId::LegacyIAccessible, props::legacy_iaccessible::KEYBOARD_SHORTCUT) => {
            UIA_LegacyIAccessibleKeyboardShortcutPropertyId
        }
        (PatternId::LegacyIAccessible, props::legacy_iaccessible::SELECTION) => {
            UIA_LegacyIAccessibleSelectionPropertyId
        }
        (PatternId::MultipleView, props::multiple_view::CURRENT_VIEW) => UIA_MultipleViewCurrentViewPropertyId,
        (PatternId::MultipleView, props::multiple_view::SUPPORTED_VIEWS) => UIA_MultipleViewSupportedViewsPropertyId,
        (PatternId::RangeValue, props::range_value::IS_READ_ONLY) => UIA_RangeValueIsReadOnlyPropertyId,
        (PatternId::RangeValue, props::range_value::SMALL_CHANGE) => UIA_RangeValueSmallChangePropertyId,
        (PatternId::RangeValue, props::range_value::LARGE_CHANGE) => UIA_RangeValueLargeChangePropertyId,
        (PatternId::RangeValue, props::range_value::MINIMUM) => UIA_RangeValueMinimumPropertyId,
        (PatternId::RangeValue, props::range_value::MAXIMUM) => UIA_RangeValueMaximumPropertyId,
        (PatternId::RangeValue, props::range_value::VALUE) => UIA_RangeValueValuePropertyId,
        (PatternId::Scroll, props::scroll::HORIZONTAL_SCROLL_PERCENT) => UIA_ScrollHorizontalScrollPercentPropertyId,
        (PatternId::Scroll, props::scroll::HORIZONTAL_VIEW_SIZE) => UIA_ScrollHorizontalViewSizePropertyId,
        (PatternId::Scroll, props::scroll::HORIZONTALLY_SCROLLABLE) => UIA_ScrollHorizontallyScrollablePropertyId,
        (PatternId::Scroll, props::scroll::VERTICAL_SCROLL_PERCENT) => UIA_ScrollVerticalScrollPercentPropertyId,
        (PatternId::Scroll, props::scroll::VERTICAL_VIEW_SIZE) => UIA_ScrollVerticalViewSizePropertyId,
        (PatternId::Scroll, props::scroll::VERTICALLY_SCROLLABLE) => UIA_ScrollVerticallyScrollablePropertyId,
        (PatternId::SelectionItem, props::selection_item::IS_SELECTED) => UIA_SelectionItemIsSelectedPropertyId,
        (PatternId::SelectionItem, props::selection_item::SELECTION_CONTAINER) => {
            UIA_SelectionItemSelectionContainerPropertyId
        }
        (PatternId::Selection, props::selection::SELECTION) => UIA_SelectionSelectionPropertyId,
        (PatternId::Selection, props::selection::CAN_SELECT_MULTIPLE) => UIA_SelectionCanSelectMultiplePropertyId,
        (PatternId::Selection, props::selection::IS_SELECTION_REQUIRED) => {
            UIA_SelectionIsSelectionRequiredPropertyId
        }
        (PatternId::SpreadsheetItem, props::spreadsheet_item::FORMULA) => UIA_SpreadsheetItemFormulaPropertyId,
        (PatternId::SpreadsheetItem, props::spreadsheet_item::ANNOTATION_OBJECTS) => {
            UIA_SpreadsheetItemAnnotationObjectsPropertyId
        }
        (PatternId::SpreadsheetItem, props::spreadsheet_item::ANNOTATION_TYPES) => {
            UIA_SpreadsheetItemAnnotationTypesPropertyId
        }
        (PatternId::Styles, props::styles::STYLE_ID) => UIA_StylesStyleIdPropertyId,
        (PatternId::Styles, props::styles::STYLE_NAME) => UIA_StylesStyleNamePropertyId,
        (PatternId::Styles, props::styles::FILL_COLOR) => UIA_StylesFillColorPropertyId,
        (PatternId::Styles, props::styles::FILL_PATTERN_STYLE) => UIA_StylesFillPatternStylePropertyId,
        (PatternId::Styles, props::styles::SHAPE) => UIA_StylesShapePropertyId,
        (PatternId::Styles, props::styles::FILL_PATTERN_COLOR) => UIA_StylesFillPatternColorPropertyId,
        (PatternId::Styles, props::styles::EXTENDED_PROPERTIES) => UIA_StylesExtendedPropertiesPropertyId,
        (PatternId::TableItem, props::table_item::COLUMN_HEADER_ITEMS) => UIA_TableItemColumnHeaderItemsPropertyId,
        (PatternId::TableItem, props::table_item::ROW_HEADER_ITEMS) => UIA_TableItemRowHeaderItemsPropertyId,
        (PatternId::Table, props::table::COLUMN_HEADERS) => UIA_TableColumnHeadersPropertyId,
        (PatternId::Table, props::table::ROW_HEADERS) => UIA_TableRowHeadersPropertyId,
        (PatternId::Table, props::table::ROW_OR_COLUMN_MAJOR) => UIA_TableRowOrColumnMajorPropertyId,
        (PatternId::Toggle, props::toggle::TOGGLE_STATE) => UIA_ToggleToggleStatePropertyId,
        (PatternId::Transform, props::transform::CAN_MOVE) => UIA_TransformCanMovePropertyId,
        (PatternId::Transform, props::transform::CAN_RESIZE) => UIA_TransformCanResizePropertyId,
        (PatternId::Transform, props::transform::CAN_ROTATE) => UIA_TransformCanRotatePropertyId,
        (PatternId::Transform2, props::transform2::CAN_ZOOM) => UIA_Transform2CanZoomPropertyId,
        (PatternId::Transform2, props::transform2::ZOOM_LEVEL) => UIA_Transform2ZoomLevelPropertyId,
        (PatternId::Transform2, props::transform2::ZOOM_MINIMUM) => UIA_Transform2ZoomMinimumPropertyId,
        (PatternId::Transform2, props::transform2::ZOOM_MAXIMUM) => UIA_Transform2ZoomMaximumPropertyId,
        (PatternId::Value, props::value::IS_READ_ONLY) => UIA_ValueIsReadOnlyPropertyId,
        (PatternId::Value, props::value::VALUE) => UIA_ValueValuePropertyId,
        (PatternId::Window, props::window::CAN_MAXIMIZE) => UIA_WindowCanMaximizePropertyId,
        (PatternId::Window, props::window::CAN_MINIMIZE) => UIA_WindowCanMinimizePropertyId,
        (PatternId::Window, props::window::IS_MODAL) => UIA_WindowIsModalPropertyId,
        (PatternId::Window, props::window::IS_TOPMOST) => UIA_WindowIsTopmostPropertyId,
        (PatternId::Window, props::window::WINDOW_VISUAL_STATE) => UIA_WindowWindowVisualStatePropertyId,
        (PatternId::Window, props::window::WINDOW_INTERACTION_STATE) => {
            UIA_WindowWindowInteractionStatePropertyId
        }
        _ => return None,
    };
    Some(id)
}

pub fn text_attribute_id(attribute: TextAttribute) -> UIA_TEXTATTRIBUTE_ID {
    match attribute {
        TextAttribute::ForegroundColor => UIA_ForegroundColorAttributeId,
        TextAttribute::BackgroundColor => UIA_BackgroundColorAttributeId,
        TextAttribute::FontName => UIA_FontNameAttributeId,
        TextAttribute::FontSize => UIA_FontSizeAttributeId,
        TextAttribute::FontWeight => UIA_FontWeightAttributeId,
    }
}
