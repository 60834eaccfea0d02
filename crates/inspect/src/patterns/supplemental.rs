//! Builders for the patterns with a handful of plain properties.

use super::{enum_entry, group_name, plain_group, register_pattern_builder};
use crate::detail::DetailGroup;
use uiscope_core::pattern_properties::{
    annotation, dock, drag, drop_target, expand_collapse, multiple_view, spreadsheet_item, styles,
    transform, transform2,
};
use uiscope_core::{PatternId, PatternView, PlatformError};

const DOCK_POSITIONS: &[&str] = &["Top", "Left", "Bottom", "Right", "Fill", "None"];
const EXPAND_COLLAPSE_STATES: &[&str] = &["Collapsed", "Expanded", "PartiallyExpanded", "LeafNode"];

register_pattern_builder!(PatternId::Annotation, build_annotation);
register_pattern_builder!(PatternId::Dock, build_dock);
register_pattern_builder!(PatternId::Drag, build_drag);
register_pattern_builder!(PatternId::DropTarget, build_drop_target);
register_pattern_builder!(PatternId::ExpandCollapse, build_expand_collapse);
register_pattern_builder!(PatternId::MultipleView, build_multiple_view);
register_pattern_builder!(PatternId::SpreadsheetItem, build_spreadsheet_item);
register_pattern_builder!(PatternId::Styles, build_styles);
register_pattern_builder!(PatternId::Transform, build_transform);
register_pattern_builder!(PatternId::Transform2, build_transform2);

fn build_annotation(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    plain_group(
        view,
        &[
            ("Annotation Type Id", annotation::ANNOTATION_TYPE_ID),
            ("Annotation Type Name", annotation::ANNOTATION_TYPE_NAME),
            ("Author", annotation::AUTHOR),
            ("Date Time", annotation::DATE_TIME),
            ("Target", annotation::TARGET),
        ],
    )
}

fn build_dock(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    Ok(DetailGroup::new(
        group_name(view.id()),
        vec![enum_entry(view, "Dock Position", dock::DOCK_POSITION, DOCK_POSITIONS)?],
    ))
}

fn build_drag(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    plain_group(
        view,
        &[
            ("Is Grabbed", drag::IS_GRABBED),
            ("Drop Effect", drag::DROP_EFFECT),
            ("Drop Effects", drag::DROP_EFFECTS),
            ("Grabbed Items", drag::GRABBED_ITEMS),
        ],
    )
}

fn build_drop_target(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    plain_group(
        view,
        &[
            ("Drop Target Effect", drop_target::DROP_TARGET_EFFECT),
            ("Drop Target Effects", drop_target::DROP_TARGET_EFFECTS),
        ],
    )
}

fn build_expand_collapse(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    Ok(DetailGroup::new(
        group_name(view.id()),
        vec![enum_entry(
            view,
            "Expand Collapse State",
            expand_collapse::EXPAND_COLLAPSE_STATE,
            EXPAND_COLLAPSE_STATES,
        )?],
    ))
}

fn build_multiple_view(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    plain_group(
        view,
        &[
            ("Current View", multiple_view::CURRENT_VIEW),
            ("Supported Views", multiple_view::SUPPORTED_VIEWS),
        ],
    )
}

fn build_spreadsheet_item(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    plain_group(
        view,
        &[
            ("Formula", spreadsheet_item::FORMULA),
            ("Annotation Objects", spreadsheet_item::ANNOTATION_OBJECTS),
            ("Annotation Types", spreadsheet_item::ANNOTATION_TYPES),
        ],
    )
}

fn build_styles(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    plain_group(
        view,
        &[
            ("Style Id", styles::STYLE_ID),
            ("Style Name", styles::STYLE_NAME),
            ("Fill Color", styles::FILL_COLOR),
            ("Fill Pattern Style", styles::FILL_PATTERN_STYLE),
            ("Shape", styles::SHAPE),
            ("Fill Pattern Color", styles::FILL_PATTERN_COLOR),
            ("Extended Properties", styles::EXTENDED_PROPERTIES),
        ],
    )
}

fn build_transform(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    plain_group(
        view,
        &[
            ("Can Move", transform::CAN_MOVE),
            ("Can Resize", transform::CAN_RESIZE),
            ("Can Rotate", transform::CAN_ROTATE),
        ],
    )
}

fn build_transform2(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    plain_group(
        view,
        &[
            ("Can Zoom", transform2::CAN_ZOOM),
            ("Zoom Level", transform2::ZOOM_LEVEL),
            ("Zoom Minimum", transform2::ZOOM_MINIMUM),
            ("Zoom Maximum", transform2::ZOOM_MAXIMUM),
        ],
    )
}
