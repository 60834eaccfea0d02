use super::{plain_group, register_pattern_builder};
use crate::detail::DetailGroup;
use uiscope_core::pattern_properties::{selection, selection_item};
use uiscope_core::{PatternId, PatternView, PlatformError};

register_pattern_builder!(PatternId::SelectionItem, build_selection_item);
register_pattern_builder!(PatternId::Selection, build_selection);

fn build_selection_item(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    plain_group(
        view,
        &[
            ("Is Selected", selection_item::IS_SELECTED),
            ("Selection Container", selection_item::SELECTION_CONTAINER),
        ],
    )
}

fn build_selection(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    plain_group(
        view,
        &[
            ("Selection", selection::SELECTION),
            ("Can Select Multiple", selection::CAN_SELECT_MULTIPLE),
            ("Is Selection Required", selection::IS_SELECTION_REQUIRED),
        ],
    )
}
