use super::{enum_entry, group_name, register_pattern_builder};
use crate::detail::DetailGroup;
use uiscope_core::pattern_properties::toggle;
use uiscope_core::{PatternId, PatternView, PlatformError};

const TOGGLE_STATES: &[&str] = &["Off", "On", "Indeterminate"];

register_pattern_builder!(PatternId::Toggle, build);

fn build(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    Ok(DetailGroup::new(
        group_name(view.id()),
        vec![enum_entry(view, "Toggle State", toggle::TOGGLE_STATE, TOGGLE_STATES)?],
    ))
}
