use super::{enum_entry, entry, group_name, register_pattern_builder};
use crate::detail::DetailGroup;
use uiscope_core::pattern_properties::window;
use uiscope_core::{PatternId, PatternView, PlatformError};

const VISUAL_STATES: &[&str] = &["Normal", "Maximized", "Minimized"];
const INTERACTION_STATES: &[&str] =
    &["Running", "Closing", "ReadyForUserInteraction", "BlockedByModalWindow", "NotResponding"];

register_pattern_builder!(PatternId::Window, build);

fn build(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    Ok(DetailGroup::new(
        group_name(view.id()),
        vec![
            entry(view, "Is Modal", window::IS_MODAL)?,
            entry(view, "Is Topmost", window::IS_TOPMOST)?,
            entry(view, "Can Minimize", window::CAN_MINIMIZE)?,
            entry(view, "Can Maximize", window::CAN_MAXIMIZE)?,
            enum_entry(view, "Window Visual State", window::WINDOW_VISUAL_STATE, VISUAL_STATES)?,
            enum_entry(
                view,
                "Window Interaction State",
                window::WINDOW_INTERACTION_STATE,
                INTERACTION_STATES,
            )?,
        ],
    ))
}
