use super::{plain_group, register_pattern_builder};
use crate::detail::DetailGroup;
use uiscope_core::pattern_properties::value;
use uiscope_core::{PatternId, PatternView, PlatformError};

register_pattern_builder!(PatternId::Value, build);

fn build(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    plain_group(view, &[("Is Read Only", value::IS_READ_ONLY), ("Value", value::VALUE)])
}
