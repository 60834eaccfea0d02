use super::{plain_group, register_pattern_builder};
use crate::detail::DetailGroup;
use uiscope_core::pattern_properties::range_value;
use uiscope_core::{PatternId, PatternView, PlatformError};

register_pattern_builder!(PatternId::RangeValue, build);

fn build(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    plain_group(
        view,
        &[
            ("Is Read Only", range_value::IS_READ_ONLY),
            ("Small Change", range_value::SMALL_CHANGE),
            ("Large Change", range_value::LARGE_CHANGE),
            ("Minimum", range_value::MINIMUM),
            ("Maximum", range_value::MAXIMUM),
            ("Value", range_value::VALUE),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::testing::FakeView;

    #[test]
    fn slider_range() {
        let view = FakeView::new(PatternId::RangeValue)
            .with(range_value::IS_READ_ONLY, false)
            .with(range_value::MINIMUM, 0.0)
            .with(range_value::MAXIMUM, 100.0)
            .with(range_value::VALUE, 42.5);
        let group = build(&view).unwrap();
        assert_eq!(group.name, "RangeValue Pattern");
        assert_eq!(group.value("Maximum"), Some("100"));
        assert_eq!(group.value("Value"), Some("42.5"));
        assert_eq!(group.value("Small Change"), Some("not supported"));
    }
}
