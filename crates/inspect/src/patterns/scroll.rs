use super::{plain_group, register_pattern_builder};
use crate::detail::DetailGroup;
use uiscope_core::pattern_properties::scroll;
use uiscope_core::{PatternId, PatternView, PlatformError};

register_pattern_builder!(PatternId::Scroll, build);

fn build(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    plain_group(
        view,
        &[
            ("Horizontal Scroll Percent", scroll::HORIZONTAL_SCROLL_PERCENT),
            ("Horizontal View Size", scroll::HORIZONTAL_VIEW_SIZE),
            ("Horizontally Scrollable", scroll::HORIZONTALLY_SCROLLABLE),
            ("Vertical Scroll Percent", scroll::VERTICAL_SCROLL_PERCENT),
            ("Vertical View Size", scroll::VERTICAL_VIEW_SIZE),
            ("Vertically Scrollable", scroll::VERTICALLY_SCROLLABLE),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::testing::FakeView;
    use rstest::rstest;

    #[rstest]
    fn horizontal_and_vertical_axes() {
        let view = FakeView::new(PatternId::Scroll)
            .with(scroll::HORIZONTAL_SCROLL_PERCENT, -1.0)
            .with(scroll::HORIZONTALLY_SCROLLABLE, false)
            .with(scroll::VERTICAL_SCROLL_PERCENT, 42.5)
            .with(scroll::VERTICAL_VIEW_SIZE, 25.0)
            .with(scroll::VERTICALLY_SCROLLABLE, true);
        let group = build(&view).unwrap();
        assert_eq!(group.name, "Scroll Pattern");
        let labels: Vec<_> = group.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Horizontal Scroll Percent",
                "Horizontal View Size",
                "Horizontally Scrollable",
                "Vertical Scroll Percent",
                "Vertical View Size",
                "Vertically Scrollable",
            ]
        );
        assert_eq!(group.value("Horizontal Scroll Percent"), Some("-1"));
        assert_eq!(group.value("Horizontal View Size"), Some("not supported"));
        assert_eq!(group.value("Horizontally Scrollable"), Some("false"));
        assert_eq!(group.value("Vertical Scroll Percent"), Some("42.5"));
        assert_eq!(group.value("Vertical View Size"), Some("25"));
        assert_eq!(group.value("Vertically Scrollable"), Some("true"));
    }

    #[rstest]
    fn platform_failure_propagates() {
        let view = FakeView::new(PatternId::Scroll).failing();
        assert!(build(&view).is_err());
    }
}
