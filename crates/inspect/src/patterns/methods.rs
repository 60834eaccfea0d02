//! Patterns that expose behavior only; their group lists the callable methods.

use super::{group_name, register_pattern_builder};
use crate::detail::{DetailGroup, DetailItem};
use uiscope_core::{PatternId, PatternView, PlatformError};

/// Operations of a pattern that exposes no readable properties.
pub fn methods_of(pattern: PatternId) -> &'static [&'static str] {
    match pattern {
        PatternId::Invoke => &["Invoke"],
        PatternId::ItemContainer => &["FindItemByProperty"],
        PatternId::ObjectModel => &["GetUnderlyingObjectModel"],
        PatternId::ScrollItem => &["ScrollIntoView"],
        PatternId::Spreadsheet => &["GetItemByName"],
        PatternId::SynchronizedInput => &["StartListening", "Cancel"],
        PatternId::TextChild => &["TextContainer", "TextRange"],
        PatternId::TextEdit => &["GetActiveComposition", "GetConversionTarget"],
        PatternId::Text2 => &["RangeFromAnnotation", "GetCaretRange"],
        PatternId::VirtualizedItem => &["Realize"],
        _ => &[],
    }
}

fn build(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    let methods = methods_of(view.id()).join(", ");
    Ok(DetailGroup::new(group_name(view.id()), vec![DetailItem::new("Methods", methods)]))
}

register_pattern_builder!(PatternId::Invoke, build);
register_pattern_builder!(PatternId::ItemContainer, build);
register_pattern_builder!(PatternId::ObjectModel, build);
register_pattern_builder!(PatternId::ScrollItem, build);
register_pattern_builder!(PatternId::Spreadsheet, build);
register_pattern_builder!(PatternId::SynchronizedInput, build);
register_pattern_builder!(PatternId::TextChild, build);
register_pattern_builder!(PatternId::TextEdit, build);
register_pattern_builder!(PatternId::Text2, build);
register_pattern_builder!(PatternId::VirtualizedItem, build);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::testing::FakeView;
    use rstest::rstest;

    #[rstest]
    #[case(PatternId::Invoke, "Invoke")]
    #[case(PatternId::SynchronizedInput, "StartListening, Cancel")]
    #[case(PatternId::VirtualizedItem, "Realize")]
    fn method_listing(#[case] pattern: PatternId, #[case] expected: &str) {
        let group = build(&FakeView::new(pattern)).unwrap();
        assert_eq!(group.items.len(), 1);
        assert_eq!(group.value("Methods"), Some(expected));
    }

    #[rstest]
    fn method_only_builders_ignore_property_failures() {
        assert!(build(&FakeView::new(PatternId::Invoke).failing()).is_ok());
    }
}
