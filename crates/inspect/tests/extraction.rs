use rstest::{fixture, rstest};
use std::sync::Arc;
use uiscope_core::{AttrValue, ElementRef, PatternId, PropertyId, Rect, TextAttribute};
use uiscope_inspect::{
    DETAILS_GROUP, ExtractionError, IDENTIFICATION_GROUP, PATTERN_SUPPORT_GROUP, extract_details,
};
use uiscope_provider_mock::{ElementSpec, MockElement, MockStats, PatternSpec, StaticMockTree};

fn element(spec: ElementSpec) -> (ElementRef, Arc<MockStats>) {
    MockElement::from_tree(&StaticMockTree::new(spec))
}

#[fixture]
fn value_and_toggle() -> ElementSpec {
    ElementSpec::new("CheckBox", "Remember\r\nme")
        .with_automation_id("Remember")
        .with_property(PropertyId::FrameworkId, "WPF")
        .with_property(PropertyId::NativeWindowHandle, 305_419_896)
        .with_property(PropertyId::BoundingRectangle, Rect::new(10.0, 20.0, 30.0, 40.0))
        .with_pattern(PatternSpec::new(PatternId::Toggle).with("ToggleState", 1))
        .with_pattern(PatternSpec::new(PatternId::Value).with("IsReadOnly", true).with("Value", "on"))
}

#[rstest]
fn value_and_toggle_yield_five_groups(value_and_toggle: ElementSpec) {
    let (root, _) = element(value_and_toggle);
    let groups = extract_details(root.as_ref()).unwrap();
    let names: Vec<_> = groups.iter().map(|group| group.name.as_str()).collect();
    assert_eq!(
        names,
        [IDENTIFICATION_GROUP, DETAILS_GROUP, PATTERN_SUPPORT_GROUP, "Toggle Pattern", "Value Pattern"]
    );
}

#[rstest]
fn identification_and_details_are_rendered(value_and_toggle: ElementSpec) {
    let (root, _) = element(value_and_toggle);
    let groups = extract_details(root.as_ref()).unwrap();

    let identification = &groups[0];
    assert_eq!(identification.value("Name"), Some("Remember me"));
    assert_eq!(identification.value("Automation Id"), Some("Remember"));
    assert_eq!(identification.value("Control Type"), Some("CheckBox"));
    assert_eq!(identification.value("Class Name"), Some("not supported"));
    assert_eq!(identification.value("Framework Type"), Some("Wpf"));
    assert_eq!(identification.value("Framework Id"), Some("WPF"));

    let details = &groups[1];
    let labels: Vec<_> = details.items.iter().map(|item| item.label.as_str()).collect();
    assert_eq!(
        labels,
        ["Is Enabled", "Is Offscreen", "Bounding Rectangle", "Help Text", "Is Password", "Native Window Handle"]
    );
    assert_eq!(details.value("Native Window Handle"), Some("305419896 (12345678)"));
    assert_eq!(details.value("Bounding Rectangle"), Some("X=10,Y=20,Width=30,Height=40"));
}

#[rstest]
fn identity_properties_are_read_in_one_round_trip(value_and_toggle: ElementSpec) {
    let (root, stats) = element(value_and_toggle);
    extract_details(root.as_ref()).unwrap();
    // batch + supported_patterns + one pattern() per supported pattern
    assert_eq!(stats.round_trips(), 4);
}

#[rstest]
#[case(vec![])]
#[case(vec![PatternId::Invoke])]
#[case(vec![PatternId::Window, PatternId::Transform, PatternId::LegacyIAccessible])]
#[case(PatternId::ALL.to_vec())]
fn pattern_groups_match_supported_entries(#[case] patterns: Vec<PatternId>) {
    let spec = patterns
        .iter()
        .fold(ElementSpec::new("Custom", "Probe"), |spec, pattern| spec.with_pattern(PatternSpec::new(*pattern)));
    let (root, _) = element(spec);
    let groups = extract_details(root.as_ref()).unwrap();

    let matrix = groups.iter().find(|group| group.name == PATTERN_SUPPORT_GROUP).unwrap();
    assert_eq!(matrix.items.len(), PatternId::ALL.len());
    for (item, pattern) in matrix.items.iter().zip(PatternId::ALL) {
        assert_eq!(item.label, format!("{} pattern", pattern.name()));
    }
    let yes = matrix.items.iter().filter(|item| item.value == "yes").count();
    assert_eq!(groups.len() - 3, yes);
    assert_eq!(yes, patterns.len());
    assert!(matrix.items.iter().all(|item| item.important == (item.value == "yes")));
}

#[rstest]
fn pattern_groups_follow_catalog_order() {
    let spec = ElementSpec::new("Custom", "Probe")
        .with_pattern(PatternSpec::new(PatternId::Window))
        .with_pattern(PatternSpec::new(PatternId::Annotation))
        .with_pattern(PatternSpec::new(PatternId::Grid));
    let (root, _) = element(spec);
    let groups = extract_details(root.as_ref()).unwrap();
    let names: Vec<_> = groups[3..].iter().map(|group| group.name.as_str()).collect();
    assert_eq!(names, ["Annotation Pattern", "Grid Pattern", "Window Pattern"]);
}

#[rstest]
fn text_pattern_reports_sentinels() {
    let spec = ElementSpec::new("Document", "Notes").with_pattern(
        PatternSpec::new(PatternId::Text)
            .with_text(TextAttribute::ForegroundColor, AttrValue::Value(255.into()))
            .with_text(TextAttribute::FontName, AttrValue::Mixed),
    );
    let (root, _) = element(spec);
    let groups = extract_details(root.as_ref()).unwrap();
    let text = groups.iter().find(|group| group.name == "Text Pattern").unwrap();
    assert_eq!(text.value("Foreground Color"), Some("Red (255)"));
    assert_eq!(text.value("Font Name"), Some("mixed"));
    assert_eq!(text.value("Font Size"), Some("not supported"));
}

#[rstest]
fn dead_element_fails_the_whole_extraction() {
    let (root, _) = element(ElementSpec::new("Button", "Gone").dead());
    let err = extract_details(root.as_ref()).unwrap_err();
    assert!(matches!(err, ExtractionError::Platform { step: "read properties", .. }), "{err}");
}
