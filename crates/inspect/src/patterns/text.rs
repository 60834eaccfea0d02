//! Document-range text attributes.

use super::{group_name, register_pattern_builder};
use crate::detail::{DetailGroup, DetailItem};
use crate::sentinel::render;
use uiscope_core::{PatternId, PatternView, PlatformError, TextAttribute};

const NAMED_COLORS: &[(u32, &str)] = &[
    (0x00_0000, "Black"),
    (0xFF_FFFF, "White"),
    (0xFF_0000, "Red"),
    (0x00_8000, "Green"),
    (0x00_FF00, "Lime"),
    (0x00_00FF, "Blue"),
    (0xFF_FF00, "Yellow"),
    (0x00_FFFF, "Cyan"),
    (0xFF_00FF, "Magenta"),
    (0x80_8080, "Gray"),
    (0xC0_C0C0, "Silver"),
    (0x80_0000, "Maroon"),
    (0x80_8000, "Olive"),
    (0x80_0080, "Purple"),
    (0x00_8080, "Teal"),
    (0x00_0080, "Navy"),
    (0xFF_A500, "Orange"),
];

/// Converts a `COLORREF` (`0x00BBGGRR`) into `0xRRGGBB`.
fn to_rgb(colorref: i32) -> u32 {
    let raw = colorref.cast_unsigned();
    let red = raw & 0xFF;
    let green = (raw >> 8) & 0xFF;
    let blue = (raw >> 16) & 0xFF;
    (red << 16) | (green << 8) | blue
}

/// Color name, or `#RRGGBB` when the color has no name.
pub fn describe_color(colorref: i32) -> String {
    let rgb = to_rgb(colorref);
    NAMED_COLORS
        .iter()
        .find(|(value, _)| *value == rgb)
        .map_or_else(|| format!("#{rgb:06X}"), |(_, name)| (*name).to_owned())
}

/// Color description followed by the raw attribute value.
pub fn format_color(colorref: i32) -> String {
    format!("{} ({colorref})", describe_color(colorref))
}

register_pattern_builder!(PatternId::Text, build);

fn build(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    let read = |attribute| view.document_range_attribute(attribute);
    let items = vec![
        DetailItem::new(
            "Foreground Color",
            render::<i32, _>(&read(TextAttribute::ForegroundColor)?, format_color),
        ),
        DetailItem::new(
            "Background Color",
            render::<i32, _>(&read(TextAttribute::BackgroundColor)?, format_color),
        ),
        DetailItem::new("Font Name", render::<String, _>(&read(TextAttribute::FontName)?, |name| name)),
        DetailItem::new(
            "Font Size",
            render::<f64, _>(&read(TextAttribute::FontSize)?, |size| size.to_string()),
        ),
        DetailItem::new(
            "Font Weight",
            render::<i32, _>(&read(TextAttribute::FontWeight)?, |weight| weight.to_string()),
        ),
    ];
    Ok(DetailGroup::new(group_name(view.id()), items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::testing::FakeView;
    use rstest::rstest;
    use uiscope_core::{AttrValue, UiValue};

    #[rstest]
    #[case(0x0000_00FF, "Red")]
    #[case(0x00FF_0000, "Blue")]
    #[case(0x0000_0000, "Black")]
    #[case(0x00FF_FFFF, "White")]
    #[case(0x0012_3456, "#563412")]
    fn colors_are_decoded_from_colorref(#[case] colorref: i32, #[case] expected: &str) {
        assert_eq!(describe_color(colorref), expected);
    }

    #[rstest]
    fn formatted_color_keeps_raw_value() {
        assert_eq!(format_color(255), "Red (255)");
    }

    #[rstest]
    fn document_attributes() {
        let view = FakeView::new(PatternId::Text)
            .with_text(TextAttribute::ForegroundColor, AttrValue::Value(UiValue::from(0)))
            .with_text(TextAttribute::BackgroundColor, AttrValue::Mixed)
            .with_text(TextAttribute::FontName, AttrValue::Value(UiValue::from("Segoe UI")))
            .with_text(TextAttribute::FontSize, AttrValue::Value(UiValue::from(9.0)))
            .with_text(TextAttribute::FontWeight, AttrValue::Value(UiValue::from("bold")));
        let group = build(&view).unwrap();
        let labels: Vec<_> = group.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Foreground Color", "Background Color", "Font Name", "Font Size", "Font Weight"]
        );
        assert_eq!(group.value("Foreground Color"), Some("Black (0)"));
        assert_eq!(group.value("Background Color"), Some("mixed"));
        assert_eq!(group.value("Font Name"), Some("Segoe UI"));
        assert_eq!(group.value("Font Size"), Some("9"));
        assert_eq!(group.value("Font Weight"), Some("conversion to i32 failed (got string)"));
    }

    #[rstest]
    fn missing_attributes_render_not_supported() {
        let group = build(&FakeView::new(PatternId::Text)).unwrap();
        assert!(group.items.iter().all(|item| item.value == "not supported"));
    }
}
