//! Typed rendering of attribute reads, including the mixed / not-supported sentinels.

use uiscope_core::{AttrValue, Rect, UiValue};

pub const MIXED: &str = "mixed";
pub const NOT_SUPPORTED: &str = "not supported";

/// Strict conversion from a platform value into a Rust type.
pub trait FromUiValue: Sized {
    const TYPE_NAME: &'static str;

    fn from_ui_value(value: &UiValue) -> Option<Self>;
}

impl FromUiValue for i32 {
    const TYPE_NAME: &'static str = "i32";

    fn from_ui_value(value: &UiValue) -> Option<Self> {
        value.as_i64().and_then(|raw| i32::try_from(raw).ok())
    }
}

impl FromUiValue for i64 {
    const TYPE_NAME: &'static str = "i64";

    fn from_ui_value(value: &UiValue) -> Option<Self> {
        value.as_i64()
    }
}

impl FromUiValue for f64 {
    const TYPE_NAME: &'static str = "f64";

    #[allow(clippy::cast_precision_loss)]
    fn from_ui_value(value: &UiValue) -> Option<Self> {
        match value {
            UiValue::Number(number) => Some(*number),
            UiValue::Integer(integer) => Some(*integer as f64),
            _ => None,
        }
    }
}

impl FromUiValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_ui_value(value: &UiValue) -> Option<Self> {
        value.as_bool()
    }
}

impl FromUiValue for String {
    const TYPE_NAME: &'static str = "String";

    fn from_ui_value(value: &UiValue) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FromUiValue for Rect {
    const TYPE_NAME: &'static str = "Rect";

    fn from_ui_value(value: &UiValue) -> Option<Self> {
        match value {
            UiValue::Rect(rect) => Some(*rect),
            _ => None,
        }
    }
}

/// Renders `value` as `T` through `format`.
///
/// Never fails: sentinels render as [`MIXED`] / [`NOT_SUPPORTED`] and a value
/// of the wrong shape renders as a placeholder naming `T`.
pub fn render<T, F>(value: &AttrValue, format: F) -> String
where
    T: FromUiValue,
    F: FnOnce(T) -> String,
{
    match value {
        AttrValue::Mixed => MIXED.to_owned(),
        AttrValue::NotSupported => NOT_SUPPORTED.to_owned(),
        AttrValue::Value(raw) => match T::from_ui_value(raw) {
            Some(converted) => format(converted),
            None => conversion_failed::<T>(raw),
        },
    }
}

/// Renders any value through its `Display` form.
pub fn render_display(value: &AttrValue) -> String {
    match value {
        AttrValue::Mixed => MIXED.to_owned(),
        AttrValue::NotSupported => NOT_SUPPORTED.to_owned(),
        AttrValue::Value(raw) => raw.to_string(),
    }
}

fn conversion_failed<T: FromUiValue>(raw: &UiValue) -> String {
    tracing::debug!(target_type = T::TYPE_NAME, actual = raw.kind(), "attribute conversion failed");
    format!("conversion to {} failed (got {})", T::TYPE_NAME, raw.kind())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn mixed_ignores_type_and_formatter() {
        assert_eq!(render::<i32, _>(&AttrValue::Mixed, |_| unreachable!()), MIXED);
        assert_eq!(render::<String, _>(&AttrValue::Mixed, |s| s), MIXED);
        assert_eq!(render::<f64, _>(&AttrValue::Mixed, |v| format!("{v:.1}")), MIXED);
    }

    #[rstest]
    fn not_supported_ignores_type_and_formatter() {
        assert_eq!(render::<i32, _>(&AttrValue::NotSupported, |v| v.to_string()), NOT_SUPPORTED);
        assert_eq!(render::<bool, _>(&AttrValue::NotSupported, |v| v.to_string()), NOT_SUPPORTED);
    }

    #[rstest]
    fn concrete_value_goes_through_formatter() {
        let value = AttrValue::Value(UiValue::from(700));
        assert_eq!(render::<i32, _>(&value, |v| format!("weight {v}")), "weight 700");
        let size = AttrValue::Value(UiValue::from(10.5));
        assert_eq!(render::<f64, _>(&size, |v| v.to_string()), "10.5");
    }

    #[rstest]
    #[case(AttrValue::Value(UiValue::from("Segoe UI")))]
    #[case(AttrValue::Value(UiValue::from(true)))]
    #[case(AttrValue::Value(UiValue::Null))]
    #[case(AttrValue::Value(UiValue::from(i64::MAX)))]
    fn wrong_shape_names_target_type(#[case] value: AttrValue) {
        let rendered = render::<i32, _>(&value, |v| v.to_string());
        assert!(rendered.contains("i32"), "{rendered}");
        assert!(rendered.starts_with("conversion to"));
    }

    #[rstest]
    fn display_rendering_handles_sentinels() {
        assert_eq!(render_display(&AttrValue::NotSupported), NOT_SUPPORTED);
        assert_eq!(render_display(&AttrValue::Mixed), MIXED);
        assert_eq!(render_display(&AttrValue::Value(UiValue::from(3))), "3");
    }
}
