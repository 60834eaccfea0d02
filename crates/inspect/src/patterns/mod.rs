//! Per-pattern detail builders and the registry that dispatches to them.
//!
//! Every pattern in [`PatternId::ALL`] registers exactly one builder through
//! [`register_pattern_builder!`]; the engine looks builders up by id for the
//! patterns an element supports.

mod grid;
mod legacy;
mod methods;
mod range_value;
mod scroll;
mod selection;
mod supplemental;
mod table;
mod text;
mod toggle;
mod value;
mod window;

#[cfg(test)]
pub(crate) mod testing;

pub use legacy::{LegacyState, role_text, state_text};
pub use methods::methods_of;
pub use text::{describe_color, format_color};

use crate::detail::{DetailGroup, DetailItem};
use crate::sentinel::{render, render_display};
use uiscope_core::{PatternId, PatternView, PlatformError};

pub type BuildFn = fn(&dyn PatternView) -> Result<DetailGroup, PlatformError>;

pub struct PatternBuilder {
    pub pattern: PatternId,
    pub build: BuildFn,
}

inventory::collect!(PatternBuilder);

macro_rules! register_pattern_builder {
    ($pattern:expr, $build:path) => {
        inventory::submit! {
            $crate::patterns::PatternBuilder { pattern: $pattern, build: $build }
        }
    };
}
pub(crate) use register_pattern_builder;

pub fn builder_for(pattern: PatternId) -> Option<&'static PatternBuilder> {
    inventory::iter::<PatternBuilder>.into_iter().find(|builder| builder.pattern == pattern)
}

/// Runs the registered builder for the view's pattern.
pub fn build_group(view: &dyn PatternView) -> Result<Option<DetailGroup>, PlatformError> {
    match builder_for(view.id()) {
        Some(builder) => (builder.build)(view).map(Some),
        None => {
            tracing::warn!(pattern = %view.id(), "no detail builder registered for pattern");
            Ok(None)
        }
    }
}

pub fn group_name(pattern: PatternId) -> String {
    format!("{} Pattern", pattern.name())
}

/// Reads `property` and renders it through its display form.
pub(crate) fn entry(
    view: &dyn PatternView,
    label: &str,
    property: &str,
) -> Result<DetailItem, PlatformError> {
    Ok(DetailItem::new(label, render_display(&view.property(property)?)))
}

/// Reads an integer-coded enumeration and renders its label.
pub(crate) fn enum_entry(
    view: &dyn PatternView,
    label: &str,
    property: &str,
    labels: &[&str],
) -> Result<DetailItem, PlatformError> {
    let value = view.property(property)?;
    Ok(DetailItem::new(label, render::<i32, _>(&value, |code| enum_label(labels, code))))
}

fn enum_label(labels: &[&str], code: i32) -> String {
    usize::try_from(code)
        .ok()
        .and_then(|index| labels.get(index))
        .map_or_else(|| format!("unknown ({code})"), |label| (*label).to_owned())
}

/// Builds a group whose entries are plain `(label, property)` reads.
pub(crate) fn plain_group(
    view: &dyn PatternView,
    entries: &[(&str, &str)],
) -> Result<DetailGroup, PlatformError> {
    let items = entries
        .iter()
        .map(|(label, property)| entry(view, label, property))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DetailGroup::new(group_name(view.id()), items))
}

#[cfg(test)]
mod tests {
    use super::testing::FakeView;
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn every_catalog_pattern_has_exactly_one_builder() {
        for pattern in PatternId::ALL {
            let count =
                inventory::iter::<PatternBuilder>.into_iter().filter(|b| b.pattern == *pattern).count();
            assert_eq!(count, 1, "{pattern} has {count} builders");
        }
    }

    #[rstest]
    fn groups_are_named_after_the_pattern() {
        for pattern in PatternId::ALL {
            let view = FakeView::new(*pattern);
            let group = build_group(&view).expect("build").expect("builder");
            assert_eq!(group.name, group_name(*pattern));
        }
    }

    #[rstest]
    #[case(0, "Off")]
    #[case(2, "Indeterminate")]
    #[case(7, "unknown (7)")]
    #[case(-1, "unknown (-1)")]
    fn enum_labels(#[case] code: i32, #[case] expected: &str) {
        assert_eq!(enum_label(&["Off", "On", "Indeterminate"], code), expected);
    }

    #[rstest]
    fn platform_failure_propagates() {
        let view = FakeView::new(PatternId::Grid).failing();
        assert!(build_group(&view).is_err());
    }
}
