//! Per-element detail synthesis.

use crate::detail::{DetailGroup, DetailItem};
use crate::error::ExtractionError;
use crate::normalize::normalize_str;
use crate::patterns::build_group;
use crate::sentinel::{NOT_SUPPORTED, render, render_display};
use std::time::Instant;
use uiscope_core::{
    AccessibilityElement, AttrValue, CacheRequest, FrameworkType, PatternId, PropertyBatch,
    PropertyId, UiValue,
};

pub const IDENTIFICATION_GROUP: &str = "Identification";
pub const DETAILS_GROUP: &str = "Details";
pub const PATTERN_SUPPORT_GROUP: &str = "Pattern Support";

/// Properties read together before any group is built.
pub fn identity_request() -> CacheRequest {
    CacheRequest::new().with_properties(PropertyId::ALL)
}

/// Builds the ordered detail groups for `element`.
///
/// Order: identification, details, pattern support matrix, then one group per
/// supported pattern in catalog order. Any platform failure aborts the whole
/// extraction.
pub fn extract_details(element: &dyn AccessibilityElement) -> Result<Vec<DetailGroup>, ExtractionError> {
    let started = Instant::now();
    let request = identity_request();
    let mut groups = Vec::new();
    {
        let batch = element.batch(&request).map_err(ExtractionError::platform("read properties"))?;
        groups.push(identification_group(batch.as_ref())?);
        groups.push(details_group(batch.as_ref())?);
    }

    let supported =
        element.supported_patterns().map_err(ExtractionError::platform("query supported patterns"))?;
    groups.push(pattern_support_group(&supported));

    for pattern in PatternId::ALL.iter().copied().filter(|p| supported.contains(p)) {
        let view = element
            .pattern(pattern)
            .map_err(|source| ExtractionError::Pattern { pattern, source })?
            .ok_or(ExtractionError::PatternVanished(pattern))?;
        let group = build_group(view.as_ref())
            .map_err(|source| ExtractionError::Pattern { pattern, source })?;
        groups.extend(group);
    }

    tracing::debug!(
        groups = groups.len(),
        patterns = supported.len(),
        elapsed_ms = started.elapsed().as_millis(),
        "extracted element details"
    );
    Ok(groups)
}

fn read(batch: &dyn PropertyBatch, property: PropertyId) -> Result<AttrValue, ExtractionError> {
    batch.property(property).map_err(ExtractionError::platform("read properties"))
}

fn text_item(batch: &dyn PropertyBatch, label: &str, property: PropertyId) -> Result<DetailItem, ExtractionError> {
    let value = read(batch, property)?;
    let rendered = match &value {
        AttrValue::Value(UiValue::String(text)) => normalize_str(text),
        other => render_display(other),
    };
    Ok(DetailItem::new(label, rendered))
}

fn display_item(batch: &dyn PropertyBatch, label: &str, property: PropertyId) -> Result<DetailItem, ExtractionError> {
    Ok(DetailItem::new(label, render_display(&read(batch, property)?)))
}

fn identification_group(batch: &dyn PropertyBatch) -> Result<DetailGroup, ExtractionError> {
    let framework_id = read(batch, PropertyId::FrameworkId)?;
    let framework =
        FrameworkType::from_framework_id(framework_id.value().and_then(UiValue::as_str));
    Ok(DetailGroup::new(
        IDENTIFICATION_GROUP,
        vec![
            text_item(batch, "Automation Id", PropertyId::AutomationId)?,
            text_item(batch, "Name", PropertyId::Name)?,
            text_item(batch, "Class Name", PropertyId::ClassName)?,
            display_item(batch, "Control Type", PropertyId::ControlType)?,
            text_item(batch, "Localized Control Type", PropertyId::LocalizedControlType)?,
            DetailItem::new("Framework Type", framework.to_string()),
            DetailItem::new("Framework Id", render_display(&framework_id)),
            display_item(batch, "Process Id", PropertyId::ProcessId)?,
        ],
    ))
}

fn details_group(batch: &dyn PropertyBatch) -> Result<DetailGroup, ExtractionError> {
    let handle = read(batch, PropertyId::NativeWindowHandle)?;
    Ok(DetailGroup::new(
        DETAILS_GROUP,
        vec![
            display_item(batch, "Is Enabled", PropertyId::IsEnabled)?,
            display_item(batch, "Is Offscreen", PropertyId::IsOffscreen)?,
            display_item(batch, "Bounding Rectangle", PropertyId::BoundingRectangle)?,
            text_item(batch, "Help Text", PropertyId::HelpText)?,
            display_item(batch, "Is Password", PropertyId::IsPassword)?,
            DetailItem::new("Native Window Handle", format_native_window_handle(&handle)),
        ],
    ))
}

/// `0` or absent renders as "not supported"; otherwise decimal then the low 32 bits as 8-digit hex.
pub fn format_native_window_handle(handle: &AttrValue) -> String {
    match handle {
        AttrValue::Value(UiValue::Integer(0)) | AttrValue::NotSupported => NOT_SUPPORTED.to_owned(),
        other => render::<i64, _>(other, |raw| format!("{raw} ({:08X})", raw & 0xFFFF_FFFF)),
    }
}

fn pattern_support_group(supported: &[PatternId]) -> DetailGroup {
    let items = PatternId::ALL
        .iter()
        .map(|pattern| {
            let is_supported = supported.contains(pattern);
            DetailItem::new(
                format!("{} pattern", pattern.name()),
                if is_supported { "yes" } else { "no" },
            )
            .important(is_supported)
        })
        .collect();
    DetailGroup::new(PATTERN_SUPPORT_GROUP, items)
}
