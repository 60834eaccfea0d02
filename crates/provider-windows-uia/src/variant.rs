//! VARIANT to [`AttrValue`] conversion.

use crate::com::Sentinels;
use crate::element::summarize;
use crate::map;
use uiscope_core::{AttrValue, PropertyId, Rect, UiValue};
use windows::Win32::System::Com::SAFEARRAY;
use windows::Win32::System::Ole::{SafeArrayAccessData, SafeArrayGetLBound, SafeArrayGetUBound, SafeArrayUnaccessData};
use windows::Win32::System::Variant::{VT_ARRAY, VT_BOOL, VT_BSTR, VT_EMPTY, VT_I4, VT_I8, VT_R8, VT_UNKNOWN};
use windows::Win32::UI::Accessibility::{IUIAutomationElement, IUIAutomationElementArray};
use windows::core::{BSTR, IUnknown, Interface, VARIANT};

fn vt(variant: &VARIANT) -> u16 {
    unsafe { variant.as_raw().Anonymous.Anonymous.vt }
}

/// Converts a property value read with `ignoreDefault`.
pub fn to_attr(variant: &VARIANT, sentinels: &Sentinels) -> AttrValue {
    let kind = vt(variant);
    if kind == VT_UNKNOWN.0 {
        let Ok(unknown) = IUnknown::try_from(variant) else {
            return AttrValue::NotSupported;
        };
        if unknown == sentinels.not_supported {
            return AttrValue::NotSupported;
        }
        if unknown == sentinels.mixed {
            return AttrValue::Mixed;
        }
        return unknown_to_value(&unknown).map_or(AttrValue::NotSupported, AttrValue::Value);
    }
    scalar_to_value(variant, kind).map_or(AttrValue::NotSupported, AttrValue::Value)
}

/// Like [`to_attr`], with the element-property specific shapes applied.
pub fn property_to_attr(property: PropertyId, variant: &VARIANT, sentinels: &Sentinels) -> AttrValue {
    match (property, to_attr(variant, sentinels)) {
        (PropertyId::ControlType, AttrValue::Value(UiValue::Integer(id))) => {
            let name = i32::try_from(id).map_or("Custom", map::control_type_name);
            AttrValue::Value(UiValue::from(name))
        }
        (PropertyId::BoundingRectangle, AttrValue::Value(UiValue::Array(items))) => match items.as_slice() {
            [UiValue::Number(x), UiValue::Number(y), UiValue::Number(w), UiValue::Number(h)] => {
                AttrValue::Value(UiValue::Rect(Rect::new(*x, *y, *w, *h)))
            }
            _ => AttrValue::Value(UiValue::Rect(Rect::new(0.0, 0.0, 0.0, 0.0))),
        },
        (_, other) => other,
    }
}

fn scalar_to_value(variant: &VARIANT, kind: u16) -> Option<UiValue> {
    match kind {
        k if k == VT_EMPTY.0 => Some(UiValue::Null),
        k if k == VT_BOOL.0 => bool::try_from(variant).ok().map(UiValue::from),
        k if k == VT_I4.0 => i32::try_from(variant).ok().map(UiValue::from),
        k if k == VT_I8.0 => i64::try_from(variant).ok().map(UiValue::from),
        k if k == VT_R8.0 => f64::try_from(variant).ok().map(UiValue::from),
        k if k == VT_BSTR.0 => BSTR::try_from(variant).ok().map(|value| UiValue::from(value.to_string())),
        k if k == VT_ARRAY.0 | VT_R8.0 => read_array::<f64>(variant).map(array_value),
        k if k == VT_ARRAY.0 | VT_I4.0 => read_array::<i32>(variant).map(array_value),
        _ => None,
    }
}

fn array_value<T: Into<UiValue>>(items: Vec<T>) -> UiValue {
    UiValue::Array(items.into_iter().map(Into::into).collect())
}

fn unknown_to_value(unknown: &IUnknown) -> Option<UiValue> {
    if let Ok(element) = unknown.cast::<IUIAutomationElement>() {
        return Some(UiValue::Element(summarize(&element)));
    }
    let array = unknown.cast::<IUIAutomationElementArray>().ok()?;
    let length = unsafe { array.Length() }.ok()?;
    let items = (0..length)
        .filter_map(|index| unsafe { array.GetElement(index) }.ok())
        .map(|element| UiValue::Element(summarize(&element)))
        .collect::<Vec<_>>();
    Some(UiValue::Array(items))
}

fn read_array<T: Copy>(variant: &VARIANT) -> Option<Vec<T>> {
    unsafe {
        let psa = variant.as_raw().Anonymous.Anonymous.Anonymous.parray as *const SAFEARRAY;
        if psa.is_null() {
            return None;
        }
        let lower = SafeArrayGetLBound(psa, 1).ok()?;
        let upper = SafeArrayGetUBound(psa, 1).ok()?;
        let count = usize::try_from(upper - lower + 1).unwrap_or(0);
        let mut data: *mut T = std::ptr::null_mut();
        SafeArrayAccessData(psa, (&raw mut data).cast()).ok()?;
        let items = if data.is_null() { Vec::new() } else { std::slice::from_raw_parts(data, count).to_vec() };
        let _ = SafeArrayUnaccessData(psa);
        Some(items)
    }
}
