//! MSAA (`IAccessible`) state and role decoding.

use super::{entry, group_name, register_pattern_builder};
use crate::detail::{DetailGroup, DetailItem};
use crate::sentinel::render;
use bitflags::bitflags;
use uiscope_core::pattern_properties::legacy_iaccessible as legacy;
use uiscope_core::{PatternId, PatternView, PlatformError};

bitflags! {
    /// `STATE_SYSTEM_*` flags reported by `IAccessible::get_accState`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct LegacyState: u32 {
        const UNAVAILABLE = 0x0000_0001;
        const SELECTED = 0x0000_0002;
        const FOCUSED = 0x0000_0004;
        const PRESSED = 0x0000_0008;
        const CHECKED = 0x0000_0010;
        const MIXED = 0x0000_0020;
        const READONLY = 0x0000_0040;
        const HOTTRACKED = 0x0000_0080;
        const DEFAULT = 0x0000_0100;
        const EXPANDED = 0x0000_0200;
        const COLLAPSED = 0x0000_0400;
        const BUSY = 0x0000_0800;
        const FLOATING = 0x0000_1000;
        const MARQUEED = 0x0000_2000;
        const ANIMATED = 0x0000_4000;
        const INVISIBLE = 0x0000_8000;
        const OFFSCREEN = 0x0001_0000;
        const SIZEABLE = 0x0002_0000;
        const MOVEABLE = 0x0004_0000;
        const SELFVOICING = 0x0008_0000;
        const FOCUSABLE = 0x0010_0000;
        const SELECTABLE = 0x0020_0000;
        const LINKED = 0x0040_0000;
        const TRAVERSED = 0x0080_0000;
        const MULTISELECTABLE = 0x0100_0000;
        const EXTSELECTABLE = 0x0200_0000;
        const ALERT_LOW = 0x0400_0000;
        const ALERT_MEDIUM = 0x0800_0000;
        const ALERT_HIGH = 0x1000_0000;
        const PROTECTED = 0x2000_0000;
    }
}

const STATE_LABELS: &[(LegacyState, &str)] = &[
    (LegacyState::UNAVAILABLE, "unavailable"),
    (LegacyState::SELECTED, "selected"),
    (LegacyState::FOCUSED, "focused"),
    (LegacyState::PRESSED, "pressed"),
    (LegacyState::CHECKED, "checked"),
    (LegacyState::MIXED, "mixed"),
    (LegacyState::READONLY, "read only"),
    (LegacyState::HOTTRACKED, "hot tracked"),
    (LegacyState::DEFAULT, "default"),
    (LegacyState::EXPANDED, "expanded"),
    (LegacyState::COLLAPSED, "collapsed"),
    (LegacyState::BUSY, "busy"),
    (LegacyState::FLOATING, "floating"),
    (LegacyState::MARQUEED, "marqueed"),
    (LegacyState::ANIMATED, "animated"),
    (LegacyState::INVISIBLE, "invisible"),
    (LegacyState::OFFSCREEN, "offscreen"),
    (LegacyState::SIZEABLE, "sizeable"),
    (LegacyState::MOVEABLE, "moveable"),
    (LegacyState::SELFVOICING, "self voicing"),
    (LegacyState::FOCUSABLE, "focusable"),
    (LegacyState::SELECTABLE, "selectable"),
    (LegacyState::LINKED, "linked"),
    (LegacyState::TRAVERSED, "traversed"),
    (LegacyState::MULTISELECTABLE, "multiple selectable"),
    (LegacyState::EXTSELECTABLE, "extended selectable"),
    (LegacyState::ALERT_LOW, "alert low"),
    (LegacyState::ALERT_MEDIUM, "alert medium"),
    (LegacyState::ALERT_HIGH, "alert high"),
    (LegacyState::PROTECTED, "protected"),
];

const ROLE_LABELS: &[&str] = &[
    "title bar",
    "menu bar",
    "scroll bar",
    "grip",
    "sound",
    "cursor",
    "caret",
    "alert",
    "window",
    "client",
    "popup menu",
    "menu item",
    "tool tip",
    "application",
    "document",
    "pane",
    "chart",
    "dialog",
    "border",
    "grouping",
    "separator",
    "tool bar",
    "status bar",
    "table",
    "column header",
    "row header",
    "column",
    "row",
    "cell",
    "link",
    "help balloon",
    "character",
    "list",
    "list item",
    "outline",
    "outline item",
    "page tab",
    "property page",
    "indicator",
    "graphic",
    "static text",
    "editable text",
    "push button",
    "check button",
    "radio button",
    "combo box",
    "drop down",
    "progress bar",
    "dial",
    "hot key field",
    "slider",
    "spin box",
    "diagram",
    "animation",
    "equation",
    "drop down button",
    "menu button",
    "grid drop down button",
    "white space",
    "page tab list",
    "clock",
    "split button",
    "IP address",
    "outline button",
];

/// Comma separated state names; `normal` when no flag is set.
pub fn state_text(raw: u32) -> String {
    let state = LegacyState::from_bits_retain(raw);
    if state.is_empty() {
        return "normal".to_owned();
    }
    let mut names: Vec<String> = STATE_LABELS
        .iter()
        .filter(|(flag, _)| state.contains(*flag))
        .map(|(_, label)| (*label).to_owned())
        .collect();
    let unknown = raw & !LegacyState::all().bits();
    if unknown != 0 {
        names.push(format!("0x{unknown:X}"));
    }
    names.join(", ")
}

/// Name of a `ROLE_SYSTEM_*` code (1-based).
pub fn role_text(raw: u32) -> String {
    raw.checked_sub(1)
        .and_then(|index| usize::try_from(index).ok())
        .and_then(|index| ROLE_LABELS.get(index))
        .map_or_else(|| format!("unknown role ({raw})"), |label| (*label).to_owned())
}

register_pattern_builder!(PatternId::LegacyIAccessible, build);

fn build(view: &dyn PatternView) -> Result<DetailGroup, PlatformError> {
    let state = view.property(legacy::STATE)?;
    let role = view.property(legacy::ROLE)?;
    Ok(DetailGroup::new(
        group_name(view.id()),
        vec![
            entry(view, "Name", legacy::NAME)?,
            DetailItem::new("State", render::<i64, _>(&state, |raw| state_text(truncate(raw)))),
            DetailItem::new("Role", render::<i64, _>(&role, |raw| role_text(truncate(raw)))),
            entry(view, "Value", legacy::VALUE)?,
            entry(view, "Child Id", legacy::CHILD_ID)?,
            entry(view, "Default Action", legacy::DEFAULT_ACTION)?,
            entry(view, "Description", legacy::DESCRIPTION)?,
            entry(view, "Help", legacy::HELP)?,
            entry(view, "Keyboard Shortcut", legacy::KEYBOARD_SHORTCUT)?,
            entry(view, "Selection", legacy::SELECTION)?,
        ],
    ))
}

// VARIANT carries these as VT_I4; reinterpret the low 32 bits.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate(raw: i64) -> u32 {
    raw as u32
}
