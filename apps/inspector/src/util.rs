use owo_colors::{OwoColorize, Stream};

pub fn colorize_node_label(label: &str) -> String {
    label.if_supports_color(Stream::Stdout, |text| text.bold().fg_rgb::<79, 166, 255>().to_string()).to_string()
}

pub fn colorize_group_name(name: &str) -> String {
    name.if_supports_color(Stream::Stdout, |text| text.bold().fg_rgb::<241, 149, 255>().to_string()).to_string()
}

pub fn colorize_important(value: &str) -> String {
    value.if_supports_color(Stream::Stdout, |text| text.bold().fg_rgb::<136, 192, 74>().to_string()).to_string()
}

pub fn colorize_path(path: &str) -> String {
    path.if_supports_color(Stream::Stdout, |text| text.dimmed().to_string()).to_string()
}

/// `ControlType "Name" [automation id]`, omitting empty parts.
pub fn node_label(control_type: &str, name: Option<&str>, automation_id: Option<&str>) -> String {
    let mut label = control_type.to_owned();
    if let Some(name) = name {
        label.push_str(&format!(" \"{name}\""));
    }
    if let Some(automation_id) = automation_id {
        label.push_str(&format!(" [{automation_id}]"));
    }
    label
}

#[cfg(test)]
pub fn strip_ansi(input: &str) -> std::borrow::Cow<'_, str> {
    use std::borrow::Cow;

    if !input.contains('\u{1b}') {
        return Cow::Borrowed(input);
    }
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Button", Some("OK"), Some("ok"), "Button \"OK\" [ok]")]
    #[case("Pane", None, None, "Pane")]
    #[case("Edit", None, Some("field"), "Edit [field]")]
    fn labels_omit_missing_parts(
        #[case] control_type: &str,
        #[case] name: Option<&str>,
        #[case] automation_id: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(node_label(control_type, name, automation_id), expected);
    }

    #[rstest]
    fn strip_ansi_removes_escape_sequences() {
        assert_eq!(strip_ansi("\u{1b}[1mbold\u{1b}[0m text"), "bold text");
    }
}
